//! JSON output formatter.
//!
//! Lists the accessors of every association as data, for tooling that wants
//! the accessor set without parsing TypeScript.

use serde::Serialize;

use super::formatter::OutputFormatter;
use crate::error::Result;
use crate::model::BaseModelDescriptor;
use crate::render::{Accessor, accessors};

#[derive(Serialize)]
struct InterfaceDocument {
    interface: String,
    associations: Vec<AssociationEntry>,
}

#[derive(Serialize)]
struct AssociationEntry {
    model: String,
    kind: &'static str,
    accessors: Vec<AccessorEntry>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccessorEntry {
    name: String,
    mixin: String,
    type_args: Vec<String>,
}

impl From<Accessor> for AccessorEntry {
    fn from(accessor: Accessor) -> Self {
        Self {
            name: accessor.name,
            mixin: accessor.mixin,
            type_args: accessor.type_args,
        }
    }
}

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, model: &BaseModelDescriptor) -> Result<String> {
        let document = InterfaceDocument {
            interface: model.interface_name(),
            associations: model
                .associations
                .iter()
                .map(|descriptor| AssociationEntry {
                    model: descriptor.association_model_name.clone(),
                    kind: descriptor.kind.as_str(),
                    accessors: accessors(descriptor).into_iter().map(Into::into).collect(),
                })
                .collect(),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
