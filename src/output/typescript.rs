//! TypeScript output formatter.
//!
//! Emits the instance interface declaration of the base model, ready to be
//! pasted into a Sequelize v4 model definition.

use super::formatter::OutputFormatter;
use crate::error::Result;
use crate::model::BaseModelDescriptor;
use crate::render::render_interface;

pub struct TypescriptFormatter;

impl OutputFormatter for TypescriptFormatter {
    fn format(&self, model: &BaseModelDescriptor) -> Result<String> {
        Ok(render_interface(model))
    }
}
