//! Rendering of association descriptors into TypeScript declarations.
//!
//! Rendering is a pure transform: descriptors are validated when they are
//! assembled from the command line, so nothing here can fail.

pub mod accessor;

pub use accessor::{Accessor, accessors};

use crate::model::{AssociationDescriptor, BaseModelDescriptor};

const INDENT: &str = "    ";

/// Renders the accessor declarations of one association, one per line.
pub fn render(descriptor: &AssociationDescriptor) -> String {
    accessors(descriptor)
        .iter()
        .map(|accessor| format!("{}{}: {};\n", INDENT, accessor.name, accessor.type_expr()))
        .collect()
}

/// Renders the instance interface of the base model with the declarations of
/// all associations in input order.
pub fn render_interface(model: &BaseModelDescriptor) -> String {
    let body: String = model.associations.iter().map(render).collect();
    let base = &model.base_model_name;

    format!(
        "export interface {} extends sequelize.Instance<I{}Attributes>, I{}Attributes {{\n{}}}\n",
        model.interface_name(),
        base,
        base,
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AssociationKind;

    fn post() -> AssociationDescriptor {
        AssociationDescriptor {
            association_model_name: "Post".to_string(),
            singular: "Post".to_string(),
            plural: Some("Posts".to_string()),
            kind: AssociationKind::HasMany,
            join_table_name: None,
        }
    }

    fn company() -> AssociationDescriptor {
        AssociationDescriptor {
            association_model_name: "Company".to_string(),
            singular: "Employer".to_string(),
            plural: None,
            kind: AssociationKind::BelongsTo,
            join_table_name: None,
        }
    }

    #[test]
    fn render_belongs_to_fragment() {
        assert_eq!(
            render(&company()),
            "    getEmployer: sequelize.BelongsToGetAssociationMixin<ICompanyInstance>;\n\
             \x20   setEmployer: sequelize.BelongsToSetAssociationMixin<ICompanyInstance, ICompanyInstance['id']>;\n\
             \x20   createEmployer: sequelize.BelongsToCreateAssociationMixin<ICompanyAttributes>;\n"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let descriptor = post();
        assert_eq!(render(&descriptor), render(&descriptor));
    }

    #[test]
    fn render_emits_one_line_per_accessor() {
        let fragment = render(&post());
        assert_eq!(fragment.lines().count(), 10);
        assert!(fragment.lines().all(|line| line.starts_with(INDENT)));
        assert!(fragment.lines().all(|line| line.ends_with(';')));
    }

    #[test]
    fn render_interface_keeps_input_order() {
        let model = BaseModelDescriptor {
            base_model_name: "User".to_string(),
            associations: vec![post(), company()],
        };

        let output = render_interface(&model);
        let expected_body = format!("{}{}", render(&post()), render(&company()));

        assert!(output.contains(&expected_body));
        assert!(!output.contains(&format!("{}{}", render(&company()), render(&post()))));
    }

    #[test]
    fn render_interface_wraps_in_base_model_block() {
        let model = BaseModelDescriptor {
            base_model_name: "User".to_string(),
            associations: vec![post()],
        };

        let output = render_interface(&model);
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines[0],
            "export interface IUserInstance extends sequelize.Instance<IUserAttributes>, IUserAttributes {"
        );
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[11], "}");
        assert!(lines[1..11].iter().all(|line| line.contains("Posts") || line.contains("IPostInstance")));
        assert_eq!(
            lines[10],
            "    countPosts: sequelize.HasManyCountAssociationsMixin;"
        );
    }
}
