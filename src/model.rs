use std::fmt;

/// The kind of a Sequelize association, selecting which accessor set applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationKind {
    BelongsTo,
    HasOne,
    HasMany,
    BelongsToMany,
}

impl AssociationKind {
    pub const ALL: [AssociationKind; 4] = [
        AssociationKind::BelongsTo,
        AssociationKind::HasOne,
        AssociationKind::HasMany,
        AssociationKind::BelongsToMany,
    ];

    /// Parses the literal accepted on the command line. Matching is exact.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == value)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssociationKind::BelongsTo => "BelongsTo",
            AssociationKind::HasOne => "HasOne",
            AssociationKind::HasMany => "HasMany",
            AssociationKind::BelongsToMany => "BelongsToMany",
        }
    }

    /// Returns true for kinds whose accessors operate on many targets and
    /// therefore need a plural alias.
    pub fn is_collection(&self) -> bool {
        matches!(
            self,
            AssociationKind::HasMany | AssociationKind::BelongsToMany
        )
    }

    pub fn needs_join_table(&self) -> bool {
        matches!(self, AssociationKind::BelongsToMany)
    }
}

impl fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One association of the base model, assembled from the same position of
/// every list flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationDescriptor {
    /// Name of the related model (e.g. "Post")
    pub association_model_name: String,
    /// Alias used for single-item accessors (getPost, createPost, ...)
    pub singular: String,
    /// Alias used for multi-item accessors (getPosts, countPosts, ...)
    pub plural: Option<String>,
    pub kind: AssociationKind,
    /// Join table name or a quoted join attributes type; BelongsToMany only
    pub join_table_name: Option<String>,
}

impl AssociationDescriptor {
    /// Plural alias, falling back to the singular for kinds that never use it.
    pub fn plural(&self) -> &str {
        self.plural.as_deref().unwrap_or(&self.singular)
    }

    pub fn join_attributes(&self) -> Option<JoinAttributes> {
        self.join_table_name.as_deref().map(JoinAttributes::from_input)
    }
}

/// The type carried by BelongsToMany accessors that write to the join table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JoinAttributes {
    /// A quoted value, used as the type reference verbatim.
    Literal(String),
    /// A bare join table name; the attributes interface is derived from it.
    Table(String),
}

impl JoinAttributes {
    pub fn from_input(value: &str) -> Self {
        if value.starts_with('\'') || value.starts_with('"') {
            JoinAttributes::Literal(value.to_string())
        } else {
            JoinAttributes::Table(value.to_string())
        }
    }

    pub fn type_ref(&self) -> String {
        match self {
            JoinAttributes::Literal(literal) => literal.clone(),
            JoinAttributes::Table(table) => format!("I{}Attributes", table),
        }
    }
}

/// The model whose instance interface is generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseModelDescriptor {
    pub base_model_name: String,
    /// In input order; only affects output order.
    pub associations: Vec<AssociationDescriptor>,
}

impl BaseModelDescriptor {
    pub fn interface_name(&self) -> String {
        format!("I{}Instance", self.base_model_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_all_kinds() {
        for kind in AssociationKind::ALL {
            assert_eq!(AssociationKind::parse(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn parse_rejects_unknown_and_miscased_values() {
        assert_eq!(AssociationKind::parse("HasSome"), None);
        assert_eq!(AssociationKind::parse("hasmany"), None);
        assert_eq!(AssociationKind::parse(""), None);
        assert_eq!(AssociationKind::parse(" HasOne"), None);
    }

    #[test]
    fn only_collection_kinds_need_plural() {
        assert!(!AssociationKind::BelongsTo.is_collection());
        assert!(!AssociationKind::HasOne.is_collection());
        assert!(AssociationKind::HasMany.is_collection());
        assert!(AssociationKind::BelongsToMany.is_collection());
    }

    #[test]
    fn only_belongs_to_many_needs_join_table() {
        let needing: Vec<_> = AssociationKind::ALL
            .into_iter()
            .filter(|kind| kind.needs_join_table())
            .collect();
        assert_eq!(needing, vec![AssociationKind::BelongsToMany]);
    }

    #[test]
    fn display_matches_cli_literal() {
        assert_eq!(AssociationKind::BelongsToMany.to_string(), "BelongsToMany");
    }

    #[test]
    fn join_attributes_double_quoted_is_literal() {
        let join = JoinAttributes::from_input("\"MyJoinAttrs\"");
        assert_eq!(join, JoinAttributes::Literal("\"MyJoinAttrs\"".to_string()));
        assert_eq!(join.type_ref(), "\"MyJoinAttrs\"");
    }

    #[test]
    fn join_attributes_single_quoted_is_literal() {
        let join = JoinAttributes::from_input("'MyJoinAttrs'");
        assert_eq!(join.type_ref(), "'MyJoinAttrs'");
    }

    #[test]
    fn join_attributes_bare_name_gets_suffix() {
        let join = JoinAttributes::from_input("UserRole");
        assert_eq!(join, JoinAttributes::Table("UserRole".to_string()));
        assert_eq!(join.type_ref(), "IUserRoleAttributes");
    }

    #[test]
    fn plural_falls_back_to_singular() {
        let descriptor = AssociationDescriptor {
            association_model_name: "Profile".to_string(),
            singular: "Profile".to_string(),
            plural: None,
            kind: AssociationKind::HasOne,
            join_table_name: None,
        };
        assert_eq!(descriptor.plural(), "Profile");
        assert_eq!(descriptor.join_attributes(), None);
    }

    #[test]
    fn interface_name_wraps_base_model() {
        let model = BaseModelDescriptor {
            base_model_name: "User".to_string(),
            associations: Vec::new(),
        };
        assert_eq!(model.interface_name(), "IUserInstance");
    }
}
