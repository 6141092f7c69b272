//! Accessor sets for each association kind.
//!
//! Every kind has its own builder; the type arguments follow the Sequelize v4
//! mixin typings, where `I<Model>Instance['id']` stands for the target's
//! primary key type.

use crate::model::{AssociationDescriptor, AssociationKind};

/// One accessor declared on the base model instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    /// Property name, e.g. `getPosts`
    pub name: String,
    /// Mixin type name inside the `sequelize` namespace
    pub mixin: String,
    pub type_args: Vec<String>,
}

impl Accessor {
    fn new(name: String, mixin: String, type_args: Vec<String>) -> Self {
        Self {
            name,
            mixin,
            type_args,
        }
    }

    /// The property type, e.g. `sequelize.HasManyGetAssociationsMixin<IPostInstance>`.
    pub fn type_expr(&self) -> String {
        if self.type_args.is_empty() {
            format!("sequelize.{}", self.mixin)
        } else {
            format!("sequelize.{}<{}>", self.mixin, self.type_args.join(", "))
        }
    }
}

/// Type names derived from the association target.
struct TargetTypes {
    instance: String,
    attributes: String,
    id: String,
}

impl TargetTypes {
    fn of(descriptor: &AssociationDescriptor) -> Self {
        let instance = format!("I{}Instance", descriptor.association_model_name);
        Self {
            attributes: format!("I{}Attributes", descriptor.association_model_name),
            id: format!("{}['id']", instance),
            instance,
        }
    }
}

/// Returns the accessors declared for one association, in declaration order.
pub fn accessors(descriptor: &AssociationDescriptor) -> Vec<Accessor> {
    match descriptor.kind {
        AssociationKind::BelongsTo => belongs_to(descriptor),
        AssociationKind::HasOne => has_one(descriptor),
        AssociationKind::HasMany => has_many(descriptor),
        AssociationKind::BelongsToMany => belongs_to_many(descriptor),
    }
}

fn belongs_to(descriptor: &AssociationDescriptor) -> Vec<Accessor> {
    single(descriptor, AssociationKind::BelongsTo)
}

fn has_one(descriptor: &AssociationDescriptor) -> Vec<Accessor> {
    single(descriptor, AssociationKind::HasOne)
}

fn single(descriptor: &AssociationDescriptor, kind: AssociationKind) -> Vec<Accessor> {
    let types = TargetTypes::of(descriptor);
    let singular = &descriptor.singular;
    let mixin = |action: &str| format!("{}{}AssociationMixin", kind, action);

    vec![
        Accessor::new(
            format!("get{}", singular),
            mixin("Get"),
            vec![types.instance.clone()],
        ),
        Accessor::new(
            format!("set{}", singular),
            mixin("Set"),
            vec![types.instance.clone(), types.id.clone()],
        ),
        Accessor::new(
            format!("create{}", singular),
            mixin("Create"),
            vec![types.attributes],
        ),
    ]
}

fn has_many(descriptor: &AssociationDescriptor) -> Vec<Accessor> {
    let types = TargetTypes::of(descriptor);
    let create_args = vec![types.attributes.clone(), types.instance.clone()];
    collection(descriptor, AssociationKind::HasMany, &types, create_args, None)
}

fn belongs_to_many(descriptor: &AssociationDescriptor) -> Vec<Accessor> {
    let types = TargetTypes::of(descriptor);
    let join = descriptor.join_attributes().map(|join| join.type_ref());
    let mut create_args = vec![types.attributes.clone(), types.id.clone()];
    create_args.extend(join.clone());
    collection(
        descriptor,
        AssociationKind::BelongsToMany,
        &types,
        create_args,
        join,
    )
}

/// Builds the ten collection accessors. `join` is appended to the accessors
/// that write rows into the join table.
fn collection(
    descriptor: &AssociationDescriptor,
    kind: AssociationKind,
    types: &TargetTypes,
    create_args: Vec<String>,
    join: Option<String>,
) -> Vec<Accessor> {
    let singular = &descriptor.singular;
    let plural = descriptor.plural();
    let one = |action: &str| format!("{}{}AssociationMixin", kind, action);
    let many = |action: &str| format!("{}{}AssociationsMixin", kind, action);

    let instance = || vec![types.instance.clone()];
    let keyed = || vec![types.instance.clone(), types.id.clone()];
    let keyed_with_join = || {
        let mut args = keyed();
        args.extend(join.clone());
        args
    };

    vec![
        Accessor::new(format!("get{}", plural), many("Get"), instance()),
        Accessor::new(format!("set{}", plural), many("Set"), keyed_with_join()),
        Accessor::new(format!("add{}", plural), many("Add"), keyed_with_join()),
        Accessor::new(format!("add{}", singular), one("Add"), keyed_with_join()),
        Accessor::new(format!("create{}", singular), one("Create"), create_args),
        Accessor::new(format!("remove{}", singular), one("Remove"), keyed()),
        Accessor::new(format!("remove{}", plural), many("Remove"), keyed()),
        Accessor::new(format!("has{}", singular), one("Has"), keyed()),
        Accessor::new(format!("has{}", plural), many("Has"), keyed()),
        Accessor::new(format!("count{}", plural), many("Count"), Vec::new()),
    ]
}
