//! Type role classification.
//!
//! A pure switch over declared metadata: the same kind always yields the
//! same role. Priority follows the declaration rules: scalars first, then
//! the media type, then component, collection and singleton markers, then
//! sequences, and finally opaque objects.

use crate::model::{ContentModel, FieldKind, Marker};
use derive_more::Display;
use std::collections::BTreeSet;

///
/// Role
///

#[derive(Clone, Debug, Display, Eq, PartialEq)]
pub enum Role {
    Scalar,
    MediaRef,
    EntityRelation,
    SingleInstance,
    PolymorphicComponent,
    /// Plain nested object; mapped field by field, never collapsed to an id.
    Object,
    #[display("ListOf({_0})")]
    ListOf(Box<Self>),
}

impl Role {
    /// Role of the elements, with every list layer removed.
    #[must_use]
    pub fn element(&self) -> &Self {
        match self {
            Self::ListOf(inner) => inner.element(),
            other => other,
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::ListOf(_))
    }

    /// Roles whose values are written as a bare identifier.
    #[must_use]
    pub const fn is_reference(&self) -> bool {
        matches!(
            self,
            Self::MediaRef | Self::EntityRelation | Self::SingleInstance
        )
    }

    /// Roles the populate planner expands unconditionally.
    #[must_use]
    pub fn is_navigational(&self) -> bool {
        matches!(
            self.element(),
            Self::MediaRef | Self::EntityRelation | Self::SingleInstance | Self::PolymorphicComponent
        )
    }
}

/// Classify a declared field kind.
#[must_use]
pub fn role_of(kind: &FieldKind) -> Role {
    match kind {
        FieldKind::Scalar(_) => Role::Scalar,
        FieldKind::Media => Role::MediaRef,
        FieldKind::Union(_) => Role::PolymorphicComponent,
        FieldKind::Content(model) => role_of_model(model()),
        FieldKind::List(inner) => Role::ListOf(Box::new(role_of(inner))),
    }
}

/// Classify a content type by its marker.
#[must_use]
pub const fn role_of_model(model: &ContentModel) -> Role {
    match model.marker {
        Some(Marker::Component(_)) => Role::PolymorphicComponent,
        Some(Marker::Collection(_)) => Role::EntityRelation,
        Some(Marker::Singleton(_)) => Role::SingleInstance,
        None => Role::Object,
    }
}

#[must_use]
pub fn is_scalar(kind: &FieldKind) -> bool {
    role_of(kind) == Role::Scalar
}

#[must_use]
pub fn is_media(kind: &FieldKind) -> bool {
    matches!(role_of(kind).element(), Role::MediaRef)
}

#[must_use]
pub fn is_relation(kind: &FieldKind) -> bool {
    matches!(role_of(kind).element(), Role::EntityRelation)
}

#[must_use]
pub fn is_single_instance(kind: &FieldKind) -> bool {
    matches!(role_of(kind).element(), Role::SingleInstance)
}

#[must_use]
pub fn is_component(kind: &FieldKind) -> bool {
    matches!(role_of(kind).element(), Role::PolymorphicComponent)
}

#[must_use]
pub fn is_navigational(kind: &FieldKind) -> bool {
    role_of(kind).is_navigational()
}

/// Role of the innermost element of a (possibly nested) list kind.
#[must_use]
pub fn element_role(kind: &FieldKind) -> Role {
    role_of(kind.element())
}

/// Whether an opaque object reaches any navigational field, directly or
/// through nested opaque objects. Marked types are not entered.
#[must_use]
pub fn has_navigation(model: &ContentModel) -> bool {
    let mut visited = BTreeSet::new();

    reaches_navigation(model, &mut visited)
}

fn reaches_navigation(model: &ContentModel, visited: &mut BTreeSet<&'static str>) -> bool {
    if !visited.insert(model.path) {
        return false;
    }

    model.fields.iter().filter(|f| f.populate).any(|field| {
        let role = field.role();
        if role.is_navigational() {
            return true;
        }

        matches!(role.element(), Role::Object)
            && field
                .kind
                .targets()
                .into_iter()
                .any(|target| reaches_navigation(target, visited))
    })
}

///
/// TESTS
///
