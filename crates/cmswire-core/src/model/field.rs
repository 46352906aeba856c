use crate::{
    classify::{self, Role},
    model::{ContentModel, ModelFn, UnionFn},
};
use derive_more::Display;

///
/// ScalarKind
///
/// Built-in value kinds passed through unchanged on write.
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum ScalarKind {
    Bool,
    Date,
    DateTime,
    /// Enum-like or otherwise user-declared scalar, serialized with serde.
    Enum,
    Float,
    Integer,
    Json,
    Text,
    Time,
    Uuid,
}

///
/// FieldKind
///
/// Declared type shape of a field.
/// `Option` and `Box` wrappers are transparent and never appear here.
///

#[derive(Clone, Debug)]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// The dedicated media-reference type.
    Media,
    /// A type with its own content model (marked or opaque).
    Content(ModelFn),
    /// A closed union of components.
    Union(UnionFn),
    List(Box<Self>),
}

impl FieldKind {
    #[must_use]
    pub fn list(inner: Self) -> Self {
        Self::List(Box::new(inner))
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Innermost element kind, with every list layer removed.
    #[must_use]
    pub fn element(&self) -> &Self {
        match self {
            Self::List(inner) => inner.element(),
            other => other,
        }
    }

    /// Content models this kind points at, in declaration order.
    /// Unions yield every variant; scalars and media yield nothing.
    #[must_use]
    pub fn targets(&self) -> Vec<&'static ContentModel> {
        match self.element() {
            Self::Content(model) => vec![model()],
            Self::Union(union) => union().models().collect(),
            Self::Scalar(_) | Self::Media | Self::List(_) => Vec::new(),
        }
    }
}

///
/// FieldModel
/// Field descriptor: identifier, wire name, kind, populate flag.
///

#[derive(Clone, Debug)]
pub struct FieldModel {
    /// Rust identifier.
    pub ident: &'static str,
    /// Name on the wire.
    pub name: &'static str,
    pub kind: FieldKind,
    /// Cleared for fields that must never be eagerly populated.
    pub populate: bool,
}

impl FieldModel {
    #[must_use]
    pub const fn new(ident: &'static str, name: &'static str, kind: FieldKind) -> Self {
        Self {
            ident,
            name,
            kind,
            populate: true,
        }
    }

    #[must_use]
    pub fn skip_populate(mut self) -> Self {
        self.populate = false;
        self
    }

    /// Role of the field, computed from its kind.
    #[must_use]
    pub fn role(&self) -> Role {
        classify::role_of(&self.kind)
    }
}
