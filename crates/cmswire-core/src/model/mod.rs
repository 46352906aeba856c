//! Runtime content metadata.
//!
//! Types in `model` are the declared shape of content types as emitted by
//! `#[derive(Content)]` and `#[derive(ComponentUnion)]`. The classifier,
//! the planner, the registry and the read path all switch over this data;
//! nothing here inspects live values.
//!
//! Models are built once per type on first use and never mutated
//! afterwards. Cross-type references are `fn` pointers, so building one
//! model never forces another; this is what keeps recursive type graphs
//! (an author with articles with an author) from re-entering their own
//! initialisation.

pub mod content;
pub mod field;
pub mod union;

pub use content::{ContentModel, Marker};
pub use field::{FieldKind, FieldModel, ScalarKind};
pub use union::{UnionModel, UnionVariant};

use crate::registry::{Registry, RegistryError};
use thiserror::Error as ThisError;

/// Lazily resolved reference to a content model.
pub type ModelFn = fn() -> &'static ContentModel;

/// Lazily resolved reference to a union model.
pub type UnionFn = fn() -> &'static UnionModel;

/// Lazily built registry of a union.
pub type RegistryFn = fn() -> Result<&'static Registry, RegistryError>;

///
/// ModelError
///
/// Declaration mistakes detected on a model.
/// These are programming errors and are never patched silently.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ModelError {
    #[error("type '{path}' declares conflicting markers: {markers}")]
    ConflictingMarkers { path: &'static str, markers: String },

    #[error("type '{path}' declares an empty {marker} name")]
    EmptyMarker {
        path: &'static str,
        marker: &'static str,
    },

    #[error("type '{path}' maps more than one field to wire name '{name}'")]
    DuplicateField { path: &'static str, name: &'static str },

    #[error("type '{path}' has a field with an empty wire name")]
    EmptyFieldName { path: &'static str },
}
