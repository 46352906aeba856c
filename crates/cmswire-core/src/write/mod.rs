//! Write mapping: typed content → wire tree.
//!
//! The root value always maps to its own fields. Nested values follow the
//! role of their declared kind: references collapse to ids, components gain
//! a discriminator, opaque objects are recursed into. A missing reference is
//! never an error; it maps to `null`.


use crate::{
    classify,
    error::ErrorClass,
    model::{ContentModel, Marker},
    registry::RegistryError,
    strip,
    traits::{ComponentUnion, Content, WireField},
    types::Media,
    wire::{DISCRIMINATOR_KEY, WireMap, WireNode},
};
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// WriteError
///

#[derive(Debug, ThisError)]
pub enum WriteError {
    #[error("component '{path}' has no registered discriminator")]
    UnregisteredComponent { path: &'static str },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("scalar value could not be encoded: {0}")]
    Scalar(#[from] serde_json::Error),
}

impl WriteError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::UnregisteredComponent { .. } => ErrorClass::Configuration,
            Self::Registry(err) => err.class(),
            Self::Scalar(_) => ErrorClass::Encode,
        }
    }
}

/// Map a root value to a wire object of its own fields.
pub fn map_for_write<T: Content>(value: &T) -> Result<WireNode, WriteError> {
    value.write_fields().map(WireNode::Object)
}

/// Map a root value and strip server-managed fields; the request body
/// payload before enveloping.
pub fn prepare_for_write<T: Content>(value: &T) -> Result<WireNode, WriteError> {
    map_for_write(value).map(strip::strip)
}

/// Map a value reached through a field of another value.
pub fn map_nested<T: Content>(value: &T) -> Result<WireNode, WriteError> {
    let model = T::model();

    match model.marker {
        Some(Marker::Collection(_) | Marker::Singleton(_)) => Ok(relation_id(value.document_id())),
        Some(Marker::Component(discriminator)) => {
            component_node(model, discriminator, value.write_fields()?)
        }
        None => value.write_fields().map(WireNode::Object),
    }
}

/// Map a union value: the variant's own fields plus the discriminator the
/// union's registry holds for it.
pub fn map_union<U: ComponentUnion>(value: &U) -> Result<WireNode, WriteError> {
    let model = value.variant_model();
    let discriminator = U::registry()?.discriminator_for(model)?;

    component_node(model, discriminator, value.write_variant()?)
}

/// Map a list according to its element role.
///
/// Reference lists keep only the elements that resolve to an id and
/// collapse to `null` when none do. Every other list maps element by
/// element and keeps `null` entries in place.
pub fn map_list<'a, T, I>(items: I) -> Result<WireNode, WriteError>
where
    T: WireField + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let role = classify::role_of(&T::kind());

    if role.is_reference() {
        let ids = items
            .into_iter()
            .map(WireField::to_wire)
            .filter(|node| !matches!(node, Ok(WireNode::Null)))
            .collect::<Result<Vec<_>, _>>()?;

        return Ok(if ids.is_empty() {
            WireNode::Null
        } else {
            WireNode::Array(ids)
        });
    }

    items
        .into_iter()
        .map(WireField::to_wire)
        .collect::<Result<Vec<_>, _>>()
        .map(WireNode::Array)
}

/// Numeric id of a media reference, or `null`.
#[must_use]
pub fn media_id(media: &Media) -> WireNode {
    media
        .wire_id()
        .map_or(WireNode::Null, WireNode::from)
}

/// Opaque string id of a relation, or `null` when absent or blank.
#[must_use]
pub fn relation_id(document_id: Option<&str>) -> WireNode {
    match document_id {
        Some(id) if !id.trim().is_empty() => WireNode::String(id.to_string()),
        _ => WireNode::Null,
    }
}

/// Encode a scalar with serde.
pub fn scalar_to_wire<T: Serialize + ?Sized>(value: &T) -> Result<WireNode, WriteError> {
    serde_json::to_value(value).map_err(WriteError::from)
}

// Component fields with the discriminator placed first.
fn component_node(
    model: &ContentModel,
    discriminator: &str,
    fields: WireMap,
) -> Result<WireNode, WriteError> {
    if discriminator.trim().is_empty() {
        return Err(WriteError::UnregisteredComponent { path: model.path });
    }

    let mut map = WireMap::with_capacity(fields.len() + 1);
    map.insert(
        DISCRIMINATOR_KEY.to_string(),
        WireNode::String(discriminator.to_string()),
    );
    map.extend(fields);

    Ok(WireNode::Object(map))
}
