//! Read path: wire tree → typed content.
//!
//! Decoding is serde's job; this module only reconciles polymorphic
//! components against the registries first. Every union node in the tree is
//! resolved by its discriminator, walking the target model alongside the
//! tree. In strict mode a missing or unknown discriminator fails the read;
//! in lenient mode the element is dropped (list) or nulled (single field)
//! and the drop is logged.

#[cfg(test)]
mod tests;

use crate::{
    error::ErrorClass,
    model::{ContentModel, FieldKind, UnionModel},
    registry::RegistryError,
    traits::{ComponentUnion, Content},
    wire::{DATA_KEY, WireMap, WireNode, discriminator_of},
};
use derive_more::Display;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::str::FromStr;
use thiserror::Error as ThisError;
use tracing::warn;

///
/// ReadError
///

#[derive(Debug, ThisError)]
pub enum ReadError {
    #[error("payload could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("{contract}: component node has no discriminator")]
    MissingDiscriminator { contract: &'static str },

    #[error("union '{union}' has no variant for type '{path}'")]
    UnknownVariant {
        union: &'static str,
        path: &'static str,
    },

    #[error("response has no 'data' envelope")]
    MissingEnvelope,
}

impl ReadError {
    pub(crate) const fn class(&self) -> ErrorClass {
        match self {
            Self::Json(_) | Self::MissingEnvelope => ErrorClass::Decode,
            Self::Registry(err) => err.class(),
            Self::MissingDiscriminator { .. } => ErrorClass::UnknownDiscriminator,
            Self::UnknownVariant { .. } => ErrorClass::Configuration,
        }
    }

    // Data-shape problems lenient mode may drop; everything else still fails.
    const fn is_droppable(&self) -> bool {
        matches!(
            self,
            Self::MissingDiscriminator { .. } | Self::Registry(RegistryError::NotRecognized { .. })
        )
    }
}

///
/// ReadMode
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadMode {
    #[default]
    #[display("strict")]
    Strict,

    #[display("lenient")]
    Lenient,
}

impl FromStr for ReadMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            other => Err(format!("unknown read mode '{other}'")),
        }
    }
}

/// Decode one content value.
pub fn decode<T>(mut node: WireNode, mode: ReadMode) -> Result<T, ReadError>
where
    T: Content + DeserializeOwned,
{
    reconcile(T::model(), &mut node, mode)?;

    decode_value(node)
}

/// Decode a list of content values.
pub fn decode_list<T>(mut node: WireNode, mode: ReadMode) -> Result<Vec<T>, ReadError>
where
    T: Content + DeserializeOwned,
{
    if let WireNode::Array(items) = &mut node {
        for item in items {
            reconcile(T::model(), item, mode)?;
        }
    }

    decode_value(node)
}

/// Decode a union value by its discriminator.
pub fn decode_union<U: ComponentUnion>(node: WireNode) -> Result<U, ReadError> {
    let registry = U::registry()?;
    let discriminator = discriminator_of(&node).ok_or(ReadError::MissingDiscriminator {
        contract: registry.contract(),
    })?;
    let model = registry.resolve(discriminator)?;

    U::decode_variant(model, node)
}

/// Plain serde decode, without reconciliation.
pub fn decode_value<T: DeserializeOwned>(node: WireNode) -> Result<T, ReadError> {
    serde_json::from_value(node).map_err(ReadError::from)
}

/// Drop every union node whose discriminator is missing or unknown.
/// Returns how many nodes were dropped.
pub fn prune_unknown(model: &ContentModel, node: &mut WireNode) -> Result<usize, ReadError> {
    reconcile(model, node, ReadMode::Lenient)
}

/// Check (strict) or prune (lenient) the union nodes beneath `node`.
/// Returns how many nodes were dropped.
pub fn reconcile(
    model: &ContentModel,
    node: &mut WireNode,
    mode: ReadMode,
) -> Result<usize, ReadError> {
    let mut walker = Reconcile { mode, dropped: 0 };
    walker.model(model, node)?;

    Ok(walker.dropped)
}

/// Wrap a payload as `{"data": payload}`.
#[must_use]
pub fn envelope(node: WireNode) -> WireNode {
    let mut map = WireMap::with_capacity(1);
    map.insert(DATA_KEY.to_string(), node);

    WireNode::Object(map)
}

/// Take the payload out of a `{"data": payload}` response.
pub fn unwrap_envelope(node: WireNode) -> Result<WireNode, ReadError> {
    match node {
        WireNode::Object(mut map) => map.remove(DATA_KEY).ok_or(ReadError::MissingEnvelope),
        _ => Err(ReadError::MissingEnvelope),
    }
}

///
/// Reconcile
///

struct Reconcile {
    mode: ReadMode,
    dropped: usize,
}

impl Reconcile {
    fn model(&mut self, model: &ContentModel, node: &mut WireNode) -> Result<(), ReadError> {
        let WireNode::Object(map) = node else {
            return Ok(());
        };

        for field in &model.fields {
            if let Some(value) = map.get_mut(field.name) {
                self.kind(&field.kind, value)?;
            }
        }

        Ok(())
    }

    fn kind(&mut self, kind: &FieldKind, node: &mut WireNode) -> Result<(), ReadError> {
        match kind {
            FieldKind::Scalar(_) | FieldKind::Media => Ok(()),
            FieldKind::Content(model) => self.model(model(), node),
            FieldKind::Union(union) => {
                if !self.union(union(), node)? {
                    *node = WireNode::Null;
                }
                Ok(())
            }
            FieldKind::List(inner) => {
                let WireNode::Array(items) = node else {
                    return Ok(());
                };

                if let FieldKind::Union(union) = inner.as_ref() {
                    let union = union();
                    let mut kept = Vec::with_capacity(items.len());

                    for mut item in items.drain(..) {
                        if self.union(union, &mut item)? {
                            kept.push(item);
                        }
                    }
                    *items = kept;
                } else {
                    for item in items {
                        self.kind(inner, item)?;
                    }
                }

                Ok(())
            }
        }
    }

    // Whether the node stays.
    fn union(&mut self, union: &UnionModel, node: &mut WireNode) -> Result<bool, ReadError> {
        if node.is_null() {
            return Ok(true);
        }

        let registry = (union.registry)()?;
        let resolved = match discriminator_of(node) {
            Some(discriminator) => registry.resolve(discriminator).map_err(ReadError::from),
            None => Err(ReadError::MissingDiscriminator {
                contract: registry.contract(),
            }),
        };

        match resolved {
            Ok(model) => {
                self.model(model, node)?;
                Ok(true)
            }
            Err(err) if self.mode == ReadMode::Lenient && err.is_droppable() => {
                warn!(contract = registry.contract(), error = %err, "dropping unreadable component");
                self.dropped += 1;
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }
}
