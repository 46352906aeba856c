//! Wire tree vocabulary shared by the writer, the stripper and the read path.

use serde_json::{Map, Value};

/// A node of the generic wire tree.
pub type WireNode = Value;

/// An insertion-ordered object node.
pub type WireMap = Map<String, Value>;

/// Reserved key naming the concrete variant of a component node.
pub const DISCRIMINATOR_KEY: &str = "__component";

/// Single key of the request/response envelope.
pub const DATA_KEY: &str = "data";

/// Server-managed fields never sent on write.
pub const SYSTEM_FIELDS: [&str; 5] = ["id", "documentId", "createdAt", "updatedAt", "publishedAt"];

/// Case-insensitive membership test against `SYSTEM_FIELDS`.
#[must_use]
pub fn is_system_field(key: &str) -> bool {
    SYSTEM_FIELDS
        .iter()
        .any(|field| field.eq_ignore_ascii_case(key))
}

/// Discriminator string of an object node, if it carries one.
#[must_use]
pub fn discriminator_of(node: &WireNode) -> Option<&str> {
    node.as_object()
        .and_then(|map| map.get(DISCRIMINATOR_KEY))
        .and_then(Value::as_str)
}

/// Whether the node is an object carrying the discriminator key.
#[must_use]
pub fn has_discriminator(node: &WireNode) -> bool {
    node.as_object()
        .is_some_and(|map| map.contains_key(DISCRIMINATOR_KEY))
}

///
/// TESTS
///
