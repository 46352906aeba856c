//! System-field stripping over the generic wire tree.
//!
//! Decisions depend on tree shape, not on the original types:
//! - an object carrying the discriminator is a component node; it loses its
//!   system fields, and loses the discriminator unless it sits directly in a
//!   dynamic-zone list
//! - any other object loses its system fields
//! - an array is a dynamic zone iff its first element is an object carrying
//!   the discriminator; the flag reaches its direct children only
//! - scalars and `null` values are kept as they are


use crate::wire::{DISCRIMINATOR_KEY, WireNode, has_discriminator, is_system_field};

/// Strip a tree, returning the cleaned tree.
#[must_use]
pub fn strip(mut node: WireNode) -> WireNode {
    strip_in_place(&mut node);
    node
}

/// Strip a tree in place.
pub fn strip_in_place(node: &mut WireNode) {
    strip_node(node, false);
}

fn strip_node(node: &mut WireNode, in_zone: bool) {
    match node {
        WireNode::Object(map) => {
            let drop_discriminator = !in_zone && map.contains_key(DISCRIMINATOR_KEY);

            // retain keeps insertion order; Map::remove would not
            map.retain(|key, _| {
                !is_system_field(key) && !(drop_discriminator && key == DISCRIMINATOR_KEY)
            });

            for child in map.values_mut() {
                strip_node(child, false);
            }
        }
        WireNode::Array(items) => {
            let zone = items.first().is_some_and(has_discriminator);

            for child in items.iter_mut() {
                strip_node(child, zone);
            }
        }
        _ => {}
    }
}
