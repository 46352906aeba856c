//! Core runtime for cmswire: content metadata, role classification, the
//! write mapper, the system-field stripper, the populate planner, the
//! polymorphic registry and the read path.
#![warn(unreachable_pub)]

extern crate self as cmswire;

#[macro_use]
mod macros;

// public exports are one module level down
pub mod classify;
pub mod client;
pub mod error;
pub mod model;
pub mod plan;
pub mod read;
pub mod registry;
pub mod strip;
pub mod traits;
pub mod types;
pub mod wire;
pub mod write;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// CONSTANTS
///

/// Default depth bound used by the client when planning populate paths.
pub const DEFAULT_POPULATE_DEPTH: usize = 3;

/// re-exports
///
/// derive output refers to these so downstream crates do not have to list
/// serde and serde_json themselves
pub mod __reexports {
    pub use serde;
    pub use serde_json;
}

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, clients, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        classify::Role,
        model::{ContentModel, FieldKind, FieldModel, Marker, UnionModel},
        plan::PopulatePlan,
        traits::{ComponentUnion, Content, WireField},
        types::Media,
        wire::{WireMap, WireNode},
    };
}
