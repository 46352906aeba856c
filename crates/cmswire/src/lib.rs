//! ## Crate layout
//! - `model`, `classify`: declared content metadata and role classification.
//! - `write`, `strip`: typed values → request payloads.
//! - `plan`: populate paths for read requests.
//! - `registry`, `read`: discriminator resolution and response decoding.
//! - `client`: request assembly over a caller-supplied transport.
//!
//! Content types derive `Content`; dynamic-zone element enums derive
//! `ComponentUnion`. Both derives emit paths under `::cmswire`.

pub use cmswire_core::{
    DEFAULT_POPULATE_DEPTH, Error, __reexports, classify, client, error, impl_wire_scalar, model,
    plan, read, registry, strip, traits, types, wire, write,
};
pub use cmswire_derive::{ComponentUnion, Content};

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Prelude
/// Derives, traits and domain vocabulary; bring in with `use cmswire::prelude::*`.
///

pub mod prelude {
    pub use crate::{ComponentUnion, Content};
    pub use cmswire_core::prelude::*;
    pub use serde::{Deserialize, Serialize};
}
