//! Reference data for the atlas: spacecraft artifacts, craters, maria and
//! resource deposits, plus helpers that place them on the elevation field.
//!
//! Records are plain immutable data. The built-in set covers a few dozen
//! well-known sites; larger sets load from RON files.

mod builtin;
mod error;
pub mod placement;
mod record;

pub use error::CatalogError;
pub use record::{Artifact, Catalog, Crater, Mare, ResourceDeposit};
