//! Lunar atlas application: wires configuration, logging, the catalog, the
//! elevation field, label placement and trajectory animation together.

pub mod atlas;
pub mod error;
pub mod frame_clock;
pub mod platform;
