//! Application-level errors.

use lunara_catalog::CatalogError;
use lunara_config::ConfigError;

use crate::platform::PlatformError;

/// Anything that stops the atlas from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("failed to initialize logging: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    /// The requested artifact is not in the catalog.
    #[error("no artifact named {0:?} in the catalog")]
    UnknownArtifact(String),
}
