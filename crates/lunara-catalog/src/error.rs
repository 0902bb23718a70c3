//! Catalog error types.

use std::path::PathBuf;

/// Errors that can occur when loading or saving a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the catalog file.
    #[error("failed to write catalog {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid RON catalog.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// Failed to serialize the catalog to RON.
    #[error("failed to serialize catalog: {0}")]
    Serialize(#[from] ron::Error),
}
