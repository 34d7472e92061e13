//! Error types for catalog loading and receptor lookups.

use std::path::PathBuf;

use hc_core::errors::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReceptorError {
    /// Catalog file could not be read.
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// TOML catalog did not parse.
    #[error("Catalog TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON catalog did not parse.
    #[error("Catalog JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog file extension is neither `.toml` nor `.json`.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),

    /// Validation or lookup failure shared with other crates.
    #[error(transparent)]
    Core(#[from] CoreError),
}
