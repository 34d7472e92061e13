//! Receptor catalog source configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Extensions the catalog loader understands.
const SUPPORTED_EXTENSIONS: [&str; 2] = ["toml", "json"];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Path to a TOML or JSON catalog. Empty means the built-in catalog.
    #[serde(default)]
    pub path: String,
}

impl CatalogConfig {
    /// Whether a custom catalog file is configured.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.path.trim().is_empty()
    }

    /// Configured catalog path, if any.
    #[must_use]
    pub fn path(&self) -> Option<PathBuf> {
        self.is_configured().then(|| PathBuf::from(self.path.trim()))
    }

    /// Check that a configured path has a supported extension.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for any other extension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(path) = self.path() else {
            return Ok(());
        };

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        if SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
            Ok(())
        } else {
            Err(ConfigError::InvalidValue {
                field: "catalog.path".into(),
                reason: format!("expected a .toml or .json file, got '{}'", path.display()),
            })
        }
    }
}
