//! # hc-config
//!
//! Layered configuration loading for HealthCore using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HEALTHCORE_*` prefix, `__` as separator)
//! 2. Project-level `.healthcore/config.toml`
//! 3. User-level `~/.config/healthcore/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HEALTHCORE_CATALOG__PATH` -> `catalog.path`,
//! `HEALTHCORE_GENERAL__DEFAULT_USER_ID` -> `general.default_user_id`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hc_config::HealthConfig;
//!
//! let config = HealthConfig::load_with_dotenv().expect("config");
//!
//! if let Some(path) = config.catalog.path() {
//!     println!("Catalog: {}", path.display());
//! }
//! ```

mod catalog;
mod error;
mod general;

pub use catalog::CatalogConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HealthConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HealthConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`HealthConfig::load_with_dotenv`] if you
    /// need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse and
    /// [`ConfigError::InvalidValue`] if a value fails validation.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`HealthConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "loaded dotenv file");
        }
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`HealthConfig::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.catalog.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".healthcore/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("HEALTHCORE_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("healthcore").join("config.toml"))
    }
}
