//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default tracing filter when neither `--quiet` nor `--verbose` is given.
fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// User id attached to status responses when `--user` is not given.
    #[serde(default)]
    pub default_user_id: String,

    /// Default tracing filter (e.g., "warn", "info", "hc_receptors=debug").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl GeneralConfig {
    /// Configured default user id, if any.
    #[must_use]
    pub fn default_user(&self) -> Option<String> {
        let trimmed = self.default_user_id.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_user_id: String::new(),
            log_level: default_log_level(),
        }
    }
}
