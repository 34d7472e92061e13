use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One user-logged intake event.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NutrientReport {
    pub name: String,
    pub amount: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timing: Option<DateTime<Utc>>,
}

impl NutrientReport {
    /// Report with no timing information.
    #[must_use]
    pub fn new(name: impl Into<String>, amount: f64, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            unit: unit.into(),
            timing: None,
        }
    }

    #[must_use]
    pub const fn with_timing(mut self, timing: DateTime<Utc>) -> Self {
        self.timing = Some(timing);
        self
    }
}
