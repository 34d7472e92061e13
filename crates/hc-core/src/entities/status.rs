use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{BodySystem, ReceptorClass};

/// Efficiency of one receptor given a set of nutrient reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReceptorEfficiencyResult {
    pub receptor_id: String,
    pub receptor_class: ReceptorClass,
    /// Always within `[20.0, 150.0]`.
    pub efficiency_percentage: f64,
    /// Inhibitor names matched by at least one report.
    pub limiting_factors: BTreeSet<String>,
    /// Enhancer names matched by at least one report.
    pub enhancement_factors: BTreeSet<String>,
}

/// Aggregate over every receptor result in one body system.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SystemStatus {
    pub system: BodySystem,
    /// Mean receptor efficiency, or 100.0 when no receptors contributed.
    pub efficiency: f64,
    pub active_receptors: usize,
    pub receptor_details: Vec<ReceptorEfficiencyResult>,
    pub notes: String,
    pub commentary: String,
    pub last_updated: DateTime<Utc>,
}
