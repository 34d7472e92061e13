//! Response types returned as JSON by `hcore` commands.
//!
//! These structs define the shape of output for `hcore status`,
//! `hcore receptor`, `hcore system`, and `hcore systems`.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ReceptorCatalogEntry, ReceptorEfficiencyResult};
use crate::enums::{BodySystem, ClusterStatus};

/// Display view of one receptor paired with its computed efficiency.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReceptorCluster {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub status: ClusterStatus,
    /// Efficiency truncated toward zero.
    pub efficiency: i64,
    pub receptors: Vec<String>,
    /// Enhancement factors followed by limiting factors.
    pub current_nutrients: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Per-system section of `hcore status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SystemReport {
    pub system: BodySystem,
    pub efficiency: f64,
    pub active_receptors: usize,
    pub clusters: Vec<ReceptorCluster>,
    /// Classified per-receptor results with separate limiting and enhancement factors.
    pub receptor_details: Vec<ReceptorEfficiencyResult>,
    pub commentary: String,
    pub last_updated: DateTime<Utc>,
    pub notes: String,
}

/// Response from `hcore status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ReceptorStatusResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub systems: BTreeMap<BodySystem, SystemReport>,
}

/// One row of `hcore systems`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SystemSummary {
    pub system: BodySystem,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub receptor_count: usize,
}

/// Response from `hcore receptor <name>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReceptorInfoResponse {
    pub system: BodySystem,
    pub receptor_id: String,
    pub entry: ReceptorCatalogEntry,
}

/// Response from `hcore system <id>`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SystemReceptorsResponse {
    pub system: BodySystem,
    pub count: usize,
    pub receptors: BTreeMap<String, ReceptorCatalogEntry>,
}
