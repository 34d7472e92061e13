use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An enhancing or inhibiting dietary factor attached to a receptor.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Factor {
    pub name: String,
    #[serde(default)]
    pub mechanism: String,
}

/// A protein that assists a receptor (reductase, exporter, binding protein).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SupportingProtein {
    pub name: String,
    #[serde(default)]
    pub function: String,
}

/// Static description of one receptor. Loaded once, never mutated.
///
/// Lists default to empty when absent; only `primary_receptor` is required.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReceptorCatalogEntry {
    pub primary_receptor: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gene: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substrate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanism: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation: Option<String>,
    #[serde(default)]
    pub supporting_proteins: Vec<SupportingProtein>,
    #[serde(default)]
    pub enhancers: Vec<Factor>,
    #[serde(default)]
    pub inhibitors: Vec<Factor>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

impl ReceptorCatalogEntry {
    /// Bare entry with only a primary receptor label.
    #[must_use]
    pub fn new(primary_receptor: impl Into<String>) -> Self {
        Self {
            primary_receptor: primary_receptor.into(),
            name: None,
            icon: None,
            description: None,
            gene: None,
            location: None,
            substrate: None,
            mechanism: None,
            regulation: None,
            supporting_proteins: Vec::new(),
            enhancers: Vec::new(),
            inhibitors: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// One body-system bucket of the catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SystemCatalog {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Receptors keyed by receptor id.
    #[serde(default)]
    pub receptors: BTreeMap<String, ReceptorCatalogEntry>,
}
