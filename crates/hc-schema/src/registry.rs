//! Central schema registry for HealthCore types.
//!
//! The `SchemaRegistry` builds JSON Schemas from hc-core types at construction
//! time using [`schemars::schema_for!`] and provides validation via `jsonschema`.

use std::collections::HashMap;

use hc_core::entities::{
    NutrientReport, ReceptorCatalogEntry, ReceptorEfficiencyResult, SystemCatalog, SystemStatus,
};
use hc_core::responses::{
    ReceptorCluster, ReceptorInfoResponse, ReceptorStatusResponse, SystemReceptorsResponse,
    SystemReport, SystemSummary,
};
use schemars::schema_for;

use crate::error::SchemaError;

/// Schema name for a JSON array of nutrient reports (the `hcore status` input).
pub const NUTRIENT_REPORTS: &str = "nutrient_reports";

/// Central store of JSON Schemas for HealthCore records.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map, converting the `schemars` output to a
/// `serde_json::Value`. Panics if `serde_json::to_value` fails (should be
/// infallible for valid `schemars` output).
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, serde_json::to_value(schema_for!($ty)).unwrap());
    };
}

impl SchemaRegistry {
    /// Build a registry containing entity and response schemas from hc-core.
    ///
    /// # Panics
    ///
    /// Panics if `serde_json::to_value` fails on any `schemars`-generated
    /// schema. This is not expected in practice because `schemars` always
    /// produces valid JSON-serialisable output.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Inputs (2) ---
        register!(schemas, "nutrient_report", NutrientReport);
        register!(schemas, NUTRIENT_REPORTS, Vec<NutrientReport>);

        // --- Catalog (2) ---
        register!(schemas, "receptor_catalog_entry", ReceptorCatalogEntry);
        register!(schemas, "system_catalog", SystemCatalog);

        // --- Computed (2) ---
        register!(
            schemas,
            "receptor_efficiency_result",
            ReceptorEfficiencyResult
        );
        register!(schemas, "system_status", SystemStatus);

        // --- CLI responses (6) ---
        register!(schemas, "receptor_cluster", ReceptorCluster);
        register!(schemas, "system_report", SystemReport);
        register!(schemas, "receptor_status_response", ReceptorStatusResponse);
        register!(schemas, "system_summary", SystemSummary);
        register!(schemas, "receptor_info_response", ReceptorInfoResponse);
        register!(
            schemas,
            "system_receptors_response",
            SystemReceptorsResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// List all registered schema names.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Number of registered schemas.
    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    use chrono::Utc;
    use hc_core::enums::{BodySystem, ReceptorClass};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 2 inputs + 2 catalog + 2 computed + 6 responses
        assert_eq!(registry().schema_count(), 12);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn get_nonexistent_schema() {
        assert!(registry().get("meal_plan").is_none());
    }

    #[test]
    fn validate_nutrient_reports_payload() {
        let payload = json!([
            {"name": "Vitamin C", "amount": 500, "unit": "mg"},
            {"name": "Iron", "amount": 18.5, "unit": "mg", "timing": "2026-02-08T08:30:00Z"}
        ]);
        assert!(registry().validate(NUTRIENT_REPORTS, &payload).is_ok());
    }

    #[test]
    fn validate_rejects_wrong_amount_type() {
        let payload = json!([{"name": "Zinc", "amount": "fifteen", "unit": "mg"}]);
        let result = registry().validate(NUTRIENT_REPORTS, &payload);
        if let Err(SchemaError::ValidationFailed { errors }) = result {
            assert!(!errors.is_empty());
        } else {
            panic!("Expected ValidationFailed");
        }
    }

    #[test]
    fn validate_rejects_missing_name() {
        let payload = json!({"amount": 1, "unit": "g"});
        assert!(registry().validate("nutrient_report", &payload).is_err());
    }

    #[test]
    fn validate_rejects_object_where_array_expected() {
        let payload = json!({"name": "Zinc", "amount": 1, "unit": "mg"});
        assert!(registry().validate(NUTRIENT_REPORTS, &payload).is_err());
    }

    #[test]
    fn validate_catalog_entry_with_only_primary_receptor() {
        let entry = json!({"primary_receptor": "TRPV6"});
        assert!(registry().validate("receptor_catalog_entry", &entry).is_ok());
    }

    #[test]
    fn validate_serialized_summary() {
        let summary = SystemSummary {
            system: BodySystem::Hepatic,
            name: "Hepatic Processing".into(),
            icon: "🧪".into(),
            description: String::new(),
            receptor_count: 0,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert!(registry().validate("system_summary", &value).is_ok());
    }

    #[test]
    fn validate_rejects_unknown_body_system() {
        let summary = json!({
            "system": "skeletal",
            "name": "Bones",
            "icon": "",
            "description": "",
            "receptor_count": 0
        });
        assert!(registry().validate("system_summary", &summary).is_err());
    }

    #[test]
    fn validate_serialized_status() {
        let status = SystemStatus {
            system: BodySystem::Cellular,
            efficiency: 100.0,
            active_receptors: 0,
            receptor_details: Vec::new(),
            notes: "System functioning optimally".into(),
            commentary: String::new(),
            last_updated: Utc::now(),
        };
        let value = serde_json::to_value(&status).unwrap();
        assert!(registry().validate("system_status", &value).is_ok());
    }

    #[test]
    fn validate_system_report_with_receptor_details() {
        let report = SystemReport {
            system: BodySystem::Intestinal,
            efficiency: 95.0,
            active_receptors: 1,
            clusters: Vec::new(),
            receptor_details: vec![ReceptorEfficiencyResult {
                receptor_id: "iron".into(),
                receptor_class: ReceptorClass::VitaminD,
                efficiency_percentage: 95.0,
                limiting_factors: BTreeSet::from(["Calcium".to_string()]),
                enhancement_factors: BTreeSet::from(["Vitamin C".to_string()]),
            }],
            commentary: String::new(),
            last_updated: Utc::now(),
            notes: "System functioning optimally".into(),
        };
        let value = serde_json::to_value(&report).unwrap();
        assert!(registry().validate("system_report", &value).is_ok());

        let mut missing = value;
        missing
            .as_object_mut()
            .unwrap()
            .remove("receptor_details");
        assert!(registry().validate("system_report", &missing).is_err());
    }

    #[test]
    fn validate_nonexistent_schema_returns_not_found() {
        let result = registry().validate("bogus", &json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(_))));
    }
}
