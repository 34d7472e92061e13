//! Entity structs for HealthCore domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip
//! and schema validation.

mod catalog;
mod nutrient;
mod status;

pub use catalog::{Factor, ReceptorCatalogEntry, SupportingProtein, SystemCatalog};
pub use nutrient::NutrientReport;
pub use status::{ReceptorEfficiencyResult, SystemStatus};
