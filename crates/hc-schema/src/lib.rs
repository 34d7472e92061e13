//! # hc-schema
//!
//! JSON Schema generation, validation, and registry for HealthCore.
//!
//! Types are defined in `hc-core` with `#[derive(JsonSchema)]`. This crate
//! builds the registry and validates untrusted JSON (nutrient report payloads,
//! catalog sections) before it is deserialized into typed records.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::{NUTRIENT_REPORTS, SchemaRegistry};
