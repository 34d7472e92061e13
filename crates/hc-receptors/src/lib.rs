//! # hc-receptors
//!
//! Receptor catalog and efficiency scoring for HealthCore.
//!
//! Data flows one way:
//!
//! ```text
//! nutrient reports → matcher → per-receptor efficiency → per-system aggregate → notes/commentary
//! ```
//!
//! Every stage is a pure function over its inputs and the read-only
//! [`ReceptorCatalog`]. The catalog is constructed once and passed by reference
//! into each [`ReceptorEngine`], so concurrent callers need no locking.
//!
//! # Usage
//!
//! ```
//! use hc_core::entities::NutrientReport;
//! use hc_core::enums::BodySystem;
//! use hc_receptors::{ReceptorCatalog, ReceptorEngine};
//!
//! let catalog = ReceptorCatalog::builtin().expect("builtin catalog");
//! let engine = ReceptorEngine::new(&catalog);
//!
//! let status = engine.status(&[NutrientReport::new("Vitamin C", 500.0, "mg")]);
//! assert!(status[&BodySystem::Intestinal].efficiency > 100.0);
//! ```

pub mod aggregate;
pub mod catalog;
pub mod commentary;
pub mod efficiency;
pub mod engine;
pub mod error;
pub mod matcher;

pub use catalog::ReceptorCatalog;
pub use engine::ReceptorEngine;
pub use error::ReceptorError;
