//! # hc-core
//!
//! Core types and error types for HealthCore.
//!
//! This crate provides the foundational types shared across all HealthCore crates:
//! - Nutrient reports as submitted by a user
//! - Static receptor catalog records (body systems, receptors, factors)
//! - Computed efficiency results and per-system status
//! - Closed enums for body systems, receptor classes, and efficiency bands
//! - Cross-cutting error types
//! - Response shapes rendered by the CLI

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
