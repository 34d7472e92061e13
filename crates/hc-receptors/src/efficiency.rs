//! Per-receptor efficiency scoring.
//!
//! Every (enhancer, report) pair that matches adds a fixed boost and every
//! (inhibitor, report) pair adds a fixed penalty. Contributions stack per
//! pair, so reporting the same nutrient twice counts twice.

use std::collections::BTreeSet;

use hc_core::entities::{Factor, NutrientReport, ReceptorCatalogEntry, ReceptorEfficiencyResult};
use hc_core::enums::ReceptorClass;

use crate::matcher::matches;

/// Score of a receptor with no matching factors.
pub const BASE_EFFICIENCY: f64 = 100.0;
/// Added per matching enhancer/report pair.
pub const ENHANCER_BOOST: f64 = 15.0;
/// Subtracted per matching inhibitor/report pair.
pub const INHIBITOR_PENALTY: f64 = 20.0;
/// Lower clamp bound.
pub const MIN_EFFICIENCY: f64 = 20.0;
/// Upper clamp bound.
pub const MAX_EFFICIENCY: f64 = 150.0;

/// Compute the efficiency of one receptor against the reported nutrients.
#[must_use]
pub fn efficiency(
    receptor_id: &str,
    entry: &ReceptorCatalogEntry,
    reports: &[NutrientReport],
) -> ReceptorEfficiencyResult {
    let (boost, enhancement_factors) = scan(&entry.enhancers, reports, ENHANCER_BOOST);
    let (penalty, limiting_factors) = scan(&entry.inhibitors, reports, INHIBITOR_PENALTY);

    let efficiency_percentage =
        (BASE_EFFICIENCY + boost - penalty).clamp(MIN_EFFICIENCY, MAX_EFFICIENCY);

    ReceptorEfficiencyResult {
        receptor_id: receptor_id.to_string(),
        receptor_class: ReceptorClass::from_primary_receptor(&entry.primary_receptor),
        efficiency_percentage,
        limiting_factors,
        enhancement_factors,
    }
}

/// Sum `weight` over every matching (factor, report) pair and collect the
/// names of factors that matched at least once.
fn scan(factors: &[Factor], reports: &[NutrientReport], weight: f64) -> (f64, BTreeSet<String>) {
    let mut total = 0.0;
    let mut matched = BTreeSet::new();

    for factor in factors {
        for report in reports {
            if matches(&factor.name, &report.name) {
                total += weight;
                matched.insert(factor.name.clone());
            }
        }
    }

    (total, matched)
}
