//! Per-system aggregation of receptor results.

use chrono::{DateTime, Utc};
use hc_core::entities::{NutrientReport, ReceptorEfficiencyResult, SystemStatus};
use hc_core::enums::{BodySystem, SystemNote};

use crate::commentary::commentary;

/// Efficiency reported for a system with no contributing receptors.
pub const EMPTY_SYSTEM_EFFICIENCY: f64 = 100.0;

/// Mean efficiency of `results`, or [`EMPTY_SYSTEM_EFFICIENCY`] when empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_efficiency(results: &[ReceptorEfficiencyResult]) -> f64 {
    if results.is_empty() {
        return EMPTY_SYSTEM_EFFICIENCY;
    }

    let total: f64 = results.iter().map(|r| r.efficiency_percentage).sum();
    total / results.len() as f64
}

/// Build the status of one body system from its receptor results.
///
/// `active_receptors` counts the results supplied, which may be fewer than
/// the receptors the catalog lists for the system.
#[must_use]
pub fn aggregate(
    system: BodySystem,
    results: Vec<ReceptorEfficiencyResult>,
    reports: &[NutrientReport],
    now: DateTime<Utc>,
) -> SystemStatus {
    let efficiency = average_efficiency(&results);

    SystemStatus {
        system,
        efficiency,
        active_receptors: results.len(),
        notes: SystemNote::for_efficiency(efficiency).message().to_string(),
        commentary: commentary(system.as_str(), efficiency, reports),
        receptor_details: results,
        last_updated: now,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use hc_core::enums::ReceptorClass;
    use pretty_assertions::assert_eq;

    fn result(efficiency_percentage: f64) -> ReceptorEfficiencyResult {
        ReceptorEfficiencyResult {
            receptor_id: "r".into(),
            receptor_class: ReceptorClass::VitaminD,
            efficiency_percentage,
            limiting_factors: BTreeSet::new(),
            enhancement_factors: BTreeSet::new(),
        }
    }

    #[test]
    fn empty_system_defaults_to_full_efficiency() {
        let status = aggregate(BodySystem::Hepatic, Vec::new(), &[], Utc::now());
        assert_eq!(status.efficiency, 100.0);
        assert_eq!(status.active_receptors, 0);
        assert_eq!(status.notes, SystemNote::Optimal.message());
    }

    #[test]
    fn efficiency_is_arithmetic_mean() {
        let status = aggregate(
            BodySystem::Intestinal,
            vec![result(95.0), result(115.0), result(40.0)],
            &[],
            Utc::now(),
        );
        assert_eq!(status.efficiency, 250.0 / 3.0);
        assert_eq!(status.active_receptors, 3);
        assert_eq!(status.notes, SystemNote::Adequate.message());
    }

    #[test]
    fn band_edges_fall_into_upper_band() {
        let optimal = aggregate(BodySystem::Cellular, vec![result(90.0)], &[], Utc::now());
        assert_eq!(optimal.notes, SystemNote::Optimal.message());

        let adequate = aggregate(BodySystem::Cellular, vec![result(70.0)], &[], Utc::now());
        assert_eq!(adequate.notes, SystemNote::Adequate.message());
    }

    #[test]
    fn enhanced_and_compromised_notes() {
        let enhanced = aggregate(BodySystem::Circulatory, vec![result(120.0)], &[], Utc::now());
        assert_eq!(enhanced.notes, SystemNote::Enhanced.message());

        let compromised = aggregate(BodySystem::Circulatory, vec![result(20.0)], &[], Utc::now());
        assert_eq!(compromised.notes, SystemNote::Compromised.message());
    }

    #[test]
    fn status_keeps_details_and_timestamp() {
        let now = Utc::now();
        let status = aggregate(BodySystem::Intestinal, vec![result(100.0)], &[], now);
        assert_eq!(status.receptor_details, vec![result(100.0)]);
        assert_eq!(status.last_updated, now);
        assert!(!status.commentary.is_empty());
    }
}
