//! Request-scoped receptor status computation.
//!
//! [`ReceptorEngine`] borrows a catalog and turns one list of nutrient
//! reports into per-system statuses. It holds no state between calls.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use hc_core::entities::{
    NutrientReport, ReceptorCatalogEntry, ReceptorEfficiencyResult, SystemCatalog, SystemStatus,
};
use hc_core::enums::{BodySystem, ClusterStatus};
use hc_core::responses::{ReceptorCluster, ReceptorStatusResponse, SystemReport};
use tracing::debug;

use crate::aggregate::aggregate;
use crate::catalog::ReceptorCatalog;
use crate::efficiency::efficiency;

/// Icon used for clusters whose catalog entry has none.
pub const DEFAULT_CLUSTER_ICON: &str = "🔬";

#[derive(Debug, Clone, Copy)]
pub struct ReceptorEngine<'a> {
    catalog: &'a ReceptorCatalog,
}

impl<'a> ReceptorEngine<'a> {
    #[must_use]
    pub const fn new(catalog: &'a ReceptorCatalog) -> Self {
        Self { catalog }
    }

    /// Status of every body system for the given reports.
    #[must_use]
    pub fn status(&self, reports: &[NutrientReport]) -> BTreeMap<BodySystem, SystemStatus> {
        self.status_at(reports, Utc::now())
    }

    /// Same as [`ReceptorEngine::status`] with an explicit timestamp.
    #[must_use]
    pub fn status_at(
        &self,
        reports: &[NutrientReport],
        now: DateTime<Utc>,
    ) -> BTreeMap<BodySystem, SystemStatus> {
        self.catalog
            .systems()
            .map(|(system, section)| {
                let results = system_results(system, section, reports);
                let status = aggregate(system, results, reports, now);
                debug!(
                    %system,
                    efficiency = status.efficiency,
                    active_receptors = status.active_receptors,
                    "system status computed"
                );
                (system, status)
            })
            .collect()
    }

    /// Full status response including cluster views.
    #[must_use]
    pub fn report(
        &self,
        reports: &[NutrientReport],
        user_id: Option<String>,
    ) -> ReceptorStatusResponse {
        self.report_at(reports, user_id, Utc::now())
    }

    /// Same as [`ReceptorEngine::report`] with an explicit timestamp.
    #[must_use]
    pub fn report_at(
        &self,
        reports: &[NutrientReport],
        user_id: Option<String>,
        now: DateTime<Utc>,
    ) -> ReceptorStatusResponse {
        let systems = self
            .status_at(reports, now)
            .into_iter()
            .map(|(system, status)| {
                let clusters = self
                    .catalog
                    .system(system)
                    .map(|section| clusters(section, &status.receptor_details))
                    .unwrap_or_default();
                let report = SystemReport {
                    system,
                    efficiency: status.efficiency,
                    active_receptors: status.active_receptors,
                    clusters,
                    receptor_details: status.receptor_details,
                    commentary: status.commentary,
                    last_updated: status.last_updated,
                    notes: status.notes,
                };
                (system, report)
            })
            .collect();

        ReceptorStatusResponse {
            user_id,
            generated_at: now,
            systems,
        }
    }
}

fn system_results(
    system: BodySystem,
    section: &SystemCatalog,
    reports: &[NutrientReport],
) -> Vec<ReceptorEfficiencyResult> {
    section
        .receptors
        .iter()
        .map(|(id, entry)| {
            let result = efficiency(id, entry, reports);
            debug!(
                %system,
                receptor = %id,
                efficiency = result.efficiency_percentage,
                enhancers = result.enhancement_factors.len(),
                inhibitors = result.limiting_factors.len(),
                "receptor efficiency computed"
            );
            result
        })
        .collect()
}

fn clusters(section: &SystemCatalog, results: &[ReceptorEfficiencyResult]) -> Vec<ReceptorCluster> {
    section
        .receptors
        .iter()
        .map(|(id, entry)| {
            let result = results.iter().find(|r| &r.receptor_id == id);
            cluster(id, entry, result)
        })
        .collect()
}

/// Pair a catalog entry with its result. A receptor without a result is shown
/// at full efficiency.
#[allow(clippy::cast_possible_truncation)]
fn cluster(
    id: &str,
    entry: &ReceptorCatalogEntry,
    result: Option<&ReceptorEfficiencyResult>,
) -> ReceptorCluster {
    let efficiency = result.map_or(100.0, |r| r.efficiency_percentage);

    let current_nutrients = result
        .map(|r| {
            r.enhancement_factors
                .iter()
                .chain(&r.limiting_factors)
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    ReceptorCluster {
        id: id.to_string(),
        name: entry.name.clone().unwrap_or_else(|| id.to_string()),
        icon: entry
            .icon
            .clone()
            .unwrap_or_else(|| DEFAULT_CLUSTER_ICON.to_string()),
        description: entry.description.clone().unwrap_or_default(),
        status: ClusterStatus::for_efficiency(efficiency),
        efficiency: efficiency.trunc() as i64,
        receptors: vec![entry.primary_receptor.clone()],
        current_nutrients,
        recommendations: entry.recommendations.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(name: &str) -> NutrientReport {
        NutrientReport::new(name, 1.0, "mg")
    }

    #[test]
    fn status_covers_every_system() {
        let catalog = ReceptorCatalog::builtin().unwrap();
        let status = ReceptorEngine::new(&catalog).status(&[]);
        assert_eq!(status.keys().copied().collect::<Vec<_>>(), BodySystem::ALL);
    }

    #[test]
    fn status_shares_one_timestamp() {
        let catalog = ReceptorCatalog::builtin().unwrap();
        let now = Utc::now();
        let status = ReceptorEngine::new(&catalog).status_at(&[report("Zinc")], now);
        assert!(status.values().all(|s| s.last_updated == now));
    }

    #[test]
    fn cluster_without_result_shows_full_efficiency() {
        let entry = ReceptorCatalogEntry::new("ZIP4");
        let view = cluster("zinc", &entry, None);
        assert_eq!(view.efficiency, 100);
        assert_eq!(view.status, ClusterStatus::Optimal);
        assert_eq!(view.name, "zinc");
        assert_eq!(view.icon, DEFAULT_CLUSTER_ICON);
        assert!(view.current_nutrients.is_empty());
    }

    #[test]
    fn cluster_truncates_efficiency_and_lists_factors() {
        let catalog = ReceptorCatalog::builtin().unwrap();
        let section = catalog.system(BodySystem::Intestinal).unwrap();
        let results = system_results(
            BodySystem::Intestinal,
            section,
            &[report("Vitamin C"), report("Calcium")],
        );
        let views = clusters(section, &results);
        let iron = views.iter().find(|c| c.id == "iron").unwrap();

        assert_eq!(iron.efficiency, 95);
        assert_eq!(iron.status, ClusterStatus::Optimal);
        assert_eq!(iron.receptors, vec!["DMT1".to_string()]);
        assert_eq!(
            iron.current_nutrients,
            vec!["Vitamin C".to_string(), "Calcium".to_string()]
        );
    }
}
