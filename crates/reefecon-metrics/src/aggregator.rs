use reefecon_core::config::MetricsConfig;
use reefecon_core::models::{
    InterventionId, MetricKind, MetricSummary, MetricSummaryRow, ScenarioArm,
};
use reefecon_uncertainty::{ClassifiedCell, ConditionCube, DrawPlan};
use tracing::{debug, warn};

use crate::indices::{rfi, rti};

/// Computes the configured metrics over a condition cube.
#[derive(Debug, Clone, Default)]
pub struct MetricAggregator {
    config: MetricsConfig,
}

impl MetricAggregator {
    pub fn new(config: MetricsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MetricsConfig {
        &self.config
    }

    /// One summary per configured metric, in configured order.
    pub fn summarize_all(
        &self,
        intervention: InterventionId,
        arm: ScenarioArm,
        cube: &ConditionCube,
        first_intervention_year: i32,
    ) -> Vec<MetricSummary> {
        self.config
            .metrics
            .iter()
            .map(|&metric| self.summarize(intervention, arm, metric, cube, first_intervention_year))
            .collect()
    }

    /// Rows ordered (reef, year) ascending; one draw column per plan.
    pub fn summarize(
        &self,
        intervention: InterventionId,
        arm: ScenarioArm,
        metric: MetricKind,
        cube: &ConditionCube,
        first_intervention_year: i32,
    ) -> MetricSummary {
        let total_area = cube.total_area();
        if total_area <= 0.0 && is_area_weighted(metric) {
            warn!(
                intervention = %intervention,
                metric = %metric,
                "total modelled area is zero; area-weighted values are zero"
            );
        }

        let mut rows = Vec::with_capacity(cube.reefs().len() * cube.years().len());
        for (reef_idx, reef) in cube.reefs().iter().enumerate() {
            let area_fraction = if total_area > 0.0 {
                reef.area_km2 / total_area
            } else {
                0.0
            };
            for (t, &year) in cube.years().iter().enumerate() {
                let draws = cube
                    .plans()
                    .iter()
                    .enumerate()
                    .map(|(d, plan)| {
                        cube.cell(d, reef_idx, t).map_or(0.0, |cell| {
                            self.value(metric, cell, plan, reef.area_km2, area_fraction)
                        })
                    })
                    .collect();
                rows.push(MetricSummaryRow {
                    reef_id: reef.id.clone(),
                    year,
                    year_relative: year - first_intervention_year,
                    draws,
                });
            }
        }
        rows.sort_by(|a, b| a.reef_id.cmp(&b.reef_id).then(a.year.cmp(&b.year)));

        debug!(
            intervention = %intervention,
            arm = arm.as_str(),
            metric = %metric,
            rows = rows.len(),
            "metric summarized"
        );
        MetricSummary {
            intervention,
            arm,
            metric,
            nsims: cube.nsims(),
            rows,
        }
    }

    fn value(
        &self,
        metric: MetricKind,
        cell: &ClassifiedCell,
        plan: &DrawPlan,
        area_km2: f64,
        area_fraction: f64,
    ) -> f64 {
        match metric {
            MetricKind::RawRci => cell.category.score(),
            MetricKind::Rti => rti(&cell.indicators, plan.rti_intercept),
            MetricKind::Rfi => rfi(
                &cell.indicators,
                plan.rfi_complexity_intercept,
                plan.rfi_biomass_intercept,
            ),
            MetricKind::AreaSavedAboveThresh => {
                if cell.category >= self.config.area_saved_threshold {
                    area_km2
                } else {
                    0.0
                }
            }
            MetricKind::AreaWeightedRci => cell.category.score() * area_fraction,
            MetricKind::AreaWeightedRti => rti(&cell.indicators, plan.rti_intercept) * area_fraction,
        }
    }
}

fn is_area_weighted(metric: MetricKind) -> bool {
    matches!(
        metric,
        MetricKind::AreaWeightedRci | MetricKind::AreaWeightedRti
    )
}
