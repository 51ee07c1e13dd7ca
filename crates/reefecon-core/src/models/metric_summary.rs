use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::InterventionId;

/// Metric functions the aggregator can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Categorical RCI score per reef.
    RawRci,
    /// Continuous regression analogue of the RCI.
    Rti,
    /// Reef fish biomass estimate (kg/km²).
    Rfi,
    /// Reef area in Good or Very Good condition.
    AreaSavedAboveThresh,
    /// RCI score weighted by area fraction.
    AreaWeightedRci,
    /// RTI weighted by area fraction.
    AreaWeightedRti,
}

impl MetricKind {
    pub const ALL: [MetricKind; 6] = [
        Self::RawRci,
        Self::Rti,
        Self::Rfi,
        Self::AreaSavedAboveThresh,
        Self::AreaWeightedRci,
        Self::AreaWeightedRti,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::RawRci => "raw_rci",
            Self::Rti => "rti",
            Self::Rfi => "rfi",
            Self::AreaSavedAboveThresh => "area_saved_above_thresh",
            Self::AreaWeightedRci => "area_weighted_rci",
            Self::AreaWeightedRti => "area_weighted_rti",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which run of a scenario a summary describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioArm {
    Intervention,
    Counterfactual,
}

impl ScenarioArm {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intervention => "intervention",
            Self::Counterfactual => "counterfactual",
        }
    }
}

/// One (reef, year) row with a value per draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummaryRow {
    pub reef_id: String,
    pub year: i32,
    /// Year minus the scenario's first intervention year.
    pub year_relative: i32,
    /// `sim_1 ..= sim_nsims`, by draw index.
    pub draws: Vec<f64>,
}

/// One metric over every reef and year of one scenario arm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSummary {
    pub intervention: InterventionId,
    pub arm: ScenarioArm,
    pub metric: MetricKind,
    pub nsims: usize,
    /// Ordered by (reef, year) ascending.
    pub rows: Vec<MetricSummaryRow>,
}

impl MetricSummary {
    /// Logical table name, e.g. `intervention3_area_weighted_rci_counterfactual`.
    pub fn table_name(&self) -> String {
        Self::table_name_for(self.intervention, self.metric, self.arm)
    }

    pub fn table_name_for(id: InterventionId, metric: MetricKind, arm: ScenarioArm) -> String {
        format!("intervention{}_{}_{}", id, metric.as_str(), arm.as_str())
    }

    /// Per-year sums over every reef, per draw. Years ascending.
    pub fn year_totals(&self) -> Vec<(i32, Vec<f64>)> {
        let mut totals: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
        for row in &self.rows {
            let acc = totals
                .entry(row.year)
                .or_insert_with(|| vec![0.0; self.nsims]);
            for (slot, value) in acc.iter_mut().zip(&row.draws) {
                *slot += value;
            }
        }
        totals.into_iter().collect()
    }
}
