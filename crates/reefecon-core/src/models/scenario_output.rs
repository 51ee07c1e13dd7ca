use serde::{Deserialize, Serialize};

use super::cost::CostSummary;
use super::intervention::InterventionKeyEntry;
use super::metric_summary::MetricSummary;

/// Every table produced for one scenario. Written as a unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOutput {
    pub metrics: Vec<MetricSummary>,
    pub costs: CostSummary,
    pub key_entry: InterventionKeyEntry,
}
