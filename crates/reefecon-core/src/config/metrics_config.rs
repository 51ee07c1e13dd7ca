use serde::{Deserialize, Serialize};

use crate::models::{ConditionCategory, MetricKind};

/// Metric aggregation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Metric functions to compute for every scenario arm.
    pub metrics: Vec<MetricKind>,
    /// Lowest category counted by `area_saved_above_thresh`.
    pub area_saved_threshold: ConditionCategory,
    /// Also summarize the counterfactual arm when one is supplied.
    pub include_counterfactual: bool,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            metrics: vec![MetricKind::AreaSavedAboveThresh, MetricKind::AreaWeightedRci],
            area_saved_threshold: ConditionCategory::Good,
            include_counterfactual: true,
        }
    }
}
