//! Data model shared by every stage of the metric and cost engine.

pub mod condition;
pub mod cost;
pub mod indicator;
pub mod intervention;
pub mod metric_summary;
pub mod result_set;
pub mod scenario_output;
pub mod thresholds;

pub use condition::ConditionCategory;
pub use cost::{CostComponent, CostEstimate, CostStage, CostSummary, CostSummaryRow};
pub use indicator::{Indicator, IndicatorVector};
pub use intervention::{
    DeploymentRecord, IntervenedReef, InterventionConfig, InterventionId, InterventionKey,
    InterventionKeyEntry,
};
pub use metric_summary::{MetricKind, MetricSummary, MetricSummaryRow, ScenarioArm};
pub use result_set::{RawResultSet, ReefInfo};
pub use scenario_output::ScenarioOutput;
pub use thresholds::{ExpertPanel, ExpertThresholdSet, ThresholdSource};
