//! Cost sampling and aggregation errors.

use super::error_code::{self, ReefEconErrorCode};

/// Errors raised by the cost sampler, the cost aggregator, or the
/// external cost-model evaluator.
#[derive(Debug, thiserror::Error)]
pub enum CostError {
    #[error("intervention {intervention} has no deployments to aggregate")]
    EmptyScenario { intervention: u32 },

    #[error("cost model evaluation failed for {stage}: {message}")]
    EvaluationFailed { stage: String, message: String },
}

impl ReefEconErrorCode for CostError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyScenario { .. } => error_code::EMPTY_SCENARIO,
            Self::EvaluationFailed { .. } => error_code::COST_MODEL_ERROR,
        }
    }
}
