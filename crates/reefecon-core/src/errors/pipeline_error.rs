//! Top-level error and non-fatal error collection for batch runs.

use super::error_code::{self, ReefEconErrorCode};
use super::{ConditionError, ConfigError, CostError};
use crate::models::InterventionId;

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ReefEconError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Condition error: {0}")]
    Condition(#[from] ConditionError),

    #[error("Cost error: {0}")]
    Cost(#[from] CostError),

    #[error("Summary sink rejected {table}: {message}")]
    Sink { table: String, message: String },
}

impl ReefEconErrorCode for ReefEconError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Condition(e) => e.error_code(),
            Self::Cost(e) => e.error_code(),
            Self::Sink { .. } => error_code::SINK_ERROR,
        }
    }
}

pub type ReefEconResult<T> = Result<T, ReefEconError>;

/// A scenario that failed and was skipped without writing output.
#[derive(Debug)]
pub struct ScenarioFailure {
    pub intervention: InterventionId,
    pub error: ReefEconError,
}

/// Result of a batch run that accumulates per-scenario failures.
/// One failing scenario never aborts the others.
#[derive(Debug, Default)]
pub struct PipelineResult<T: Default = ()> {
    /// The successful result data.
    pub data: T,
    /// Scenarios that failed, in the order they were collected.
    pub errors: Vec<ScenarioFailure>,
}

impl<T: Default> PipelineResult<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, intervention: InterventionId, error: ReefEconError) {
        self.errors.push(ScenarioFailure {
            intervention,
            error,
        });
    }

    /// Returns true if every scenario succeeded.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
