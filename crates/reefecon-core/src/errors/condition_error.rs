//! Condition classification and uncertainty sampling errors.

use super::error_code::{self, ReefEconErrorCode};

/// Errors raised while classifying reef condition or sampling draws.
#[derive(Debug, thiserror::Error)]
pub enum ConditionError {
    #[error("malformed result set: {reason}")]
    MalformedResultSet { reason: String },

    #[error("invalid threshold set for {source_name}: {reason}")]
    InvalidThresholdSet { source_name: String, reason: String },

    #[error("uncertainty mode `{flag}` is not supported: {reason}")]
    UnsupportedUncertaintyMode { flag: String, reason: String },
}

impl ReefEconErrorCode for ConditionError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedResultSet { .. } => error_code::MALFORMED_RESULT_SET,
            Self::InvalidThresholdSet { .. } => error_code::INVALID_THRESHOLD_SET,
            Self::UnsupportedUncertaintyMode { .. } => error_code::UNSUPPORTED_UNCERTAINTY_MODE,
        }
    }
}
