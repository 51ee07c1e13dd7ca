//! Configuration errors.

use super::error_code::{self, ReefEconErrorCode};

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Cost parameter `{parameter}` missing for {stage} cost model")]
    ConfigMismatch { parameter: String, stage: String },

    #[error("Invalid sample range for `{parameter}`: lower {lower} > upper {upper}")]
    InvalidSampleRange {
        parameter: String,
        lower: f64,
        upper: f64,
    },

    #[error("intervention {intervention} already keyed with a different configuration")]
    DuplicateIntervention { intervention: u32 },
}

impl ReefEconErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigMismatch { .. } => error_code::CONFIG_MISMATCH,
            Self::InvalidSampleRange { .. } => error_code::INVALID_SAMPLE_RANGE,
            Self::DuplicateIntervention { .. } => error_code::DUPLICATE_INTERVENTION,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
