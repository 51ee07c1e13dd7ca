//! ReefEconErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that downstream reporting can key on.
pub trait ReefEconErrorCode {
    /// Returns the error code string (e.g., "CONFIG_MISMATCH").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted report string: `[ERROR_CODE] message`.
    fn report_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_MISMATCH: &str = "CONFIG_MISMATCH";
pub const INVALID_SAMPLE_RANGE: &str = "INVALID_SAMPLE_RANGE";
pub const UNSUPPORTED_UNCERTAINTY_MODE: &str = "UNSUPPORTED_UNCERTAINTY_MODE";
pub const MALFORMED_RESULT_SET: &str = "MALFORMED_RESULT_SET";
pub const INVALID_THRESHOLD_SET: &str = "INVALID_THRESHOLD_SET";
pub const EMPTY_SCENARIO: &str = "EMPTY_SCENARIO";
pub const COST_MODEL_ERROR: &str = "COST_MODEL_ERROR";
pub const DUPLICATE_INTERVENTION: &str = "DUPLICATE_INTERVENTION";
pub const SINK_ERROR: &str = "SINK_ERROR";
