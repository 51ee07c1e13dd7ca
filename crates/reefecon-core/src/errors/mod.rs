//! Error handling for reefecon.
//! One error enum per subsystem, `thiserror` only.

pub mod condition_error;
pub mod config_error;
pub mod cost_error;
pub mod error_code;
pub mod pipeline_error;

pub use condition_error::ConditionError;
pub use config_error::ConfigError;
pub use cost_error::CostError;
pub use error_code::ReefEconErrorCode;
pub use pipeline_error::{PipelineResult, ReefEconError, ReefEconResult, ScenarioFailure};
