//! # reefecon-core
//!
//! Foundation crate for the reef economics engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ReefEconConfig;
pub use errors::{ReefEconError, ReefEconResult};
pub use models::{ConditionCategory, Indicator, IndicatorVector, InterventionId, RawResultSet};
