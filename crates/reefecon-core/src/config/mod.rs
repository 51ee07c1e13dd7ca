//! Configuration system for reefecon.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod cost_config;
pub mod defaults;
pub mod indicator_config;
pub mod metrics_config;
pub mod pipeline_config;
pub mod reefecon_config;
pub mod uncertainty_config;

pub use cost_config::{CostConfig, CostModelSpec, CostParameterSpec, SampleRange};
pub use indicator_config::IndicatorConfig;
pub use metrics_config::MetricsConfig;
pub use pipeline_config::PipelineConfig;
pub use reefecon_config::ReefEconConfig;
pub use uncertainty_config::UncertaintyConfig;
