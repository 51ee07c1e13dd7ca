//! Top-level reefecon configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CostConfig, IndicatorConfig, MetricsConfig, PipelineConfig, UncertaintyConfig};
use crate::errors::ConfigError;

/// Project config file name looked up in the run root.
pub const PROJECT_CONFIG_FILE: &str = "reefecon.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`REEFECON_*`)
/// 2. Project config (`reefecon.toml` in the run root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReefEconConfig {
    pub uncertainty: UncertaintyConfig,
    pub indicators: IndicatorConfig,
    pub metrics: MetricsConfig,
    pub costs: CostConfig,
    pub pipeline: PipelineConfig,
}

impl ReefEconConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config)?;
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a single TOML file; missing keys take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ReefEconConfig) -> Result<(), ConfigError> {
        if config.uncertainty.nsims == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "uncertainty.nsims".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.costs.n_draws == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "costs.n_draws".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if !config.costs.contingency.is_finite() || config.costs.contingency < 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "costs.contingency".to_string(),
                message: "must be a non-negative proportion".to_string(),
            });
        }
        if config.metrics.metrics.is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "metrics.metrics".to_string(),
                message: "at least one metric is required".to_string(),
            });
        }
        if let Some(baseline) = config.indicators.max_juvenile_baseline {
            if !baseline.is_finite() || baseline <= 0.0 {
                return Err(ConfigError::ValidationFailed {
                    field: "indicators.max_juvenile_baseline".to_string(),
                    message: "must be positive".to_string(),
                });
            }
        }
        if config.pipeline.threads == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "pipeline.threads".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        config.costs.check_ranges()?;
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `REEFECON_NSIMS`, `REEFECON_N_DRAWS`, etc.
    fn apply_env_overrides(config: &mut ReefEconConfig) -> Result<(), ConfigError> {
        if let Some(v) = env_parse::<usize>("REEFECON_NSIMS")? {
            config.uncertainty.nsims = v;
        }
        if let Some(v) = env_parse::<usize>("REEFECON_N_DRAWS")? {
            config.costs.n_draws = v;
        }
        if let Some(v) = env_parse::<u64>("REEFECON_SEED")? {
            config.pipeline.seed = v;
        }
        if let Some(v) = env_flag("REEFECON_ECOL_UNCERT")? {
            config.uncertainty.ecol_uncert = v;
        }
        if let Some(v) = env_flag("REEFECON_EXPERT_UNCERT")? {
            config.uncertainty.expert_uncert = v;
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::ValidationFailed {
                field: key.to_string(),
                message: format!("cannot parse `{val}`"),
            }),
        Err(_) => Ok(None),
    }
}

fn env_flag(key: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => match val.trim() {
            "1" | "true" => Ok(Some(true)),
            "0" | "false" => Ok(Some(false)),
            other => Err(ConfigError::ValidationFailed {
                field: key.to_string(),
                message: format!("expected 0 or 1, got `{other}`"),
            }),
        },
        Err(_) => Ok(None),
    }
}
