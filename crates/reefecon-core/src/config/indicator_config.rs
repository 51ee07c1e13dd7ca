use serde::{Deserialize, Serialize};

use crate::constants;

/// Settings for deriving relative indicators from raw simulation output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Leading timesteps used to find the maximum juvenile baseline.
    pub juvenile_baseline_years: usize,
    /// Fixed juvenile baseline; overrides the hindcast maximum when set.
    pub max_juvenile_baseline: Option<f64>,
    pub cots_outbreak_threshold: f64,
    pub shelter_volume_scale: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            juvenile_baseline_years: constants::DEFAULT_JUVENILE_BASELINE_YEARS,
            max_juvenile_baseline: None,
            cots_outbreak_threshold: constants::COTS_OUTBREAK_THRESHOLD,
            shelter_volume_scale: constants::SHELTER_VOLUME_SCALE,
        }
    }
}
