use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants;
use crate::errors::ConfigError;
use crate::models::CostStage;

/// Inclusive sampling range for a cost-model parameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub lower: f64,
    pub upper: f64,
}

impl SampleRange {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    pub fn validate(&self, parameter: &str) -> Result<(), ConfigError> {
        if !self.lower.is_finite() || !self.upper.is_finite() || self.lower > self.upper {
            return Err(ConfigError::InvalidSampleRange {
                parameter: parameter.to_string(),
                lower: self.lower,
                upper: self.upper,
            });
        }
        Ok(())
    }

    /// Whether some whole number lies inside the range.
    pub fn contains_integer(&self) -> bool {
        self.lower.ceil() <= self.upper.floor()
    }
}

/// Location of one parameter (input) or output cell in a cost-model workbook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostParameterSpec {
    pub sheet: String,
    pub row: u32,
    pub column: u32,
    /// Sampled parameters carry a range; fixed inputs and outputs do not.
    #[serde(default)]
    pub range: Option<SampleRange>,
    #[serde(default)]
    pub categorical: bool,
}

/// All cells of one cost model, keyed by parameter name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostModelSpec {
    pub parameters: BTreeMap<String, CostParameterSpec>,
}

impl CostModelSpec {
    /// Parameters drawn per sample, in name order.
    pub fn sampled(&self) -> impl Iterator<Item = (&str, &CostParameterSpec, &SampleRange)> {
        self.parameters
            .iter()
            .filter_map(|(name, spec)| spec.range.as_ref().map(|r| (name.as_str(), spec, r)))
    }
}

/// Cost sampling settings plus the cell layout of both cost models.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Parameter draws per cost stage.
    pub n_draws: usize,
    /// Contingency proportion applied to CAPEX and OPEX.
    pub contingency: f64,
    pub port_id: u32,
    pub production: CostModelSpec,
    pub deployment: CostModelSpec,
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            n_draws: defaults::DEFAULT_N_DRAWS,
            contingency: constants::DEFAULT_CONTINGENCY,
            port_id: constants::DEFAULT_PORT_ID,
            production: CostModelSpec::default(),
            deployment: CostModelSpec::default(),
        }
    }
}

impl CostConfig {
    pub fn model(&self, stage: CostStage) -> &CostModelSpec {
        match stage {
            CostStage::Production => &self.production,
            CostStage::Deployment => &self.deployment,
        }
    }

    /// Both models must expose the setup and operational cost cells.
    pub fn check_required(&self) -> Result<(), ConfigError> {
        for stage in CostStage::ALL {
            let model = self.model(stage);
            for cell in constants::REQUIRED_COST_CELLS {
                if !model.parameters.contains_key(cell) {
                    return Err(ConfigError::ConfigMismatch {
                        parameter: cell.to_string(),
                        stage: stage.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Every configured range must satisfy lower <= upper, and a
    /// categorical range must hold at least one whole number.
    pub fn check_ranges(&self) -> Result<(), ConfigError> {
        for stage in CostStage::ALL {
            for (name, spec, range) in self.model(stage).sampled() {
                range.validate(name)?;
                if spec.categorical && !range.contains_integer() {
                    return Err(ConfigError::InvalidSampleRange {
                        parameter: name.to_string(),
                        lower: range.lower,
                        upper: range.upper,
                    });
                }
            }
        }
        Ok(())
    }
}
