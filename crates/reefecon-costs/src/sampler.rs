use reefecon_core::config::CostConfig;
use reefecon_core::constants::{
    DISTANCE_FROM_PORT_PARAM, NUM_DEVICES_PARAM, PORT_PARAM, SPECIES_NO_PARAM,
};
use reefecon_core::errors::ConfigError;
use reefecon_core::models::CostStage;
use reefecon_core::traits::{IParameterSampler, ParameterSet};
use tracing::debug;

/// `n_draws` sampled parameter sets per cost stage.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StageDraws {
    pub production: Vec<ParameterSet>,
    pub deployment: Vec<ParameterSet>,
}

impl StageDraws {
    pub fn stage(&self, stage: CostStage) -> &[ParameterSet] {
        match stage {
            CostStage::Production => &self.production,
            CostStage::Deployment => &self.deployment,
        }
    }

    pub fn n_draws(&self) -> usize {
        self.production.len().min(self.deployment.len())
    }
}

/// Scenario values written into the models alongside the sampled ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioConstants {
    pub num_devices: u64,
    pub species_no: u32,
    pub distance_from_port_nm: f64,
    pub port: u32,
}

impl ScenarioConstants {
    /// Copy of `sampled` with this stage's constants set.
    ///
    /// Production receives `num_devices` and `species_no`; deployment
    /// receives `num_devices`, `distance_from_port` and `port`.
    pub fn apply(&self, stage: CostStage, sampled: &ParameterSet) -> ParameterSet {
        let mut set = sampled.clone();
        set.insert(NUM_DEVICES_PARAM.to_string(), self.num_devices as f64);
        match stage {
            CostStage::Production => {
                set.insert(SPECIES_NO_PARAM.to_string(), f64::from(self.species_no));
            }
            CostStage::Deployment => {
                set.insert(
                    DISTANCE_FROM_PORT_PARAM.to_string(),
                    self.distance_from_port_nm,
                );
                set.insert(PORT_PARAM.to_string(), f64::from(self.port));
            }
        }
        set
    }

    pub fn with_devices(mut self, num_devices: u64) -> Self {
        self.num_devices = num_devices;
        self
    }
}

/// Draws cost-model parameter sets from the configured ranges.
#[derive(Debug, Clone)]
pub struct CostSampler {
    config: CostConfig,
}

impl CostSampler {
    /// Validates that both models expose the cost output cells and that
    /// every range is well formed.
    pub fn new(config: CostConfig) -> Result<Self, ConfigError> {
        config.check_required()?;
        config.check_ranges()?;
        if config.n_draws == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "costs.n_draws".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &CostConfig {
        &self.config
    }

    /// Sample `n_draws` sets for both stages. Parameters are drawn in name
    /// order, production first.
    pub fn sample(&self, sampler: &mut dyn IParameterSampler) -> StageDraws {
        let n = self.config.n_draws;
        let mut draws = StageDraws::default();
        for stage in CostStage::ALL {
            let mut sets = vec![ParameterSet::new(); n];
            for (name, spec, range) in self.config.model(stage).sampled() {
                let values = sampler.sample(range, n, spec.categorical);
                for (set, value) in sets.iter_mut().zip(values) {
                    set.insert(name.to_string(), value);
                }
            }
            debug!(stage = %stage, draws = n, "sampled cost parameters");
            match stage {
                CostStage::Production => draws.production = sets,
                CostStage::Deployment => draws.deployment = sets,
            }
        }
        draws
    }
}
