use rand::distributions::Distribution;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reefecon_condition::ConditionClassifier;
use reefecon_core::config::UncertaintyConfig;
use reefecon_core::constants::{
    RFI_BIOMASS_INTERCEPT_SD, RFI_COMPLEXITY_INTERCEPT_SD, RTI_INTERCEPT_SD,
};
use reefecon_core::errors::{ConditionError, ConfigError, ReefEconResult};
use reefecon_core::models::{ExpertPanel, IndicatorVector, RawResultSet};
use statrs::distribution::Normal;
use tracing::debug;

use crate::cube::{ClassifiedCell, ConditionCube};
use crate::plan::{DrawPlan, ReplicateChoice, ThresholdChoice};

/// Deterministic per-draw sampler.
///
/// Given a seed, produces reproducible draw plans. Random numbers are
/// consumed per draw in a fixed order (replicate, expert, RTI intercept,
/// RFI intercepts) and only for enabled sources.
pub struct UncertaintySampler {
    config: UncertaintyConfig,
    rng: ChaCha8Rng,
    rti_noise: Option<Normal>,
    rfi_complexity_noise: Option<Normal>,
    rfi_biomass_noise: Option<Normal>,
}

impl UncertaintySampler {
    pub fn new(config: UncertaintyConfig, seed: u64) -> ReefEconResult<Self> {
        if config.nsims == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "uncertainty.nsims".to_string(),
                message: "must be greater than zero".to_string(),
            }
            .into());
        }
        if config.shelt_uncert {
            return Err(ConditionError::UnsupportedUncertaintyMode {
                flag: "shelt_uncert".to_string(),
                reason: "shelter-volume model uncertainty is not implemented".to_string(),
            }
            .into());
        }

        let rti_noise = noise(config.rti_uncert, "rti_uncert", RTI_INTERCEPT_SD)?;
        let rfi_complexity_noise =
            noise(config.rfi_uncert, "rfi_uncert", RFI_COMPLEXITY_INTERCEPT_SD)?;
        let rfi_biomass_noise = noise(config.rfi_uncert, "rfi_uncert", RFI_BIOMASS_INTERCEPT_SD)?;

        Ok(Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
            rti_noise,
            rfi_complexity_noise,
            rfi_biomass_noise,
        })
    }

    pub fn config(&self) -> &UncertaintyConfig {
        &self.config
    }

    /// Draw `nsims` plans for a result set with `n_replicates` replicates
    /// and a panel of `n_experts` experts.
    pub fn plan(&mut self, n_replicates: usize, n_experts: usize) -> Vec<DrawPlan> {
        (0..self.config.nsims)
            .map(|draw| {
                let mut plan = DrawPlan::nominal(draw);
                if self.config.ecol_uncert && n_replicates > 0 {
                    plan.replicate = ReplicateChoice::Sampled(self.rng.gen_range(0..n_replicates));
                }
                if self.config.expert_uncert && n_experts > 0 {
                    plan.thresholds = ThresholdChoice::Expert(self.rng.gen_range(0..n_experts));
                }
                if let Some(n) = &self.rti_noise {
                    plan.rti_intercept += n.sample(&mut self.rng);
                }
                if let Some(n) = &self.rfi_complexity_noise {
                    plan.rfi_complexity_intercept += n.sample(&mut self.rng);
                }
                if let Some(n) = &self.rfi_biomass_noise {
                    plan.rfi_biomass_intercept += n.sample(&mut self.rng);
                }
                plan
            })
            .collect()
    }

    /// Plan and classify every (draw, reef, timestep).
    pub fn sample(
        &mut self,
        results: &RawResultSet,
        panel: &ExpertPanel,
        classifier: &ConditionClassifier,
    ) -> ConditionCube {
        let plans = self.plan(results.n_replicates(), panel.len());
        let n_reefs = results.n_reefs();
        let n_years = results.n_years();

        let means: Option<Vec<IndicatorVector>> = plans
            .iter()
            .any(|p| p.replicate == ReplicateChoice::Mean)
            .then(|| {
                (0..n_reefs)
                    .flat_map(|reef| (0..n_years).map(move |t| (reef, t)))
                    .map(|(reef, t)| results.mean_indicators(reef, t).unwrap_or_default())
                    .collect()
            });

        let mut cells = Vec::with_capacity(plans.len() * n_reefs * n_years);
        for plan in &plans {
            let thresholds = plan.thresholds.resolve(panel);
            for reef in 0..n_reefs {
                for t in 0..n_years {
                    let indicators = match (plan.replicate, &means) {
                        (ReplicateChoice::Sampled(rep), _) => {
                            results.indicators(rep, reef, t).copied().unwrap_or_default()
                        }
                        (ReplicateChoice::Mean, Some(means)) => means[reef * n_years + t],
                        (ReplicateChoice::Mean, None) => IndicatorVector::default(),
                    };
                    cells.push(ClassifiedCell {
                        category: classifier.classify(&indicators, thresholds),
                        indicators,
                    });
                }
            }
        }

        debug!(
            nsims = plans.len(),
            reefs = n_reefs,
            years = n_years,
            "classified condition draws"
        );
        ConditionCube::new(
            results.reefs().to_vec(),
            results.years().to_vec(),
            plans,
            cells,
        )
    }
}

fn noise(enabled: bool, flag: &str, sd: f64) -> Result<Option<Normal>, ConditionError> {
    if !enabled {
        return Ok(None);
    }
    Normal::new(0.0, sd)
        .map(Some)
        .map_err(|e| ConditionError::UnsupportedUncertaintyMode {
            flag: flag.to_string(),
            reason: e.to_string(),
        })
}
