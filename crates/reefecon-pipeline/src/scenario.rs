use reefecon_core::models::{DeploymentRecord, InterventionConfig, InterventionId, RawResultSet};

/// Everything needed to summarize one intervention scenario.
#[derive(Debug, Clone)]
pub struct ScenarioInput {
    pub id: InterventionId,
    pub config: InterventionConfig,
    pub intervention: RawResultSet,
    /// Matched run without the intervention, when available.
    pub counterfactual: Option<RawResultSet>,
    /// Realized deployments per (year, replicate).
    pub deployments: Vec<DeploymentRecord>,
}

impl ScenarioInput {
    pub fn new(
        id: InterventionId,
        config: InterventionConfig,
        intervention: RawResultSet,
        deployments: Vec<DeploymentRecord>,
    ) -> Self {
        Self {
            id,
            config,
            intervention,
            counterfactual: None,
            deployments,
        }
    }

    pub fn with_counterfactual(mut self, counterfactual: RawResultSet) -> Self {
        self.counterfactual = Some(counterfactual);
        self
    }

    /// First deployed year, then the first configured deployment year,
    /// then the first simulated year.
    pub fn first_intervention_year(&self) -> i32 {
        self.deployments
            .iter()
            .map(|d| d.year)
            .min()
            .or_else(|| self.config.first_deployment_year())
            .or_else(|| self.intervention.years().first().copied())
            .unwrap_or_default()
    }
}
