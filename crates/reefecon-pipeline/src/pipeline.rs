use std::sync::Arc;

use rayon::prelude::*;
use reefecon_condition::{build_result_set, ConditionClassifier, RawEcology};
use reefecon_core::config::ReefEconConfig;
use reefecon_core::errors::{ConfigError, PipelineResult, ReefEconError, ReefEconResult};
use reefecon_core::models::{
    ExpertPanel, InterventionKey, RawResultSet, ReefInfo, ScenarioArm, ScenarioOutput,
};
use reefecon_core::traits::{ICostModel, ISummarySink};
use reefecon_costs::{CostAggregator, CostSampler, UniformParameterSampler};
use reefecon_metrics::{build_key_entry, metric_table_names, MetricAggregator};
use reefecon_uncertainty::UncertaintySampler;
use tracing::{info, warn};

use crate::scenario::ScenarioInput;
use crate::seed::{scenario_seed, SeedStream};

/// Outcome of a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub scenarios_written: usize,
    pub metric_tables: usize,
    pub cost_tables: usize,
    /// Key rows of every written scenario.
    pub key: InterventionKey,
}

/// Batch orchestrator. Configuration and the cost model are validated
/// once at construction and shared read-only across worker threads.
pub struct Pipeline {
    config: ReefEconConfig,
    panel: ExpertPanel,
    classifier: ConditionClassifier,
    metrics: MetricAggregator,
    cost_sampler: CostSampler,
    costs: CostAggregator,
}

impl Pipeline {
    pub fn new(
        config: ReefEconConfig,
        panel: ExpertPanel,
        model: Arc<dyn ICostModel>,
    ) -> ReefEconResult<Self> {
        ReefEconConfig::validate(&config)?;
        // Rejects unsupported uncertainty modes before any scenario runs.
        UncertaintySampler::new(config.uncertainty.clone(), config.pipeline.seed)?;
        let cost_sampler = CostSampler::new(config.costs.clone())?;
        let costs = CostAggregator::new(model, config.costs.contingency, config.costs.port_id);

        Ok(Self {
            metrics: MetricAggregator::new(config.metrics.clone()),
            classifier: ConditionClassifier::new(),
            cost_sampler,
            costs,
            panel,
            config,
        })
    }

    pub fn config(&self) -> &ReefEconConfig {
        &self.config
    }

    /// Derive a result set from raw outputs with the configured indicator
    /// settings.
    pub fn derive_result_set(
        &self,
        reefs: Vec<ReefInfo>,
        years: Vec<i32>,
        n_replicates: usize,
        samples: &[RawEcology],
    ) -> ReefEconResult<RawResultSet> {
        Ok(build_result_set(
            reefs,
            years,
            n_replicates,
            samples,
            &self.config.indicators,
        )?)
    }

    /// Compute every table of one scenario without writing anything.
    pub fn process_scenario(&self, input: &ScenarioInput) -> ReefEconResult<ScenarioOutput> {
        let id = input.id;
        let base = self.config.pipeline.seed;
        let condition_seed = scenario_seed(base, id, SeedStream::Condition);
        let first_year = input.first_intervention_year();

        let mut arms = vec![(ScenarioArm::Intervention, &input.intervention)];
        if self.config.metrics.include_counterfactual {
            if let Some(cf) = &input.counterfactual {
                arms.push((ScenarioArm::Counterfactual, cf));
            }
        }

        let mut metrics = Vec::new();
        for (arm, results) in &arms {
            // Same seed per arm: matched arms share their draw plans.
            let mut sampler =
                UncertaintySampler::new(self.config.uncertainty.clone(), condition_seed)?;
            let cube = sampler.sample(results, &self.panel, &self.classifier);
            metrics.extend(self.metrics.summarize_all(id, *arm, &cube, first_year));
        }

        let mut parameter_sampler =
            UniformParameterSampler::new(scenario_seed(base, id, SeedStream::Cost));
        let draws = self.cost_sampler.sample(&mut parameter_sampler);
        let costs = self.costs.aggregate(
            id,
            input.config.species_count,
            &input.deployments,
            &draws,
        )?;

        let arm_kinds: Vec<ScenarioArm> = arms.iter().map(|(arm, _)| *arm).collect();
        let key_entry = build_key_entry(
            id,
            input.config.clone(),
            input.deployments.clone(),
            metric_table_names(id, &self.config.metrics.metrics, &arm_kinds),
            true,
            self.config.costs.port_id,
            input.intervention.years(),
        );

        Ok(ScenarioOutput {
            metrics,
            costs,
            key_entry,
        })
    }

    /// Process every scenario and write the successful ones, in input order.
    pub fn run(
        &self,
        inputs: &[ScenarioInput],
        sink: &dyn ISummarySink,
    ) -> PipelineResult<BatchReport> {
        let outputs = match self.compute_all(inputs) {
            Ok(outputs) => outputs,
            Err(e) => {
                let mut result = PipelineResult::default();
                for input in inputs {
                    result.add_error(
                        input.id,
                        ReefEconError::Config(ConfigError::ValidationFailed {
                            field: "pipeline.threads".to_string(),
                            message: e.clone(),
                        }),
                    );
                }
                return result;
            }
        };

        let mut result = PipelineResult::new(BatchReport::default());
        for (input, output) in inputs.iter().zip(outputs) {
            let output = match output {
                Ok(o) => o,
                Err(e) => {
                    warn!(intervention = %input.id, error = %e, "scenario failed; nothing written");
                    result.add_error(input.id, e);
                    continue;
                }
            };
            if let Err(e) = result.data.key.check(&output.key_entry) {
                warn!(intervention = %input.id, error = %e, "duplicate intervention id");
                result.add_error(input.id, e.into());
                continue;
            }
            if let Err(e) = sink.write_scenario(&output) {
                warn!(intervention = %input.id, error = %e, "summary sink failed");
                result.add_error(input.id, e);
                continue;
            }
            if let Err(e) = result.data.key.insert(output.key_entry.clone()) {
                result.add_error(input.id, e.into());
                continue;
            }
            result.data.scenarios_written += 1;
            result.data.metric_tables += output.metrics.len();
            result.data.cost_tables += 1;
        }

        info!(
            scenarios = inputs.len(),
            written = result.data.scenarios_written,
            failed = result.error_count(),
            "batch complete"
        );
        result
    }

    fn compute_all(
        &self,
        inputs: &[ScenarioInput],
    ) -> Result<Vec<ReefEconResult<ScenarioOutput>>, String> {
        let pipeline = &self.config.pipeline;
        if !pipeline.parallel {
            return Ok(inputs.iter().map(|i| self.process_scenario(i)).collect());
        }
        let run = || {
            inputs
                .par_iter()
                .map(|i| self.process_scenario(i))
                .collect::<Vec<_>>()
        };
        match pipeline.threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map(|pool| pool.install(run))
                .map_err(|e| e.to_string()),
            None => Ok(run()),
        }
    }
}
