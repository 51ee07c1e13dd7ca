use std::sync::Arc;

use reefecon_core::config::{ReefEconConfig, UncertaintyConfig};
use reefecon_core::errors::{
    ConditionError, ConfigError, CostError, ReefEconError, ReefEconResult,
};
use reefecon_core::models::{
    CostComponent, InterventionId, MetricKind, ScenarioArm, ScenarioOutput,
};
use reefecon_core::traits::ISummarySink;
use reefecon_pipeline::tracing_setup::init_tracing;
use reefecon_pipeline::{MemorySink, Pipeline, ScenarioInput};
use test_fixtures::{
    constant_result_set, deployment, expert_panel, intervention_config, sample_cost_config,
    FailingCostModel, LinearCostModel,
};

fn config() -> ReefEconConfig {
    ReefEconConfig {
        costs: sample_cost_config(),
        ..ReefEconConfig::default()
    }
}

fn scenario(id: u32, volume: u64) -> ScenarioInput {
    ScenarioInput::new(
        InterventionId(id),
        intervention_config(volume),
        constant_result_set(2, vec![2025, 2026, 2027, 2028], 3, 0.7),
        vec![
            deployment(2026, 1, volume, &[("reef-0", 10.0)]),
            deployment(2027, 1, volume, &[("reef-0", 10.0), ("reef-1", 20.0)]),
            deployment(2026, 2, volume, &[("reef-1", 20.0)]),
        ],
    )
    .with_counterfactual(constant_result_set(2, vec![2025, 2026, 2027, 2028], 3, 0.3))
}

fn pipeline(config: ReefEconConfig) -> Pipeline {
    Pipeline::new(
        config,
        expert_panel(),
        Arc::new(LinearCostModel::new(1_000.0, 2.0, 0.5, 10.0)),
    )
    .unwrap()
}

#[test]
fn writes_metric_cost_and_key_tables() {
    init_tracing();
    let sink = MemorySink::new();
    let result = pipeline(config()).run(&[scenario(1, 100)], &sink);
    assert!(result.is_clean());
    assert_eq!(result.data.scenarios_written, 1);

    // Two default metrics for each of two arms.
    let metrics = sink.metric_summaries().unwrap();
    let names: Vec<String> = metrics.iter().map(|m| m.table_name()).collect();
    assert_eq!(
        names,
        vec![
            "intervention1_area_saved_above_thresh_intervention",
            "intervention1_area_weighted_rci_intervention",
            "intervention1_area_saved_above_thresh_counterfactual",
            "intervention1_area_weighted_rci_counterfactual",
        ]
    );
    assert!(metrics.iter().all(|m| m.nsims == 3));
    assert_eq!(metrics[0].rows[0].year_relative, -1);

    let costs = sink.cost_summaries().unwrap();
    assert_eq!(costs.len(), 1);
    assert_eq!((costs[0].n_draws, costs[0].n_replicates), (3, 2));
    assert_eq!(costs[0].rows.len(), 2 * 11);
    let capex_2027 = costs[0].row(2027, CostComponent::Capex).unwrap();
    // Replicate 1 already deployed the same volume in 2026.
    assert!(capex_2027.draws[..3].iter().all(|v| *v == 0.0));

    let key = sink.key_entries().unwrap();
    assert_eq!(key.len(), 1);
    assert_eq!(key[0].metric_tables.len(), 4);
    assert_eq!(key[0].cost_table.as_deref(), Some("intervention1_mc_cost_data"));
    assert_eq!((key[0].start_year, key[0].end_year), (2025, 2028));
    assert_eq!(result.data.key.config_for(InterventionId(1)), Some(&intervention_config(100)));
}

#[test]
fn healthier_intervention_saves_more_area() {
    let sink = MemorySink::new();
    pipeline(config()).run(&[scenario(1, 100)], &sink);
    let metrics = sink.metric_summaries().unwrap();
    let saved = |arm| {
        metrics
            .iter()
            .find(|m| m.metric == MetricKind::AreaSavedAboveThresh && m.arm == arm)
            .unwrap()
            .year_totals()
    };
    let int = saved(ScenarioArm::Intervention);
    let cf = saved(ScenarioArm::Counterfactual);
    assert!(int.iter().zip(&cf).all(|((_, a), (_, b))| a[0] > b[0]));
}

#[test]
fn failing_scenario_writes_nothing_and_does_not_abort() {
    let sink = MemorySink::new();
    let mut empty = scenario(2, 100);
    empty.deployments.clear();
    let result = pipeline(config()).run(&[scenario(1, 100), empty, scenario(3, 300)], &sink);

    assert_eq!(result.error_count(), 1);
    assert_eq!(result.errors[0].intervention, InterventionId(2));
    assert!(matches!(
        result.errors[0].error,
        ReefEconError::Cost(CostError::EmptyScenario { intervention: 2 })
    ));
    assert_eq!(result.data.scenarios_written, 2);
    let key = sink.key_entries().unwrap();
    assert_eq!(key.iter().map(|e| e.id.0).collect::<Vec<_>>(), vec![1, 3]);
    assert!(sink
        .metric_summaries()
        .unwrap()
        .iter()
        .all(|m| m.intervention != InterventionId(2)));
}

/// Refuses the cost table of one intervention.
struct CostRejectingSink {
    inner: MemorySink,
    reject: InterventionId,
}

impl ISummarySink for CostRejectingSink {
    fn write_scenario(&self, output: &ScenarioOutput) -> ReefEconResult<()> {
        if output.costs.intervention == self.reject {
            return Err(ReefEconError::Sink {
                table: output.costs.table_name(),
                message: "table store unavailable".to_string(),
            });
        }
        self.inner.write_scenario(output)
    }
}

#[test]
fn rejected_cost_table_leaves_no_metric_tables_behind() {
    let sink = CostRejectingSink {
        inner: MemorySink::new(),
        reject: InterventionId(2),
    };
    let inputs = [scenario(1, 100), scenario(2, 200), scenario(3, 300)];
    let result = pipeline(config()).run(&inputs, &sink);

    assert_eq!(result.error_count(), 1);
    assert!(matches!(
        &result.errors[0].error,
        ReefEconError::Sink { table, .. } if table == "intervention2_mc_cost_data"
    ));
    assert_eq!(result.data.scenarios_written, 2);
    assert_eq!(result.data.key.config_for(InterventionId(2)), None);

    let metrics = sink.inner.metric_summaries().unwrap();
    assert_eq!(metrics.len(), 8);
    assert!(metrics.iter().all(|m| m.intervention != InterventionId(2)));
    let costs = sink.inner.cost_summaries().unwrap();
    assert_eq!(costs.iter().map(|c| c.intervention.0).collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(sink.inner.key_entries().unwrap().len(), 2);
}

#[test]
fn evaluator_failure_is_collected_per_scenario() {
    let p = Pipeline::new(config(), expert_panel(), Arc::new(FailingCostModel)).unwrap();
    let sink = MemorySink::new();
    let result = p.run(&[scenario(1, 10), scenario(2, 20)], &sink);
    assert_eq!(result.error_count(), 2);
    assert_eq!(sink.table_count().unwrap(), 0);
}

#[test]
fn duplicate_id_with_other_config_is_rejected() {
    let sink = MemorySink::new();
    let result = pipeline(config()).run(&[scenario(5, 100), scenario(5, 999)], &sink);
    assert_eq!(result.error_count(), 1);
    assert!(matches!(
        result.errors[0].error,
        ReefEconError::Config(ConfigError::DuplicateIntervention { intervention: 5 })
    ));
    assert_eq!(sink.key_entries().unwrap().len(), 1);
}

#[test]
fn shelter_uncertainty_fails_at_construction() {
    let mut cfg = config();
    cfg.uncertainty = UncertaintyConfig {
        shelt_uncert: true,
        ..UncertaintyConfig::default()
    };
    let err = Pipeline::new(cfg, expert_panel(), Arc::new(LinearCostModel::default()))
        .err()
        .unwrap();
    assert!(matches!(
        err,
        ReefEconError::Condition(ConditionError::UnsupportedUncertaintyMode { .. })
    ));
}

#[test]
fn missing_cost_cells_fail_at_construction() {
    let err = Pipeline::new(
        ReefEconConfig::default(),
        expert_panel(),
        Arc::new(LinearCostModel::default()),
    )
    .err()
    .unwrap();
    assert!(matches!(
        err,
        ReefEconError::Config(ConfigError::ConfigMismatch { .. })
    ));
}

#[test]
fn sequential_and_parallel_runs_agree() {
    let inputs: Vec<_> = (1..=6).map(|i| scenario(i, 100 * i as u64)).collect();

    let parallel = MemorySink::new();
    pipeline(config()).run(&inputs, &parallel);

    let mut seq_config = config();
    seq_config.pipeline.parallel = false;
    let sequential = MemorySink::new();
    pipeline(seq_config).run(&inputs, &sequential);

    let mut pooled_config = config();
    pooled_config.pipeline.threads = Some(2);
    let pooled = MemorySink::new();
    pipeline(pooled_config).run(&inputs, &pooled);

    assert_eq!(parallel.to_json().unwrap(), sequential.to_json().unwrap());
    assert_eq!(parallel.to_json().unwrap(), pooled.to_json().unwrap());
}

#[test]
fn counterfactual_can_be_disabled() {
    let mut cfg = config();
    cfg.metrics.include_counterfactual = false;
    let sink = MemorySink::new();
    pipeline(cfg).run(&[scenario(1, 100)], &sink);
    let metrics = sink.metric_summaries().unwrap();
    assert_eq!(metrics.len(), 2);
    assert!(metrics.iter().all(|m| m.arm == ScenarioArm::Intervention));
}

#[test]
fn project_config_file_drives_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut cfg = config();
    cfg.uncertainty.nsims = 7;
    std::fs::write(dir.path().join("reefecon.toml"), cfg.to_toml().unwrap()).unwrap();

    let loaded = ReefEconConfig::from_file(&dir.path().join("reefecon.toml")).unwrap();
    let sink = MemorySink::new();
    pipeline(loaded).run(&[scenario(1, 100)], &sink);
    assert!(sink.metric_summaries().unwrap().iter().all(|m| m.nsims == 7));
}
