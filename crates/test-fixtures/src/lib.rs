//! Shared fixtures for reefecon tests and benches: a synthetic expert
//! panel, result-set builders, cost configurations, and mock cost models.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use reefecon_core::config::{CostConfig, CostModelSpec, CostParameterSpec, SampleRange};
use reefecon_core::constants::{
    DISTANCE_FROM_PORT_PARAM, NUM_DEVICES_PARAM, OPERATIONAL_COST_CELL, SETUP_COST_CELL,
};
use reefecon_core::errors::CostError;
use reefecon_core::models::intervention::{
    DeploymentRecord, IntervenedReef, InterventionConfig,
};
use reefecon_core::models::{
    CostEstimate, CostStage, ExpertPanel, ExpertThresholdSet, IndicatorVector, RawResultSet,
    ReefInfo, ThresholdSource,
};
use reefecon_core::traits::{ICostModel, ParameterSet};
use serde::Deserialize;

/// Absolute path of a file under this crate's `data/` directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(relative_path)
}

#[derive(Deserialize)]
struct PanelFile {
    experts: Vec<ExpertRows>,
}

#[derive(Deserialize)]
struct ExpertRows {
    poor: [f64; 5],
    fair: [f64; 5],
    good: [f64; 5],
    very_good: [f64; 5],
}

/// The seven-expert panel in `data/expert_thresholds.json`.
///
/// # Panics
/// Panics if the fixture is missing or malformed.
pub fn expert_panel() -> ExpertPanel {
    let path = fixture_path("expert_thresholds.json");
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    let file: PanelFile = serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e));

    let experts = file
        .experts
        .into_iter()
        .enumerate()
        .map(|(i, rows)| {
            threshold_set(
                ThresholdSource::Expert(i),
                [rows.poor, rows.fair, rows.good, rows.very_good],
            )
        })
        .collect();
    ExpertPanel::new(experts).expect("fixture panel is valid")
}

/// Threshold set from raw rows ordered Poor, Fair, Good, Very Good.
pub fn threshold_set(source: ThresholdSource, rows: [[f64; 5]; 4]) -> ExpertThresholdSet {
    ExpertThresholdSet::new(source, rows.map(IndicatorVector::new)).expect("valid thresholds")
}

/// Bounds 0.2 / 0.4 / 0.6 / 0.8 on every indicator.
pub fn stepped_rows() -> [[f64; 5]; 4] {
    [[0.2; 5], [0.4; 5], [0.6; 5], [0.8; 5]]
}

/// Seven experts sharing the same rows.
pub fn uniform_panel(rows: [[f64; 5]; 4]) -> ExpertPanel {
    let experts = (0..7)
        .map(|i| threshold_set(ThresholdSource::Expert(i), rows))
        .collect();
    ExpertPanel::new(experts).expect("uniform panel is valid")
}

/// Seven experts whose every bound is shifted by `i * step` for expert `i`.
pub fn staggered_panel(step: f64) -> ExpertPanel {
    let experts = (0..7)
        .map(|i| {
            let shift = i as f64 * step;
            let rows = stepped_rows().map(|row| row.map(|v| v + shift));
            threshold_set(ThresholdSource::Expert(i), rows)
        })
        .collect();
    ExpertPanel::new(experts).expect("staggered panel is valid")
}

/// `n` reefs named `reef-0..`, 1 km² each, 10·(i+1) nm from port.
pub fn reefs(n: usize) -> Vec<ReefInfo> {
    (0..n)
        .map(|i| ReefInfo::new(format!("reef-{i}"), 1.0, 10.0 * (i + 1) as f64))
        .collect()
}

/// Result set whose value at (replicate, reef, timestep) comes from `f`.
pub fn result_set_with<F>(
    reefs: Vec<ReefInfo>,
    years: Vec<i32>,
    n_replicates: usize,
    f: F,
) -> RawResultSet
where
    F: Fn(usize, usize, usize) -> IndicatorVector,
{
    let n_reefs = reefs.len();
    let n_years = years.len();
    let mut values = Vec::with_capacity(n_replicates * n_reefs * n_years);
    for rep in 0..n_replicates {
        for reef in 0..n_reefs {
            for t in 0..n_years {
                values.push(f(rep, reef, t));
            }
        }
    }
    RawResultSet::new(reefs, years, n_replicates, values).expect("valid result set")
}

/// Every indicator equal to `value` everywhere.
pub fn constant_result_set(
    n_reefs: usize,
    years: Vec<i32>,
    n_replicates: usize,
    value: f64,
) -> RawResultSet {
    result_set_with(reefs(n_reefs), years, n_replicates, |_, _, _| {
        IndicatorVector::new([value; 5])
    })
}

/// Every indicator equal to `0.1 + 0.2 * replicate`: replicates land in
/// distinct categories against [`stepped_rows`].
pub fn replicate_graded_result_set(
    n_reefs: usize,
    years: Vec<i32>,
    n_replicates: usize,
) -> RawResultSet {
    result_set_with(reefs(n_reefs), years, n_replicates, |rep, _, _| {
        IndicatorVector::new([0.1 + 0.2 * rep as f64; 5])
    })
}

fn cell(sheet: &str, row: u32, column: u32) -> CostParameterSpec {
    CostParameterSpec {
        sheet: sheet.to_string(),
        row,
        column,
        range: None,
        categorical: false,
    }
}

fn sampled(sheet: &str, row: u32, lower: f64, upper: f64, categorical: bool) -> CostParameterSpec {
    CostParameterSpec {
        range: Some(SampleRange::new(lower, upper)),
        categorical,
        ..cell(sheet, row, 3)
    }
}

/// Production and deployment models with output cells, fixed inputs,
/// and a couple of sampled parameters each.
pub fn sample_cost_config() -> CostConfig {
    let mut production = CostModelSpec::default();
    production
        .parameters
        .insert(SETUP_COST_CELL.to_string(), cell("Summary", 4, 2));
    production
        .parameters
        .insert(OPERATIONAL_COST_CELL.to_string(), cell("Summary", 5, 2));
    production
        .parameters
        .insert(NUM_DEVICES_PARAM.to_string(), cell("Dashboard", 5, 3));
    production.parameters.insert(
        "labour_rate".to_string(),
        sampled("Dashboard", 8, 40.0, 60.0, false),
    );
    production.parameters.insert(
        "tank_count".to_string(),
        sampled("Dashboard", 9, 2.0, 6.0, true),
    );

    let mut deployment = CostModelSpec::default();
    deployment
        .parameters
        .insert(SETUP_COST_CELL.to_string(), cell("Summary", 6, 4));
    deployment
        .parameters
        .insert(OPERATIONAL_COST_CELL.to_string(), cell("Summary", 7, 4));
    deployment
        .parameters
        .insert(NUM_DEVICES_PARAM.to_string(), cell("Dashboard", 5, 3));
    deployment.parameters.insert(
        "vessel_day_rate".to_string(),
        sampled("Dashboard", 12, 1000.0, 1500.0, false),
    );

    CostConfig {
        n_draws: 3,
        production,
        deployment,
        ..CostConfig::default()
    }
}

/// Linear cost model:
/// setup = fixed + per_device · num_devices,
/// operational = per_device_opex · num_devices + per_nm · distance.
#[derive(Debug, Default)]
pub struct LinearCostModel {
    pub setup_fixed: f64,
    pub setup_per_device: f64,
    pub opex_per_device: f64,
    pub opex_per_nm: f64,
    calls: AtomicUsize,
}

impl LinearCostModel {
    pub fn new(setup_fixed: f64, setup_per_device: f64, opex_per_device: f64, opex_per_nm: f64) -> Self {
        Self {
            setup_fixed,
            setup_per_device,
            opex_per_device,
            opex_per_nm,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `evaluate` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ICostModel for LinearCostModel {
    fn evaluate(
        &self,
        _stage: CostStage,
        parameters: &ParameterSet,
    ) -> Result<CostEstimate, CostError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let devices = parameters.get(NUM_DEVICES_PARAM).copied().unwrap_or(0.0);
        let distance = parameters
            .get(DISTANCE_FROM_PORT_PARAM)
            .copied()
            .unwrap_or(0.0);
        Ok(CostEstimate {
            setup: self.setup_fixed + self.setup_per_device * devices,
            operational: self.opex_per_device * devices + self.opex_per_nm * distance,
        })
    }
}

/// Cost model that always fails.
#[derive(Debug, Default)]
pub struct FailingCostModel;

impl ICostModel for FailingCostModel {
    fn evaluate(
        &self,
        stage: CostStage,
        _parameters: &ParameterSet,
    ) -> Result<CostEstimate, CostError> {
        Err(CostError::EvaluationFailed {
            stage: stage.to_string(),
            message: "workbook unavailable".to_string(),
        })
    }
}

/// Intervention configuration with distinguishable volume.
pub fn intervention_config(deployment_volume: u64) -> InterventionConfig {
    InterventionConfig {
        climate_model: "EC-Earth3-Veg_ssp245".to_string(),
        deployment_volume,
        species_count: 6,
        deployment_years: vec![2026, 2027, 2028],
        enhancement_level: 5.0,
        reefs: vec!["reef-0".to_string(), "reef-1".to_string()],
        extra: Default::default(),
    }
}

/// One deployment record on the given (reef id, distance) pairs.
pub fn deployment(year: i32, replicate: u32, quantity: u64, reefs: &[(&str, f64)]) -> DeploymentRecord {
    DeploymentRecord {
        year,
        replicate,
        quantity,
        reefs: reefs
            .iter()
            .map(|(id, d)| IntervenedReef {
                reef_id: id.to_string(),
                distance_to_port_nm: *d,
            })
            .collect(),
    }
}
