use reefecon_core::models::{
    CostSummary, DeploymentRecord, InterventionConfig, InterventionId, InterventionKeyEntry,
    MetricKind, MetricSummary, ScenarioArm,
};

/// Table names for every (metric, arm) pair, metric-major.
pub fn metric_table_names(
    id: InterventionId,
    metrics: &[MetricKind],
    arms: &[ScenarioArm],
) -> Vec<String> {
    metrics
        .iter()
        .flat_map(|&m| arms.iter().map(move |&a| MetricSummary::table_name_for(id, m, a)))
        .collect()
}

/// Build the key row for one scenario.
///
/// Deployments are sorted by (year, replicate). The simulated span comes
/// from `years`; an empty slice yields a zero-width span at the first
/// deployment year.
pub fn build_key_entry(
    id: InterventionId,
    config: InterventionConfig,
    mut deployments: Vec<DeploymentRecord>,
    metric_tables: Vec<String>,
    with_costs: bool,
    port_id: u32,
    years: &[i32],
) -> InterventionKeyEntry {
    deployments.sort_by_key(|d| (d.year, d.replicate));
    let fallback = deployments
        .first()
        .map(|d| d.year)
        .or_else(|| config.first_deployment_year())
        .unwrap_or_default();
    let start_year = years.iter().copied().min().unwrap_or(fallback);
    let end_year = years.iter().copied().max().unwrap_or(fallback);

    InterventionKeyEntry {
        id,
        config,
        deployments,
        metric_tables,
        cost_table: with_costs.then(|| CostSummary::table_name_for(id)),
        port_id,
        start_year,
        end_year,
    }
}
