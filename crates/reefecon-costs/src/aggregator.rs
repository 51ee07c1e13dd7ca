use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use reefecon_core::errors::CostError;
use reefecon_core::models::{
    CostComponent, CostEstimate, CostStage, CostSummary, CostSummaryRow, DeploymentRecord,
    InterventionId,
};
use reefecon_core::traits::{ICostModel, ParameterSet};
use tracing::{debug, info};

use crate::components::expand_components;
use crate::running::RunningCostState;
use crate::sampler::{ScenarioConstants, StageDraws};

/// Builds a scenario's year × component cost table.
///
/// Draw columns are replicate-major: column `r * n_draws + d` holds draw
/// `d` of the `r`-th replicate (replicates in ascending order).
pub struct CostAggregator {
    model: Arc<dyn ICostModel>,
    contingency: f64,
    port_id: u32,
}

impl CostAggregator {
    pub fn new(model: Arc<dyn ICostModel>, contingency: f64, port_id: u32) -> Self {
        Self {
            model,
            contingency,
            port_id,
        }
    }

    pub fn aggregate(
        &self,
        intervention: InterventionId,
        species_count: u32,
        deployments: &[DeploymentRecord],
        draws: &StageDraws,
    ) -> Result<CostSummary, CostError> {
        if deployments.is_empty() {
            return Err(CostError::EmptyScenario {
                intervention: intervention.0,
            });
        }

        let years: BTreeSet<i32> = deployments.iter().map(|d| d.year).collect();
        let replicates: BTreeSet<u32> = deployments.iter().map(|d| d.replicate).collect();
        let by_key = merge_by_replicate_year(deployments);

        let n_draws = draws.n_draws();
        let n_columns = n_draws * replicates.len();
        let mut table: BTreeMap<i32, [Vec<f64>; 11]> = years
            .iter()
            .map(|&y| (y, std::array::from_fn(|_| vec![0.0; n_columns])))
            .collect();

        for (r_idx, &replicate) in replicates.iter().enumerate() {
            let mut states = [RunningCostState::new(), RunningCostState::new()];
            for &year in &years {
                let Some(record) = by_key.get(&(replicate, year)) else {
                    continue;
                };
                let constants = ScenarioConstants {
                    num_devices: record.quantity,
                    species_no: species_count,
                    distance_from_port_nm: record.max_distance_nm(),
                    port: self.port_id,
                };

                let mut totals = vec![CostEstimate::default(); n_draws];
                for (s_idx, stage) in CostStage::ALL.into_iter().enumerate() {
                    let incremental = states[s_idx].advance(record.quantity);
                    for (d, sampled) in draws.stage(stage).iter().take(n_draws).enumerate() {
                        let estimate =
                            self.evaluate_year(stage, sampled, constants, incremental)?;
                        totals[d] = totals[d] + estimate;
                    }
                }

                let Some(columns) = table.get_mut(&year) else {
                    continue;
                };
                for (d, total) in totals.into_iter().enumerate() {
                    let expanded = expand_components(total, self.contingency);
                    for (c_idx, value) in expanded.into_iter().enumerate() {
                        columns[c_idx][r_idx * n_draws + d] = value;
                    }
                }
                debug!(
                    intervention = %intervention,
                    replicate,
                    year,
                    quantity = record.quantity,
                    "costed deployment year"
                );
            }
        }

        let rows = table
            .into_iter()
            .flat_map(|(year, columns)| {
                let reefs = reefs_in_year(deployments, year);
                CostComponent::ALL
                    .into_iter()
                    .zip(columns)
                    .map(move |(component, draws)| CostSummaryRow {
                        component,
                        year,
                        reefs: reefs.clone(),
                        draws,
                    })
            })
            .collect::<Vec<_>>();

        info!(
            intervention = %intervention,
            years = years.len(),
            replicates = replicates.len(),
            n_draws,
            "cost trajectory aggregated"
        );
        Ok(CostSummary {
            intervention,
            n_draws,
            n_replicates: replicates.len(),
            rows,
        })
    }

    /// Setup cost at the increment, operational cost at the full quantity.
    fn evaluate_year(
        &self,
        stage: CostStage,
        sampled: &ParameterSet,
        constants: ScenarioConstants,
        incremental: u64,
    ) -> Result<CostEstimate, CostError> {
        if constants.num_devices == 0 {
            return Ok(CostEstimate::default());
        }
        let full = self
            .model
            .evaluate(stage, &constants.apply(stage, sampled))?;
        let setup = if incremental == 0 {
            0.0
        } else if incremental == constants.num_devices {
            full.setup
        } else {
            let at_increment = constants.with_devices(incremental).apply(stage, sampled);
            self.model.evaluate(stage, &at_increment)?.setup
        };
        Ok(CostEstimate {
            setup,
            operational: full.operational,
        })
    }
}

/// One record per (replicate, year); repeated rows are merged.
fn merge_by_replicate_year(
    deployments: &[DeploymentRecord],
) -> BTreeMap<(u32, i32), DeploymentRecord> {
    let mut merged: BTreeMap<(u32, i32), DeploymentRecord> = BTreeMap::new();
    for record in deployments {
        match merged.entry((record.replicate, record.year)) {
            Entry::Vacant(slot) => {
                slot.insert(record.clone());
            }
            Entry::Occupied(mut slot) => {
                debug!(
                    replicate = record.replicate,
                    year = record.year,
                    "merging repeated deployment rows"
                );
                slot.get_mut().merge(record);
            }
        }
    }
    merged
}

fn reefs_in_year(deployments: &[DeploymentRecord], year: i32) -> Vec<String> {
    deployments
        .iter()
        .filter(|d| d.year == year)
        .flat_map(|d| d.reefs.iter().map(|r| r.reef_id.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
