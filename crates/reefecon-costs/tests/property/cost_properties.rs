use std::sync::Arc;

use proptest::prelude::*;
use reefecon_core::models::{CostComponent, CostEstimate, InterventionId};
use reefecon_costs::{expand_components, CostAggregator, CostSampler, RunningCostState, UniformParameterSampler};
use test_fixtures::{deployment, sample_cost_config, LinearCostModel};

// ── Increment never exceeds the quantity; cumulative is the running max ─

proptest! {
    #[test]
    fn running_state_tracks_maximum(quantities in prop::collection::vec(0u64..1_000_000, 1..12)) {
        let mut state = RunningCostState::new();
        let mut max = 0u64;
        for q in quantities {
            let inc = state.advance(q);
            prop_assert_eq!(inc, q.saturating_sub(max));
            max = max.max(q);
            prop_assert_eq!(state.cumulative(), max);
        }
    }
}

// ── Policy-zero components are always zero ─────────────────────────────

proptest! {
    #[test]
    fn zero_policy_components(setup in 0.0f64..1e9, operational in 0.0f64..1e9, contingency in 0.0f64..2.0) {
        let out = expand_components(CostEstimate { setup, operational }, contingency);
        for c in CostComponent::ZERO_BY_POLICY {
            prop_assert_eq!(out[usize::from(c.code()) - 1], 0.0);
        }
    }

    #[test]
    fn zero_policy_rows_in_aggregated_tables(
        quantities in prop::collection::vec(1u64..100_000, 1..5),
        seed in any::<u64>(),
    ) {
        let draws = CostSampler::new(sample_cost_config())
            .unwrap()
            .sample(&mut UniformParameterSampler::new(seed));
        let deployments: Vec<_> = quantities
            .iter()
            .enumerate()
            .map(|(i, &q)| deployment(2026 + i as i32, 1, q, &[("a", 3.0 + i as f64)]))
            .collect();
        let agg = CostAggregator::new(Arc::new(LinearCostModel::new(50.0, 1.0, 0.5, 2.0)), 0.8, 1);
        let summary = agg.aggregate(InterventionId(1), 6, &deployments, &draws).unwrap();
        for row in &summary.rows {
            if row.component.is_zero_by_policy() {
                prop_assert!(row.draws.iter().all(|v| *v == 0.0));
            }
        }
    }
}
