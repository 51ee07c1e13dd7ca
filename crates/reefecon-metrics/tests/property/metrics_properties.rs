use proptest::prelude::*;
use reefecon_condition::ConditionClassifier;
use reefecon_core::config::UncertaintyConfig;
use reefecon_core::models::{IndicatorVector, InterventionId, MetricKind, ReefInfo, ScenarioArm};
use reefecon_metrics::MetricAggregator;
use reefecon_uncertainty::UncertaintySampler;
use test_fixtures::{expert_panel, result_set_with};

fn arb_reefs() -> impl Strategy<Value = Vec<(f64, [f64; 5])>> {
    prop::collection::vec((0.1f64..50.0, prop::array::uniform5(0.0f64..1.0)), 1..6)
}

// ── Area totals are bounded by the modelled area ────────────────────────

proptest! {
    #[test]
    fn area_metrics_are_bounded(reefs in arb_reefs(), seed in any::<u64>()) {
        let infos: Vec<ReefInfo> = reefs
            .iter()
            .enumerate()
            .map(|(i, (area, _))| ReefInfo::new(format!("r{i}"), *area, 1.0))
            .collect();
        let total: f64 = reefs.iter().map(|(a, _)| a).sum();
        let results = result_set_with(infos, vec![2030, 2031], 2, |rep, reef, _| {
            let mut v = reefs[reef].1;
            v[0] = (v[0] + 0.1 * rep as f64).min(1.0);
            IndicatorVector::new(v)
        });
        let config = UncertaintyConfig { nsims: 4, ..UncertaintyConfig::default() };
        let cube = UncertaintySampler::new(config, seed)
            .unwrap()
            .sample(&results, &expert_panel(), &ConditionClassifier::new());
        let agg = MetricAggregator::default();

        let saved = agg.summarize(InterventionId(1), ScenarioArm::Intervention, MetricKind::AreaSavedAboveThresh, &cube, 2030);
        for (_, totals) in saved.year_totals() {
            for t in totals {
                prop_assert!(t >= 0.0 && t <= total + 1e-9);
            }
        }

        let weighted = agg.summarize(InterventionId(1), ScenarioArm::Intervention, MetricKind::AreaWeightedRci, &cube, 2030);
        for (_, totals) in weighted.year_totals() {
            for t in totals {
                prop_assert!((0.1 - 1e-9..=0.9 + 1e-9).contains(&t));
            }
        }
    }
}
