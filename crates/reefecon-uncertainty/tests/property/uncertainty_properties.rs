use proptest::prelude::*;
use reefecon_condition::ConditionClassifier;
use reefecon_core::config::UncertaintyConfig;
use reefecon_uncertainty::UncertaintySampler;
use test_fixtures::{expert_panel, replicate_graded_result_set};

// ── No ecological or expert uncertainty: every draw is identical ────────

proptest! {
    #[test]
    fn deterministic_draws_are_identical(seed in any::<u64>(), n_reefs in 1usize..4, n_reps in 1usize..5) {
        let results = replicate_graded_result_set(n_reefs, vec![2030, 2031], n_reps);
        let panel = expert_panel();
        let config = UncertaintyConfig {
            ecol_uncert: false,
            expert_uncert: false,
            nsims: 5,
            ..UncertaintyConfig::default()
        };
        let mut sampler = UncertaintySampler::new(config, seed).unwrap();
        let cube = sampler.sample(&results, &panel, &ConditionClassifier::new());

        prop_assert_eq!(cube.nsims(), 5);
        for reef in 0..n_reefs {
            for t in 0..2 {
                let draws = cube.draws_at(reef, t);
                prop_assert!(draws.iter().all(|c| *c == draws[0]));
            }
        }
    }
}

// ── Seeded sampling is reproducible ──────────────────────────────────────

proptest! {
    #[test]
    fn same_seed_same_cube(seed in any::<u64>()) {
        let results = replicate_graded_result_set(2, vec![2030, 2031, 2032], 5);
        let panel = expert_panel();
        let config = UncertaintyConfig { nsims: 10, ..UncertaintyConfig::default() };
        let classifier = ConditionClassifier::new();

        let a = UncertaintySampler::new(config.clone(), seed).unwrap().sample(&results, &panel, &classifier);
        let b = UncertaintySampler::new(config, seed).unwrap().sample(&results, &panel, &classifier);
        prop_assert_eq!(a, b);
    }
}
