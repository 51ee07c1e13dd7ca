use proptest::prelude::*;
use reefecon_condition::ConditionClassifier;
use reefecon_core::models::{ConditionCategory, Indicator, IndicatorVector, ThresholdSource};
use test_fixtures::{expert_panel, stepped_rows, threshold_set};

fn arb_indicators() -> impl Strategy<Value = [f64; 5]> {
    prop::array::uniform5(0.0f64..1.0)
}

// ── Raising one indicator never lowers the category ─────────────────────

proptest! {
    #[test]
    fn classification_is_monotone(
        values in arb_indicators(),
        which in 0usize..5,
        bump in 0.0f64..1.0,
        expert in 0usize..7,
    ) {
        let panel = expert_panel();
        let thresholds = panel.expert(expert).unwrap();
        let classifier = ConditionClassifier::new();

        let before = IndicatorVector::new(values);
        let mut after = before;
        let indicator = Indicator::ALL[which];
        after.set(indicator, before.get(indicator) + bump);

        prop_assert!(classifier.classify(&after, thresholds) >= classifier.classify(&before, thresholds));
    }
}

// ── Quorum boundary: exactly 3 met assigns, 2 met does not ─────────────

proptest! {
    #[test]
    fn quorum_boundary(expert in 0usize..7, category_row in 0usize..4, mask in 0u8..32) {
        let panel = expert_panel();
        let thresholds = panel.expert(expert).unwrap();
        let category = ConditionCategory::THRESHOLDED_BEST_FIRST[3 - category_row];
        let bounds = *thresholds.bounds_for(category).unwrap();
        let poor = *thresholds
            .bounds_for(ConditionCategory::Poor)
            .unwrap();

        // Indicators selected by `mask` sit exactly on the bound; the rest
        // sit below the Poor bound.
        let mut v = IndicatorVector::default();
        for i in Indicator::ALL {
            let on = mask & (1 << i.index()) != 0;
            v.set(i, if on { bounds.get(i) } else { poor.get(i) - 0.01 });
        }
        let met = mask.count_ones() as usize;
        let result = ConditionClassifier::new().classify(&v, thresholds);
        if met >= 3 {
            prop_assert!(result >= category);
        } else {
            prop_assert_eq!(result, ConditionCategory::VeryPoor);
        }
    }
}

// ── Exactly 3 on a category's bound classifies at that category ─────────

proptest! {
    #[test]
    fn three_on_bound_classify_exactly_at_category(
        category_row in 0usize..4,
        on in prop::sample::subsequence(vec![0usize, 1, 2, 3, 4], 3),
    ) {
        // Bounds strictly increase by category, so a value on one bound
        // stays below every higher one.
        let thresholds = threshold_set(ThresholdSource::Mean, stepped_rows());
        let category = ConditionCategory::THRESHOLDED_BEST_FIRST[3 - category_row];
        let bounds = *thresholds.bounds_for(category).unwrap();

        let mut v = IndicatorVector::default();
        for i in Indicator::ALL {
            v.set(i, if on.contains(&i.index()) { bounds.get(i) } else { 0.1 });
        }
        prop_assert_eq!(ConditionClassifier::new().classify(&v, &thresholds), category);
    }

    #[test]
    fn two_on_bound_fall_to_very_poor(
        category_row in 0usize..4,
        on in prop::sample::subsequence(vec![0usize, 1, 2, 3, 4], 2),
    ) {
        let thresholds = threshold_set(ThresholdSource::Mean, stepped_rows());
        let category = ConditionCategory::THRESHOLDED_BEST_FIRST[3 - category_row];
        let bounds = *thresholds.bounds_for(category).unwrap();

        let mut v = IndicatorVector::default();
        for i in Indicator::ALL {
            v.set(i, if on.contains(&i.index()) { bounds.get(i) } else { 0.1 });
        }
        prop_assert_eq!(
            ConditionClassifier::new().classify(&v, &thresholds),
            ConditionCategory::VeryPoor
        );
    }
}
