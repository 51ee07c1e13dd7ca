use proptest::prelude::*;
use reefecon_core::models::{
    ConditionCategory, ExpertThresholdSet, Indicator, IndicatorVector, ThresholdSource,
};

/// Four non-decreasing rows built from cumulative non-negative steps.
fn arb_monotone_rows() -> impl Strategy<Value = [IndicatorVector; 4]> {
    (
        prop::array::uniform5(0.0f64..0.3),
        prop::array::uniform4(prop::array::uniform5(0.0f64..0.2)),
    )
        .prop_map(|(base, steps)| {
            let mut rows = [IndicatorVector::default(); 4];
            let mut acc = base;
            for (row, step) in rows.iter_mut().zip(steps) {
                for i in 0..5 {
                    acc[i] += step[i];
                }
                *row = IndicatorVector::new(acc);
            }
            rows
        })
}

// ── Monotone rows are accepted and bounds rise with category ────────────

proptest! {
    #[test]
    fn monotone_thresholds_accepted(rows in arb_monotone_rows()) {
        let set = ExpertThresholdSet::new(ThresholdSource::Mean, rows).unwrap();
        prop_assert!(set.lower_bound(ConditionCategory::VeryPoor, Indicator::CoralCover).is_none());
        for indicator in Indicator::ALL {
            let bounds: Vec<f64> = ConditionCategory::ALL[1..]
                .iter()
                .map(|&c| set.lower_bound(c, indicator).unwrap())
                .collect();
            prop_assert!(bounds.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn swapped_rows_rejected(rows in arb_monotone_rows(), which in 0usize..5) {
        let mut broken = rows;
        // Force row 0 strictly above row 3 on one indicator.
        let indicator = Indicator::ALL[which];
        broken[0].set(indicator, rows[3].get(indicator) + 1.0);
        prop_assert!(ExpertThresholdSet::new(ThresholdSource::Expert(0), broken).is_err());
    }
}

// ── Mean lies within the element-wise extremes ──────────────────────────

proptest! {
    #[test]
    fn mean_is_bounded(vectors in prop::collection::vec(prop::array::uniform5(-5.0f64..5.0), 1..10)) {
        let ivs: Vec<IndicatorVector> = vectors.iter().copied().map(IndicatorVector::new).collect();
        let mean = IndicatorVector::mean(ivs.iter()).unwrap();
        for i in Indicator::ALL {
            let lo = ivs.iter().map(|v| v.get(i)).fold(f64::INFINITY, f64::min);
            let hi = ivs.iter().map(|v| v.get(i)).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(mean.get(i) >= lo - 1e-9 && mean.get(i) <= hi + 1e-9);
        }
    }
}
