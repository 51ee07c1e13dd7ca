use reefecon_condition::ConditionClassifier;
use reefecon_core::models::{ConditionCategory, IndicatorVector, ThresholdSource};
use test_fixtures::{expert_panel, stepped_rows, threshold_set};

fn stepped() -> reefecon_core::models::ExpertThresholdSet {
    threshold_set(ThresholdSource::Mean, stepped_rows())
}

#[test]
fn all_indicators_above_top_bound_is_very_good() {
    let c = ConditionClassifier::new();
    let v = IndicatorVector::new([0.95; 5]);
    assert_eq!(c.classify(&v, &stepped()), ConditionCategory::VeryGood);
}

#[test]
fn all_indicators_below_poor_bound_is_very_poor() {
    let c = ConditionClassifier::new();
    let v = IndicatorVector::new([0.1; 5]);
    assert_eq!(c.classify(&v, &stepped()), ConditionCategory::VeryPoor);
}

#[test]
fn equality_meets_the_bound() {
    let c = ConditionClassifier::new();
    let v = IndicatorVector::new([0.6, 0.6, 0.6, 0.0, 0.0]);
    assert_eq!(c.classify(&v, &stepped()), ConditionCategory::Good);
}

#[test]
fn three_of_five_reach_quorum_two_do_not() {
    let c = ConditionClassifier::new();
    let three = IndicatorVector::new([0.85, 0.85, 0.85, 0.1, 0.1]);
    assert_eq!(c.classify(&three, &stepped()), ConditionCategory::VeryGood);

    let two = IndicatorVector::new([0.85, 0.85, 0.1, 0.1, 0.1]);
    assert_eq!(c.classify(&two, &stepped()), ConditionCategory::VeryPoor);
}

#[test]
fn three_on_fair_bound_classify_as_fair_not_higher() {
    let c = ConditionClassifier::new();
    let v = IndicatorVector::new([0.1, 0.4, 0.4, 0.1, 0.4]);
    assert_eq!(c.classify(&v, &stepped()), ConditionCategory::Fair);

    let b = c.classify_with_breakdown(&v, &stepped());
    assert_eq!(b.satisfied, [3, 3, 0, 0]);
}

#[test]
fn best_category_wins_when_several_reach_quorum() {
    let c = ConditionClassifier::new();
    // Every category from Poor to Fair has quorum; Good does not.
    let v = IndicatorVector::new([0.45, 0.45, 0.45, 0.45, 0.45]);
    assert_eq!(c.classify(&v, &stepped()), ConditionCategory::Fair);
}

#[test]
fn breakdown_reports_per_category_counts() {
    let c = ConditionClassifier::new();
    let v = IndicatorVector::new([0.9, 0.7, 0.5, 0.3, 0.1]);
    let b = c.classify_with_breakdown(&v, &stepped());
    assert_eq!(b.satisfied, [4, 3, 2, 1]);
    assert_eq!(b.category, ConditionCategory::Fair);
}

#[test]
fn custom_quorum_is_clamped() {
    assert_eq!(ConditionClassifier::with_quorum(0).quorum(), 1);
    assert_eq!(ConditionClassifier::with_quorum(9).quorum(), 5);
    assert_eq!(ConditionClassifier::default().quorum(), 3);
}

#[test]
fn fixture_panel_classifies_consistently_with_mean() {
    let panel = expert_panel();
    let c = ConditionClassifier::new();
    let healthy = IndicatorVector::new([0.6, 0.8, 0.7, 1.0, 0.9]);
    assert_eq!(c.classify(&healthy, panel.mean()), ConditionCategory::VeryGood);
    for expert in panel.experts() {
        assert_eq!(c.classify(&healthy, expert), ConditionCategory::VeryGood);
    }
}
