//! Tests for the reefecon error handling system.

use reefecon_core::errors::error_code::{self, ReefEconErrorCode};
use reefecon_core::errors::*;
use reefecon_core::models::InterventionId;

#[test]
fn spec_error_kinds_have_distinct_codes() {
    let mismatch = ConfigError::ConfigMismatch {
        parameter: "setupCost".into(),
        stage: "production".into(),
    };
    let range = ConfigError::InvalidSampleRange {
        parameter: "x".into(),
        lower: 2.0,
        upper: 1.0,
    };
    let unsupported = ConditionError::UnsupportedUncertaintyMode {
        flag: "shelt_uncert".into(),
        reason: "n/a".into(),
    };
    let malformed = ConditionError::MalformedResultSet {
        reason: "no reefs".into(),
    };
    let empty = CostError::EmptyScenario { intervention: 4 };

    assert_eq!(mismatch.error_code(), error_code::CONFIG_MISMATCH);
    assert_eq!(range.error_code(), error_code::INVALID_SAMPLE_RANGE);
    assert_eq!(unsupported.error_code(), error_code::UNSUPPORTED_UNCERTAINTY_MODE);
    assert_eq!(malformed.error_code(), error_code::MALFORMED_RESULT_SET);
    assert_eq!(empty.error_code(), error_code::EMPTY_SCENARIO);
}

#[test]
fn from_conversions_preserve_codes() {
    let err: ReefEconError = CostError::EmptyScenario { intervention: 1 }.into();
    assert!(matches!(err, ReefEconError::Cost(CostError::EmptyScenario { .. })));
    assert_eq!(err.error_code(), error_code::EMPTY_SCENARIO);

    let err: ReefEconError = ConfigError::FileNotFound {
        path: "/tmp/x".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn report_string_prefixes_code() {
    let err = CostError::EmptyScenario { intervention: 12 };
    assert_eq!(
        err.report_string(),
        "[EMPTY_SCENARIO] intervention 12 has no deployments to aggregate"
    );
}

#[test]
fn pipeline_result_collects_failures() {
    let mut result: PipelineResult<Vec<u32>> = PipelineResult::new(vec![1]);
    assert!(result.is_clean());
    result.add_error(
        InterventionId(3),
        CostError::EmptyScenario { intervention: 3 }.into(),
    );
    assert!(!result.is_clean());
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.errors[0].intervention, InterventionId(3));
    assert_eq!(result.data, vec![1]);
}
