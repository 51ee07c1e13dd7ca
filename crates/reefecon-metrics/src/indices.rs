//! Continuous reef indices derived from the relative indicators.

use reefecon_core::constants::{
    RFI_BIOMASS_SLOPE, RFI_COMPLEXITY_SLOPE, RFI_UNIT_FACTOR, RTI_COEFFICIENTS, RTI_MAX, RTI_MIN,
};
use reefecon_core::models::{Indicator, IndicatorVector};

/// Reef Tourism Index: linear regression on all five indicators,
/// clamped to [0.1, 0.9].
pub fn rti(indicators: &IndicatorVector, intercept: f64) -> f64 {
    let linear: f64 = RTI_COEFFICIENTS
        .iter()
        .zip(indicators.values())
        .map(|(b, x)| b * x)
        .sum();
    (intercept + linear).clamp(RTI_MIN, RTI_MAX)
}

/// Reef Fish Index: coral cover → structural complexity → fish biomass,
/// scaled by 0.01.
pub fn rfi(indicators: &IndicatorVector, complexity_intercept: f64, biomass_intercept: f64) -> f64 {
    let cover_pct = indicators.get(Indicator::CoralCover) * 100.0;
    let complexity = complexity_intercept + RFI_COMPLEXITY_SLOPE * cover_pct;
    RFI_UNIT_FACTOR * (biomass_intercept + RFI_BIOMASS_SLOPE * complexity)
}
