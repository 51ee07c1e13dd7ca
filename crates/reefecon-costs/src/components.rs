use reefecon_core::models::{CostComponent, CostEstimate};

/// Expand one (setup, operational) pair into the 11 cost codes, indexed
/// by `code() - 1`.
///
/// Monitoring, sustaining capital and vessel fuel are zero by policy, so
/// their contingencies are zero as well.
pub fn expand_components(estimate: CostEstimate, contingency: f64) -> [f64; 11] {
    let mut out = [0.0; 11];
    for component in CostComponent::ALL {
        let idx = usize::from(component.code()) - 1;
        out[idx] = match component {
            CostComponent::Capex => estimate.setup,
            CostComponent::ContingencyCapex => contingency * estimate.setup,
            CostComponent::Opex => estimate.operational,
            CostComponent::ContingencyOpex => contingency * estimate.operational,
            CostComponent::ContingencyCapexMonitoring => {
                contingency * out[usize::from(CostComponent::CapexMonitoring.code()) - 1]
            }
            CostComponent::ContingencyOpexMonitoring => {
                contingency * out[usize::from(CostComponent::OpexMonitoring.code()) - 1]
            }
            CostComponent::SustainingCapitalOpex
            | CostComponent::VesselFuel
            | CostComponent::CapexMonitoring
            | CostComponent::OpexMonitoring
            | CostComponent::SustainingCapitalOpexMonitoring => 0.0,
        };
    }
    out
}
