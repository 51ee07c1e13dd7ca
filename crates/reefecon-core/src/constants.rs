/// Number of elicited experts in a threshold panel.
pub const EXPERT_COUNT: usize = 7;

/// Indicators that must meet a category's bounds for it to be assigned
/// (0.6 of the 5 indicators).
pub const CONDITION_QUORUM: usize = 3;

/// Crown-of-thorns starfish per manta tow classed as an outbreak.
pub const COTS_OUTBREAK_THRESHOLD: f64 = 0.2;

/// Scale applied to simulated relative shelter volume before clamping to [0, 1].
pub const SHELTER_VOLUME_SCALE: f64 = 10.0;

/// Leading timesteps (hindcast) over which the juvenile baseline maximum is taken.
pub const DEFAULT_JUVENILE_BASELINE_YEARS: usize = 18;

// RTI: linear regression of the discrete RCI on the five indicators.
pub const RTI_INTERCEPT: f64 = -0.498;
pub const RTI_INTERCEPT_SD: f64 = 0.163;
/// Coefficients in `Indicator::ALL` order.
pub const RTI_COEFFICIENTS: [f64; 5] = [0.291, 0.628, 1.335, 0.212, 0.250];
pub const RTI_MIN: f64 = 0.1;
pub const RTI_MAX: f64 = 0.9;

// RFI: coral cover -> structural complexity -> fish biomass
// (Graham & Nash 2012, figs 4a and 6b).
pub const RFI_COMPLEXITY_INTERCEPT: f64 = 1.232;
pub const RFI_COMPLEXITY_INTERCEPT_SD: f64 = 0.195;
pub const RFI_COMPLEXITY_SLOPE: f64 = 0.007476;
pub const RFI_BIOMASS_INTERCEPT: f64 = -1623.6;
pub const RFI_BIOMASS_INTERCEPT_SD: f64 = 533.0;
pub const RFI_BIOMASS_SLOPE: f64 = 1883.3;
pub const RFI_UNIT_FACTOR: f64 = 0.01;

/// Default contingency proportion applied to CAPEX and OPEX.
pub const DEFAULT_CONTINGENCY: f64 = 0.8;

/// Port id passed to the deployment model; distance carries the real signal.
pub const DEFAULT_PORT_ID: u32 = 1;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

// Cost-model cell names.
pub const SETUP_COST_CELL: &str = "setupCost";
pub const OPERATIONAL_COST_CELL: &str = "Cost";
pub const REQUIRED_COST_CELLS: [&str; 2] = [SETUP_COST_CELL, OPERATIONAL_COST_CELL];
pub const NUM_DEVICES_PARAM: &str = "num_devices";
pub const SPECIES_NO_PARAM: &str = "species_no";
pub const DISTANCE_FROM_PORT_PARAM: &str = "distance_from_port";
pub const PORT_PARAM: &str = "port";
