//! # reefecon-costs
//!
//! Samples cost-model parameters per stage, then walks each scenario's
//! deployment years in order to build its cost trajectory.
//!
//! ## Setup vs operational cost
//!
//! Setup (CAPEX) cost is charged only on the quantity deployed beyond the
//! largest previous year of the same replicate. Operational (OPEX) cost is
//! charged on the full quantity every year.

pub mod aggregator;
pub mod components;
pub mod parameters;
pub mod running;
pub mod sampler;
pub mod spatial;

pub use aggregator::CostAggregator;
pub use components::expand_components;
pub use parameters::UniformParameterSampler;
pub use running::RunningCostState;
pub use sampler::{CostSampler, ScenarioConstants, StageDraws};
pub use spatial::{haversine_km, representative_reefs};
