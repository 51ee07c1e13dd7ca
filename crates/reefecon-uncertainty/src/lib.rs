//! # reefecon-uncertainty
//!
//! Produces `nsims` classified draws per (reef, timestep). Each draw
//! fixes one [`DrawPlan`]: which ecological replicate (or the replicate
//! mean), which expert threshold set (or the mean set), and the
//! regression intercepts used by the RTI/RFI metrics. The plan is shared
//! by every reef and timestep of the draw.

pub mod cube;
pub mod plan;
pub mod sampler;

pub use cube::{ClassifiedCell, ConditionCube};
pub use plan::{DrawPlan, ReplicateChoice, ThresholdChoice};
pub use sampler::UncertaintySampler;
