//! # reefecon-condition
//!
//! Maps the five relative ecological indicators at one
//! (reef, timestep, replicate) onto a Reef Condition Index category.
//!
//! ## Quorum rule
//!
//! Categories are tried best first. A category is assigned as soon as at
//! least 3 of the 5 indicators meet or exceed its lower bound; otherwise
//! the reef is Very Poor.
//!
//! Also derives the relative indicators from raw simulation output
//! (coral cover per taxon, juvenile counts, shelter volume, CoTS, rubble).

pub mod classifier;
pub mod derivation;

pub use classifier::{ClassificationBreakdown, ConditionClassifier};
pub use derivation::{build_result_set, derive_indicators, juvenile_baseline, RawEcology};
