//! # reefecon-metrics
//!
//! Turns a [`ConditionCube`](reefecon_uncertainty::ConditionCube) into
//! per-reef, per-year metric tables with one column per draw, and builds
//! the intervention key linking each scenario id to its configuration,
//! deployments and output tables.

pub mod aggregator;
pub mod indices;
pub mod key;

pub use aggregator::MetricAggregator;
pub use indices::{rfi, rti};
pub use key::{build_key_entry, metric_table_names};
