//! # reefecon-pipeline
//!
//! Runs every intervention scenario through classification, metric
//! aggregation and cost aggregation, in parallel across scenarios, and
//! hands finished tables to an [`ISummarySink`](reefecon_core::traits::ISummarySink).
//!
//! A failing scenario writes nothing and is reported in the returned
//! [`PipelineResult`](reefecon_core::errors::PipelineResult); the rest of
//! the batch continues.

pub mod pipeline;
pub mod scenario;
pub mod seed;
pub mod sink;
pub mod tracing_setup;

pub use pipeline::{BatchReport, Pipeline};
pub use reefecon_core::models::ScenarioOutput;
pub use scenario::ScenarioInput;
pub use sink::MemorySink;
