//! Seams to the external collaborators: the spreadsheet cost model,
//! the distribution sampler, and the table writer.

pub mod cost_model;
pub mod parameter_sampler;
pub mod summary_sink;

pub use cost_model::{ICostModel, ParameterSet};
pub use parameter_sampler::IParameterSampler;
pub use summary_sink::ISummarySink;
