use serde::{Deserialize, Serialize};

use super::defaults;

/// Batch execution settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Base seed. Each scenario derives its own streams from it.
    pub seed: u64,
    /// Process scenarios in parallel.
    pub parallel: bool,
    /// Worker threads when parallel; `None` uses the rayon default.
    pub threads: Option<usize>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            seed: defaults::DEFAULT_SEED,
            parallel: true,
            threads: None,
        }
    }
}
