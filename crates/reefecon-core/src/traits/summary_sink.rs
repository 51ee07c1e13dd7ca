use crate::errors::ReefEconResult;
use crate::models::ScenarioOutput;

/// Receives finished tables. Only called once a scenario has fully succeeded.
pub trait ISummarySink: Send + Sync {
    /// Store every table of one scenario, or none of them on error.
    fn write_scenario(&self, output: &ScenarioOutput) -> ReefEconResult<()>;
}
