use std::sync::{Mutex, MutexGuard};

use reefecon_core::errors::{ReefEconError, ReefEconResult};
use reefecon_core::models::{CostSummary, InterventionKeyEntry, MetricSummary, ScenarioOutput};
use reefecon_core::traits::ISummarySink;
use serde::Serialize;

/// Keeps every written table in memory, in write order.
#[derive(Debug, Default)]
pub struct MemorySink {
    metrics: Mutex<Vec<MetricSummary>>,
    costs: Mutex<Vec<CostSummary>>,
    key: Mutex<Vec<InterventionKeyEntry>>,
}

/// Serialized snapshot of a [`MemorySink`].
#[derive(Serialize)]
struct SinkSnapshot<'a> {
    metrics: &'a [MetricSummary],
    costs: &'a [CostSummary],
    key: &'a [InterventionKeyEntry],
}

fn lock<'a, T>(m: &'a Mutex<T>, table: &str) -> ReefEconResult<MutexGuard<'a, T>> {
    m.lock().map_err(|e| ReefEconError::Sink {
        table: table.to_string(),
        message: e.to_string(),
    })
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metric_summaries(&self) -> ReefEconResult<Vec<MetricSummary>> {
        Ok(lock(&self.metrics, "metrics")?.clone())
    }

    pub fn cost_summaries(&self) -> ReefEconResult<Vec<CostSummary>> {
        Ok(lock(&self.costs, "costs")?.clone())
    }

    pub fn key_entries(&self) -> ReefEconResult<Vec<InterventionKeyEntry>> {
        Ok(lock(&self.key, "key")?.clone())
    }

    pub fn table_count(&self) -> ReefEconResult<usize> {
        Ok(lock(&self.metrics, "metrics")?.len() + lock(&self.costs, "costs")?.len())
    }

    /// Every table as one JSON document.
    pub fn to_json(&self) -> ReefEconResult<String> {
        let metrics = lock(&self.metrics, "metrics")?;
        let costs = lock(&self.costs, "costs")?;
        let key = lock(&self.key, "key")?;
        serde_json::to_string(&SinkSnapshot {
            metrics: &metrics,
            costs: &costs,
            key: &key,
        })
        .map_err(|e| ReefEconError::Sink {
            table: "snapshot".to_string(),
            message: e.to_string(),
        })
    }
}

impl ISummarySink for MemorySink {
    fn write_scenario(&self, output: &ScenarioOutput) -> ReefEconResult<()> {
        // All three guards are taken before the first push.
        let mut metrics = lock(&self.metrics, "metrics")?;
        let mut costs = lock(&self.costs, &output.costs.table_name())?;
        let mut key = lock(&self.key, "intervention_key")?;
        metrics.extend(output.metrics.iter().cloned());
        costs.push(output.costs.clone());
        key.push(output.key_entry.clone());
        Ok(())
    }
}
