use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::ConfigError;

/// Stable identifier for one intervention scenario.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct InterventionId(pub u32);

impl fmt::Display for InterventionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for InterventionId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// The configuration dimensions that define an intervention scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionConfig {
    pub climate_model: String,
    /// Nominal number of 1-year-old corals deployed per deployment year.
    pub deployment_volume: u64,
    pub species_count: u32,
    pub deployment_years: Vec<i32>,
    /// Thermal tolerance enhancement (DHW) of deployed corals.
    pub enhancement_level: f64,
    /// Ids of the reefs intervened on.
    pub reefs: Vec<String>,
    /// Any further configured dimensions, keyed by name.
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl InterventionConfig {
    /// blake3 hex digest over the canonical JSON form.
    pub fn fingerprint(&self) -> String {
        // Field order is fixed by the struct and `extra` is a BTreeMap,
        // so the serialized form is canonical.
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        blake3::hash(&bytes).to_hex().to_string()
    }

    pub fn first_deployment_year(&self) -> Option<i32> {
        self.deployment_years.iter().copied().min()
    }
}

/// A reef intervened on in a deployment year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntervenedReef {
    pub reef_id: String,
    pub distance_to_port_nm: f64,
}

/// Realized deployment for one year of one ecological replicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub year: i32,
    /// One-based replicate number.
    pub replicate: u32,
    /// Realized number of 1-year-old corals deployed that year.
    pub quantity: u64,
    pub reefs: Vec<IntervenedReef>,
}

impl DeploymentRecord {
    /// Furthest distance to port among the reefs intervened on; 0 when none.
    pub fn max_distance_nm(&self) -> f64 {
        self.reefs
            .iter()
            .map(|r| r.distance_to_port_nm)
            .fold(0.0, f64::max)
    }

    /// Fold another row of the same (replicate, year) into this one.
    /// Rows of one year repeat the yearly quantity, so the larger is kept.
    pub fn merge(&mut self, other: &DeploymentRecord) {
        self.quantity = self.quantity.max(other.quantity);
        self.reefs.extend(other.reefs.iter().cloned());
    }
}

/// One row of the intervention key: links a scenario id to its
/// configuration, realized deployments, and output tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterventionKeyEntry {
    pub id: InterventionId,
    pub config: InterventionConfig,
    pub deployments: Vec<DeploymentRecord>,
    pub metric_tables: Vec<String>,
    pub cost_table: Option<String>,
    pub port_id: u32,
    pub start_year: i32,
    pub end_year: i32,
}

impl InterventionKeyEntry {
    /// First year anything is deployed, falling back to the configured years.
    pub fn first_intervention_year(&self) -> Option<i32> {
        self.deployments
            .iter()
            .map(|d| d.year)
            .min()
            .or_else(|| self.config.first_deployment_year())
    }

    /// Distinct replicate numbers present in the deployments, ascending.
    pub fn replicates(&self) -> Vec<u32> {
        let mut reps: Vec<u32> = self.deployments.iter().map(|d| d.replicate).collect();
        reps.sort_unstable();
        reps.dedup();
        reps
    }

    /// Distinct deployment years, ascending.
    pub fn years(&self) -> Vec<i32> {
        let mut years: Vec<i32> = self.deployments.iter().map(|d| d.year).collect();
        years.sort_unstable();
        years.dedup();
        years
    }
}

/// The cross-scenario key table. Ids are unique per run-set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterventionKey {
    entries: BTreeMap<InterventionId, InterventionKeyEntry>,
}

impl InterventionKey {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. Re-inserting the same id is allowed only with
    /// an identical configuration; the newer entry then replaces the old.
    pub fn insert(&mut self, entry: InterventionKeyEntry) -> Result<(), ConfigError> {
        self.check(&entry)?;
        self.entries.insert(entry.id, entry);
        Ok(())
    }

    /// Fails if `entry`'s id is already keyed to a different configuration.
    pub fn check(&self, entry: &InterventionKeyEntry) -> Result<(), ConfigError> {
        match self.entries.get(&entry.id) {
            Some(existing) if existing.config.fingerprint() != entry.config.fingerprint() => {
                Err(ConfigError::DuplicateIntervention {
                    intervention: entry.id.0,
                })
            }
            _ => Ok(()),
        }
    }

    pub fn get(&self, id: InterventionId) -> Option<&InterventionKeyEntry> {
        self.entries.get(&id)
    }

    pub fn config_for(&self, id: InterventionId) -> Option<&InterventionConfig> {
        self.entries.get(&id).map(|e| &e.config)
    }

    /// Find the id keyed to a configuration.
    pub fn id_for(&self, config: &InterventionConfig) -> Option<InterventionId> {
        let fingerprint = config.fingerprint();
        self.entries
            .values()
            .find(|e| e.config.fingerprint() == fingerprint)
            .map(|e| e.id)
    }

    pub fn entries(&self) -> impl Iterator<Item = &InterventionKeyEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
