use serde::{Deserialize, Serialize};

use super::IndicatorVector;
use crate::errors::ConditionError;

/// Static metadata for one modelled reef.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReefInfo {
    pub id: String,
    /// Modelled reef area (km²).
    pub area_km2: f64,
    /// Distance to the nearest port (nautical miles).
    pub distance_to_port_nm: f64,
    /// Longitude/latitude in decimal degrees, when known.
    #[serde(default)]
    pub location: Option<(f64, f64)>,
}

impl ReefInfo {
    pub fn new(id: impl Into<String>, area_km2: f64, distance_to_port_nm: f64) -> Self {
        Self {
            id: id.into(),
            area_km2,
            distance_to_port_nm,
            location: None,
        }
    }

    pub fn with_location(mut self, lon: f64, lat: f64) -> Self {
        self.location = Some((lon, lat));
        self
    }
}

/// Relative indicator values over replicate × reef × timestep.
///
/// Read-only once built. Storage is replicate-major, then reef, then
/// timestep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawResultSet {
    reefs: Vec<ReefInfo>,
    years: Vec<i32>,
    n_replicates: usize,
    values: Vec<IndicatorVector>,
    /// Indicators derived from replicate-averaged raw output, reef-major.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replicate_means: Option<Vec<IndicatorVector>>,
}

impl RawResultSet {
    pub fn new(
        reefs: Vec<ReefInfo>,
        years: Vec<i32>,
        n_replicates: usize,
        values: Vec<IndicatorVector>,
    ) -> Result<Self, ConditionError> {
        let malformed = |reason: String| ConditionError::MalformedResultSet { reason };

        if reefs.is_empty() {
            return Err(malformed("no reefs".to_string()));
        }
        if years.is_empty() {
            return Err(malformed("no timesteps".to_string()));
        }
        if n_replicates == 0 {
            return Err(malformed("no ecological replicates".to_string()));
        }
        if years.windows(2).any(|w| w[1] <= w[0]) {
            return Err(malformed("timesteps must be strictly ascending".to_string()));
        }
        if let Some(reef) = reefs
            .iter()
            .find(|r| !r.area_km2.is_finite() || r.area_km2 < 0.0)
        {
            return Err(malformed(format!("reef {} has invalid area", reef.id)));
        }

        let expected = n_replicates * reefs.len() * years.len();
        if values.len() != expected {
            return Err(malformed(format!(
                "expected {expected} indicator vectors ({n_replicates} replicates x {} reefs x {} years), got {}",
                reefs.len(),
                years.len(),
                values.len()
            )));
        }
        if let Some(pos) = values
            .iter()
            .position(|v| v.values().iter().any(|x| !x.is_finite()))
        {
            return Err(malformed(format!("non-finite indicator at position {pos}")));
        }

        Ok(Self {
            reefs,
            years,
            n_replicates,
            values,
            replicate_means: None,
        })
    }

    /// Attach per-(reef, timestep) indicators derived from the
    /// replicate-averaged raw output. They replace the average of the
    /// per-replicate indicators in [`mean_indicators`](Self::mean_indicators).
    pub fn with_replicate_means(
        mut self,
        means: Vec<IndicatorVector>,
    ) -> Result<Self, ConditionError> {
        let expected = self.reefs.len() * self.years.len();
        if means.len() != expected {
            return Err(ConditionError::MalformedResultSet {
                reason: format!(
                    "expected {expected} replicate-mean vectors, got {}",
                    means.len()
                ),
            });
        }
        if let Some(pos) = means
            .iter()
            .position(|v| v.values().iter().any(|x| !x.is_finite()))
        {
            return Err(ConditionError::MalformedResultSet {
                reason: format!("non-finite replicate-mean indicator at position {pos}"),
            });
        }
        self.replicate_means = Some(means);
        Ok(self)
    }

    pub fn reefs(&self) -> &[ReefInfo] {
        &self.reefs
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn n_reefs(&self) -> usize {
        self.reefs.len()
    }

    pub fn n_years(&self) -> usize {
        self.years.len()
    }

    pub fn n_replicates(&self) -> usize {
        self.n_replicates
    }

    /// Sum of every modelled reef's area.
    pub fn total_area(&self) -> f64 {
        self.reefs.iter().map(|r| r.area_km2).sum()
    }

    fn offset(&self, replicate: usize, reef: usize, timestep: usize) -> usize {
        (replicate * self.reefs.len() + reef) * self.years.len() + timestep
    }

    /// Indicators for one replicate, or `None` when out of range.
    pub fn indicators(
        &self,
        replicate: usize,
        reef: usize,
        timestep: usize,
    ) -> Option<&IndicatorVector> {
        if replicate >= self.n_replicates || reef >= self.reefs.len() || timestep >= self.years.len()
        {
            return None;
        }
        self.values.get(self.offset(replicate, reef, timestep))
    }

    /// Mean over every replicate, or `None` when out of range.
    ///
    /// Uses the attached replicate-mean indicators when present, else the
    /// average of the per-replicate indicators.
    pub fn mean_indicators(&self, reef: usize, timestep: usize) -> Option<IndicatorVector> {
        if reef >= self.reefs.len() || timestep >= self.years.len() {
            return None;
        }
        if let Some(means) = &self.replicate_means {
            return means.get(reef * self.years.len() + timestep).copied();
        }
        IndicatorVector::mean(
            (0..self.n_replicates).map(|rep| &self.values[self.offset(rep, reef, timestep)]),
        )
    }
}
