use serde::{Deserialize, Serialize};
use std::fmt;

use super::{ConditionCategory, Indicator, IndicatorVector};
use crate::constants::EXPERT_COUNT;
use crate::errors::ConditionError;

/// Where a threshold set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdSource {
    /// One elicited expert, zero-based.
    Expert(usize),
    /// Element-wise mean over every expert in the panel.
    Mean,
}

impl fmt::Display for ThresholdSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expert(i) => write!(f, "expert {}", i + 1),
            Self::Mean => f.write_str("mean expert"),
        }
    }
}

/// Lower bounds per category (Poor .. Very Good) for each indicator.
///
/// Invariant: for every indicator, bounds are non-decreasing with
/// category rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertThresholdSet {
    source: ThresholdSource,
    /// Row `r` holds the bounds of the category with `threshold_row() == r`.
    bounds: [IndicatorVector; 4],
}

impl ExpertThresholdSet {
    /// Build a threshold set from rows ordered Poor, Fair, Good, Very Good.
    pub fn new(
        source: ThresholdSource,
        bounds: [IndicatorVector; 4],
    ) -> Result<Self, ConditionError> {
        for (row, category) in bounds.iter().zip(&ConditionCategory::ALL[1..]) {
            if row.values().iter().any(|v| !v.is_finite()) {
                return Err(ConditionError::InvalidThresholdSet {
                    source_name: source.to_string(),
                    reason: format!("non-finite bound for {category}"),
                });
            }
        }
        for indicator in Indicator::ALL {
            for pair in bounds.windows(2) {
                if pair[1].get(indicator) < pair[0].get(indicator) {
                    return Err(ConditionError::InvalidThresholdSet {
                        source_name: source.to_string(),
                        reason: format!("{indicator:?} bounds decrease with category rank"),
                    });
                }
            }
        }
        Ok(Self { source, bounds })
    }

    pub fn source(&self) -> ThresholdSource {
        self.source
    }

    /// Lower bound an indicator must meet for `category`.
    /// `None` for Very Poor, which is the floor.
    pub fn lower_bound(&self, category: ConditionCategory, indicator: Indicator) -> Option<f64> {
        category
            .threshold_row()
            .map(|row| self.bounds[row].get(indicator))
    }

    /// All bounds for `category`.
    pub fn bounds_for(&self, category: ConditionCategory) -> Option<&IndicatorVector> {
        category.threshold_row().map(|row| &self.bounds[row])
    }
}

/// The elicited expert threshold sets plus their derived mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpertPanel {
    experts: Vec<ExpertThresholdSet>,
    mean: ExpertThresholdSet,
}

impl ExpertPanel {
    /// Build a panel from exactly [`EXPERT_COUNT`] expert sets and derive the mean set.
    pub fn new(experts: Vec<ExpertThresholdSet>) -> Result<Self, ConditionError> {
        if experts.len() != EXPERT_COUNT {
            return Err(ConditionError::InvalidThresholdSet {
                source_name: "expert panel".to_string(),
                reason: format!("expected {EXPERT_COUNT} experts, got {}", experts.len()),
            });
        }

        let mut rows = [IndicatorVector::default(); 4];
        for (row, slot) in rows.iter_mut().enumerate() {
            // Non-empty: the count was checked above.
            *slot = IndicatorVector::mean(experts.iter().map(|e| &e.bounds[row]))
                .unwrap_or_default();
        }
        let mean = ExpertThresholdSet::new(ThresholdSource::Mean, rows)?;

        Ok(Self { experts, mean })
    }

    pub fn experts(&self) -> &[ExpertThresholdSet] {
        &self.experts
    }

    pub fn expert(&self, index: usize) -> Option<&ExpertThresholdSet> {
        self.experts.get(index)
    }

    pub fn mean(&self) -> &ExpertThresholdSet {
        &self.mean
    }

    pub fn len(&self) -> usize {
        self.experts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experts.is_empty()
    }
}
