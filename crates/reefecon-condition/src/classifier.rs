use reefecon_core::constants::CONDITION_QUORUM;
use reefecon_core::models::{ConditionCategory, ExpertThresholdSet, Indicator, IndicatorVector};

/// Per-category satisfied-indicator counts behind a classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationBreakdown {
    pub category: ConditionCategory,
    /// Indexed by `threshold_row()` (Poor .. Very Good).
    pub satisfied: [usize; 4],
}

/// Quorum classifier over expert-elicited thresholds.
#[derive(Debug, Clone, Copy)]
pub struct ConditionClassifier {
    quorum: usize,
}

impl ConditionClassifier {
    pub fn new() -> Self {
        Self {
            quorum: CONDITION_QUORUM,
        }
    }

    /// Classifier with a custom quorum, clamped to 1..=5.
    pub fn with_quorum(quorum: usize) -> Self {
        Self {
            quorum: quorum.clamp(1, Indicator::COUNT),
        }
    }

    pub fn quorum(&self) -> usize {
        self.quorum
    }

    /// Number of indicators meeting or exceeding `category`'s bounds.
    /// Every indicator satisfies Very Poor.
    pub fn satisfied_count(
        indicators: &IndicatorVector,
        thresholds: &ExpertThresholdSet,
        category: ConditionCategory,
    ) -> usize {
        match thresholds.bounds_for(category) {
            Some(bounds) => Indicator::ALL
                .iter()
                .filter(|&&i| indicators.get(i) >= bounds.get(i))
                .count(),
            None => Indicator::COUNT,
        }
    }

    /// Best category reaching the quorum, else Very Poor.
    pub fn classify(
        &self,
        indicators: &IndicatorVector,
        thresholds: &ExpertThresholdSet,
    ) -> ConditionCategory {
        ConditionCategory::THRESHOLDED_BEST_FIRST
            .into_iter()
            .find(|&c| Self::satisfied_count(indicators, thresholds, c) >= self.quorum)
            .unwrap_or(ConditionCategory::VeryPoor)
    }

    /// Classify and report how many indicators met each category.
    pub fn classify_with_breakdown(
        &self,
        indicators: &IndicatorVector,
        thresholds: &ExpertThresholdSet,
    ) -> ClassificationBreakdown {
        let mut satisfied = [0usize; 4];
        for category in ConditionCategory::THRESHOLDED_BEST_FIRST {
            if let Some(row) = category.threshold_row() {
                satisfied[row] = Self::satisfied_count(indicators, thresholds, category);
            }
        }
        ClassificationBreakdown {
            category: self.classify(indicators, thresholds),
            satisfied,
        }
    }
}

impl Default for ConditionClassifier {
    fn default() -> Self {
        Self::new()
    }
}
