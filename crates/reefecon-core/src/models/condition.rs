use serde::{Deserialize, Serialize};
use std::fmt;

/// Reef Condition Index category, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionCategory {
    VeryPoor,
    Poor,
    Fair,
    Good,
    VeryGood,
}

impl ConditionCategory {
    /// All categories, worst first.
    pub const ALL: [ConditionCategory; 5] = [
        Self::VeryPoor,
        Self::Poor,
        Self::Fair,
        Self::Good,
        Self::VeryGood,
    ];

    /// Categories that carry a lower-bound threshold, best first.
    /// Very Poor is the floor and has none.
    pub const THRESHOLDED_BEST_FIRST: [ConditionCategory; 4] =
        [Self::VeryGood, Self::Good, Self::Fair, Self::Poor];

    /// Ordinal rank: 0 (Very Poor) to 4 (Very Good).
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Ordinal score used by the RCI tables: 0.1, 0.3, 0.5, 0.7, 0.9.
    pub fn score(self) -> f64 {
        match self {
            Self::VeryPoor => 0.1,
            Self::Poor => 0.3,
            Self::Fair => 0.5,
            Self::Good => 0.7,
            Self::VeryGood => 0.9,
        }
    }

    /// Row index into a threshold table (Poor = 0 .. Very Good = 3).
    /// `None` for Very Poor.
    pub fn threshold_row(self) -> Option<usize> {
        match self {
            Self::VeryPoor => None,
            other => Some(other.rank() - 1),
        }
    }
}

impl fmt::Display for ConditionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VeryPoor => "very poor",
            Self::Poor => "poor",
            Self::Fair => "fair",
            Self::Good => "good",
            Self::VeryGood => "very good",
        };
        f.write_str(name)
    }
}
