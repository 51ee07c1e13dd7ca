use reefecon_core::constants::{RFI_BIOMASS_INTERCEPT, RFI_COMPLEXITY_INTERCEPT, RTI_INTERCEPT};
use reefecon_core::models::{ExpertPanel, ExpertThresholdSet};
use serde::{Deserialize, Serialize};

/// Ecological replicate used by a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplicateChoice {
    /// Zero-based replicate index.
    Sampled(usize),
    /// Mean over all replicates.
    Mean,
}

/// Threshold set used by a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdChoice {
    /// Zero-based expert index.
    Expert(usize),
    /// Element-wise mean of the panel.
    Mean,
}

impl ThresholdChoice {
    /// Resolve against a panel. Out-of-range experts fall back to the mean.
    pub fn resolve<'a>(&self, panel: &'a ExpertPanel) -> &'a ExpertThresholdSet {
        match *self {
            Self::Expert(i) => panel.expert(i).unwrap_or_else(|| panel.mean()),
            Self::Mean => panel.mean(),
        }
    }
}

/// Every random choice made for one draw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawPlan {
    pub draw: usize,
    pub replicate: ReplicateChoice,
    pub thresholds: ThresholdChoice,
    pub rti_intercept: f64,
    pub rfi_complexity_intercept: f64,
    pub rfi_biomass_intercept: f64,
}

impl DrawPlan {
    /// Replicate mean, mean thresholds, nominal intercepts.
    pub fn nominal(draw: usize) -> Self {
        Self {
            draw,
            replicate: ReplicateChoice::Mean,
            thresholds: ThresholdChoice::Mean,
            rti_intercept: RTI_INTERCEPT,
            rfi_complexity_intercept: RFI_COMPLEXITY_INTERCEPT,
            rfi_biomass_intercept: RFI_BIOMASS_INTERCEPT,
        }
    }
}
