use serde::{Deserialize, Serialize};
use std::ops::Index;

/// The five relative ecological indicators underpinning the RCI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    /// Total coral cover as a proportion.
    CoralCover,
    /// Relative shelter volume.
    ShelterVolume,
    /// Juvenile density relative to the baseline maximum.
    JuvenileDensity,
    /// Complement of the relative crown-of-thorns outbreak density.
    OutbreakComplement,
    /// Complement of the rubble proportion.
    RubbleComplement,
}

impl Indicator {
    pub const COUNT: usize = 5;

    pub const ALL: [Indicator; Self::COUNT] = [
        Self::CoralCover,
        Self::ShelterVolume,
        Self::JuvenileDensity,
        Self::OutbreakComplement,
        Self::RubbleComplement,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One value per indicator at a single (reef, timestep, replicate).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct IndicatorVector(pub [f64; Indicator::COUNT]);

impl IndicatorVector {
    pub fn new(values: [f64; Indicator::COUNT]) -> Self {
        Self(values)
    }

    pub fn get(&self, indicator: Indicator) -> f64 {
        self.0[indicator.index()]
    }

    pub fn set(&mut self, indicator: Indicator, value: f64) {
        self.0[indicator.index()] = value;
    }

    pub fn values(&self) -> &[f64; Indicator::COUNT] {
        &self.0
    }

    /// Element-wise mean of a non-empty set of vectors.
    /// Returns `None` for an empty input.
    pub fn mean<'a, I>(vectors: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a IndicatorVector>,
    {
        let mut sum = [0.0; Indicator::COUNT];
        let mut count = 0usize;
        for v in vectors {
            for (acc, x) in sum.iter_mut().zip(v.0.iter()) {
                *acc += x;
            }
            count += 1;
        }
        if count == 0 {
            return None;
        }
        for acc in sum.iter_mut() {
            *acc /= count as f64;
        }
        Some(Self(sum))
    }
}

impl Index<Indicator> for IndicatorVector {
    type Output = f64;
    fn index(&self, indicator: Indicator) -> &f64 {
        &self.0[indicator.index()]
    }
}
