use serde::{Deserialize, Deserializer, Serialize};

use super::defaults;

/// Which sources of uncertainty are sampled per draw.
///
/// Flags accept `true`/`false` or `1`/`0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UncertaintyConfig {
    /// Sample an ecological replicate per draw instead of the replicate mean.
    #[serde(deserialize_with = "flag")]
    pub ecol_uncert: bool,
    /// Shelter-volume model uncertainty. Only the disabled path exists.
    #[serde(deserialize_with = "flag")]
    pub shelt_uncert: bool,
    /// Sample an expert threshold set per draw instead of the mean set.
    #[serde(deserialize_with = "flag")]
    pub expert_uncert: bool,
    /// Perturb the RTI regression intercept per draw.
    #[serde(deserialize_with = "flag")]
    pub rti_uncert: bool,
    /// Perturb the RFI regression intercepts per draw.
    #[serde(deserialize_with = "flag")]
    pub rfi_uncert: bool,
    /// Number of draws per (reef, timestep).
    pub nsims: usize,
}

impl Default for UncertaintyConfig {
    fn default() -> Self {
        Self {
            ecol_uncert: true,
            shelt_uncert: false,
            expert_uncert: true,
            rti_uncert: true,
            rfi_uncert: true,
            nsims: defaults::DEFAULT_NSIMS,
        }
    }
}

impl UncertaintyConfig {
    /// Every source disabled: draws collapse to the deterministic mean path.
    pub fn deterministic(nsims: usize) -> Self {
        Self {
            ecol_uncert: false,
            shelt_uncert: false,
            expert_uncert: false,
            rti_uncert: false,
            rfi_uncert: false,
            nsims,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(b) => Ok(b),
        FlagRepr::Int(0) => Ok(false),
        FlagRepr::Int(1) => Ok(true),
        FlagRepr::Int(other) => Err(serde::de::Error::custom(format!(
            "uncertainty flag must be 0 or 1, got {other}"
        ))),
    }
}
