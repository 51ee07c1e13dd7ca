//! Raw simulation output -> relative indicators.
//!
//! | Indicator | Derivation |
//! |-----------|------------|
//! | Coral cover | Σ per-taxon cover (%) / 100 |
//! | Shelter volume | relative volume × 10, clamped to [0, 1] |
//! | Juvenile density | juveniles / baseline maximum |
//! | Outbreak complement | 1 − clamp(CoTS / outbreak density, 0, 1) |
//! | Rubble complement | (100 − rubble %) / 100 |

use reefecon_core::config::IndicatorConfig;
use reefecon_core::errors::ConditionError;
use reefecon_core::models::{Indicator, IndicatorVector, RawResultSet, ReefInfo};
use tracing::debug;

/// Raw ecological outputs at one (replicate, reef, timestep).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawEcology {
    /// Cover per coral taxon (%).
    pub taxa_cover_pct: Vec<f64>,
    /// Absolute juvenile coral count.
    pub juveniles: f64,
    /// Simulated relative shelter volume.
    pub relative_shelter_volume: f64,
    /// Crown-of-thorns starfish per manta tow.
    pub cots_per_tow: f64,
    /// Rubble cover (%).
    pub rubble_pct: f64,
}

impl RawEcology {
    /// Field-wise mean of several samples; taxa missing from a sample count
    /// as zero cover. `None` when `samples` is empty.
    pub fn mean<'a, I>(samples: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a RawEcology>,
    {
        let mut sum = RawEcology::default();
        let mut n = 0usize;
        for s in samples {
            if s.taxa_cover_pct.len() > sum.taxa_cover_pct.len() {
                sum.taxa_cover_pct.resize(s.taxa_cover_pct.len(), 0.0);
            }
            for (acc, x) in sum.taxa_cover_pct.iter_mut().zip(&s.taxa_cover_pct) {
                *acc += x;
            }
            sum.juveniles += s.juveniles;
            sum.relative_shelter_volume += s.relative_shelter_volume;
            sum.cots_per_tow += s.cots_per_tow;
            sum.rubble_pct += s.rubble_pct;
            n += 1;
        }
        if n == 0 {
            return None;
        }
        let n = n as f64;
        sum.taxa_cover_pct.iter_mut().for_each(|x| *x /= n);
        Some(RawEcology {
            juveniles: sum.juveniles / n,
            relative_shelter_volume: sum.relative_shelter_volume / n,
            cots_per_tow: sum.cots_per_tow / n,
            rubble_pct: sum.rubble_pct / n,
            taxa_cover_pct: sum.taxa_cover_pct,
        })
    }
}

/// Convert one raw sample into the five relative indicators.
pub fn derive_indicators(
    raw: &RawEcology,
    max_juveniles: f64,
    config: &IndicatorConfig,
) -> Result<IndicatorVector, ConditionError> {
    if !max_juveniles.is_finite() || max_juveniles <= 0.0 {
        return Err(ConditionError::MalformedResultSet {
            reason: format!("juvenile baseline must be positive, got {max_juveniles}"),
        });
    }
    if config.cots_outbreak_threshold <= 0.0 {
        return Err(ConditionError::MalformedResultSet {
            reason: "outbreak density threshold must be positive".to_string(),
        });
    }

    let mut v = IndicatorVector::default();
    v.set(
        Indicator::CoralCover,
        raw.taxa_cover_pct.iter().sum::<f64>() / 100.0,
    );
    v.set(
        Indicator::ShelterVolume,
        (raw.relative_shelter_volume * config.shelter_volume_scale).clamp(0.0, 1.0),
    );
    v.set(Indicator::JuvenileDensity, raw.juveniles / max_juveniles);
    let cots_relative = (raw.cots_per_tow / config.cots_outbreak_threshold).clamp(0.0, 1.0);
    v.set(Indicator::OutbreakComplement, 1.0 - cots_relative);
    v.set(Indicator::RubbleComplement, (100.0 - raw.rubble_pct) / 100.0);
    Ok(v)
}

/// Juvenile baseline: the configured value, or the maximum count over the
/// leading `juvenile_baseline_years` timesteps of every replicate and reef.
///
/// `samples` is replicate-major, then reef, then timestep.
pub fn juvenile_baseline(
    samples: &[RawEcology],
    n_years: usize,
    config: &IndicatorConfig,
) -> Result<f64, ConditionError> {
    if let Some(fixed) = config.max_juvenile_baseline {
        return Ok(fixed);
    }
    if n_years == 0 {
        return Err(ConditionError::MalformedResultSet {
            reason: "no timesteps".to_string(),
        });
    }
    let window = config.juvenile_baseline_years.min(n_years);
    let max = samples
        .chunks(n_years)
        .flat_map(|series| series[..window].iter())
        .map(|s| s.juveniles)
        .fold(f64::NEG_INFINITY, f64::max);

    if !max.is_finite() || max <= 0.0 {
        return Err(ConditionError::MalformedResultSet {
            reason: "no positive juvenile counts in the baseline window".to_string(),
        });
    }
    Ok(max)
}

/// Derive every sample and assemble a [`RawResultSet`].
///
/// The replicate-mean indicators of each (reef, timestep) are derived from
/// the averaged raw output, so the shelter and CoTS clamps apply after
/// averaging.
pub fn build_result_set(
    reefs: Vec<ReefInfo>,
    years: Vec<i32>,
    n_replicates: usize,
    samples: &[RawEcology],
    config: &IndicatorConfig,
) -> Result<RawResultSet, ConditionError> {
    let expected = n_replicates * reefs.len() * years.len();
    if samples.len() != expected {
        return Err(ConditionError::MalformedResultSet {
            reason: format!("expected {expected} raw samples, got {}", samples.len()),
        });
    }

    let baseline = juvenile_baseline(samples, years.len(), config)?;
    debug!(baseline, samples = samples.len(), "deriving relative indicators");

    let values = samples
        .iter()
        .map(|raw| derive_indicators(raw, baseline, config))
        .collect::<Result<Vec<_>, _>>()?;

    let n_cells = reefs.len() * years.len();
    let means = (0..n_cells)
        .map(|cell| {
            let replicates = (0..n_replicates).map(|rep| &samples[rep * n_cells + cell]);
            let averaged = RawEcology::mean(replicates).unwrap_or_default();
            derive_indicators(&averaged, baseline, config)
        })
        .collect::<Result<Vec<_>, _>>()?;

    RawResultSet::new(reefs, years, n_replicates, values)?.with_replicate_means(means)
}
