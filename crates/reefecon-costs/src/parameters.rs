use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use reefecon_core::config::SampleRange;
use reefecon_core::traits::IParameterSampler;

/// Seeded uniform sampler over inclusive ranges.
///
/// Categorical parameters are drawn uniformly and rounded to the nearest
/// whole number inside the range. A categorical range holding no whole
/// number is rejected by `CostConfig::check_ranges`; if one reaches the
/// sampler anyway it is drawn as continuous.
pub struct UniformParameterSampler {
    rng: ChaCha8Rng,
}

impl UniformParameterSampler {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl IParameterSampler for UniformParameterSampler {
    fn sample(&mut self, range: &SampleRange, n: usize, categorical: bool) -> Vec<f64> {
        (0..n)
            .map(|_| {
                let x = if range.lower < range.upper {
                    self.rng.gen_range(range.lower..=range.upper)
                } else {
                    range.lower
                };
                if categorical && range.contains_integer() {
                    x.round().clamp(range.lower.ceil(), range.upper.floor())
                } else {
                    x
                }
            })
            .collect()
    }
}
