use crate::config::SampleRange;

/// Draws cost-model parameter values from a configured range.
pub trait IParameterSampler {
    /// Draw `n` values from `range`. Categorical parameters yield whole numbers.
    fn sample(&mut self, range: &SampleRange, n: usize, categorical: bool) -> Vec<f64>;
}
