/// Largest quantity deployed so far in one (replicate, cost stage).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningCostState {
    cumulative: u64,
}

impl RunningCostState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cumulative(&self) -> u64 {
        self.cumulative
    }

    /// Record this year's quantity and return the increment over the
    /// previous maximum (zero when not exceeding it).
    pub fn advance(&mut self, quantity: u64) -> u64 {
        let incremental = quantity.saturating_sub(self.cumulative);
        self.cumulative = self.cumulative.max(quantity);
        incremental
    }
}
