//! Compiled default values.

pub const DEFAULT_NSIMS: usize = 3;
pub const DEFAULT_N_DRAWS: usize = 4;
pub const DEFAULT_SEED: u64 = 20_240_601;
