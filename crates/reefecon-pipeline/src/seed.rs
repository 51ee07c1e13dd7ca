//! Per-scenario seeds independent of scheduling order.

use reefecon_core::models::InterventionId;

/// Which random stream of a scenario a seed feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStream {
    Condition,
    Cost,
}

impl SeedStream {
    fn tag(self) -> &'static [u8] {
        match self {
            Self::Condition => b"condition",
            Self::Cost => b"cost",
        }
    }
}

/// First 8 bytes of blake3(base ‖ id ‖ stream), little-endian.
pub fn scenario_seed(base: u64, id: InterventionId, stream: SeedStream) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&base.to_le_bytes());
    hasher.update(&id.0.to_le_bytes());
    hasher.update(stream.tag());
    let hash = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
