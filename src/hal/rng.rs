//! The shared pseudo-random stream.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A uniform integer source. One stream is shared by every consumer, so the
/// order of draws decides the exact sequence but not correctness.
pub trait RandomSource {
    /// Uniform draw in `[low, high)`. Must accept ranges as small as `[0, 1)`.
    fn uniform(&mut self, low: u32, high: u32) -> u32;
}

/// `StdRng`-backed source, optionally seeded for reproducible runs.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        // An empty range has nothing to draw from; `gen_range` would panic.
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..high)
    }
}
