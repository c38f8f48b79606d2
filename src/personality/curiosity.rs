//! Curiosity roll.

use crate::hal::RandomSource;

/// True with `percent`% probability from a single draw in `[0, 100)`.
/// 0 is never curious, 100 (or more) always.
pub fn roll_curiosity(percent: u8, rng: &mut impl RandomSource) -> bool {
    let draw = rng.uniform(0, 100);
    draw < u32::from(percent.min(100))
}
