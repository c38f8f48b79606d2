//! Dwell ranges and the duration randomizer.

use super::mood::Mood;
use crate::error::ConfigError;
use crate::hal::{Millis, RandomSource};

/// Inclusive `min_ms..=max_ms` dwell window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellRange {
    min_ms: Millis,
    max_ms: Millis,
}

impl DwellRange {
    pub fn new(min_ms: Millis, max_ms: Millis) -> Result<Self, ConfigError> {
        if max_ms < min_ms {
            return Err(ConfigError::InvertedRange { min_ms, max_ms });
        }
        Ok(Self { min_ms, max_ms })
    }

    /// A range that always yields `ms`.
    pub const fn fixed(ms: Millis) -> Self {
        Self {
            min_ms: ms,
            max_ms: ms,
        }
    }

    pub fn min_ms(&self) -> Millis {
        self.min_ms
    }

    pub fn max_ms(&self) -> Millis {
        self.max_ms
    }
}

/// Long idle dwell for Default, short "burst" dwell for every other mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DwellRanges {
    default: DwellRange,
    burst: DwellRange,
}

impl DwellRanges {
    /// Default's range must be strictly longer at both ends.
    pub fn new(default: DwellRange, burst: DwellRange) -> Result<Self, ConfigError> {
        if default.min_ms <= burst.min_ms || default.max_ms <= burst.max_ms {
            return Err(ConfigError::DefaultRangeNotLonger);
        }
        Ok(Self { default, burst })
    }

    pub fn for_mood(&self, mood: Mood) -> DwellRange {
        if mood.is_default() {
            self.default
        } else {
            self.burst
        }
    }

    pub fn default_range(&self) -> DwellRange {
        self.default
    }

    pub fn burst_range(&self) -> DwellRange {
        self.burst
    }
}

impl Default for DwellRanges {
    fn default() -> Self {
        Self {
            default: DwellRange {
                min_ms: 8_000,
                max_ms: 20_000,
            },
            burst: DwellRange {
                min_ms: 2_000,
                max_ms: 5_000,
            },
        }
    }
}

/// `min + uniform(0, max - min + 1)`.
///
/// A single-value range returns `min` without drawing.
pub fn random_dwell(range: DwellRange, rng: &mut impl RandomSource) -> Millis {
    let span = range.max_ms - range.min_ms;
    if span == 0 {
        return range.min_ms;
    }
    match span.checked_add(1) {
        Some(width) => range.min_ms + rng.uniform(0, width),
        // 0..=u32::MAX; the top value is unreachable through a u32 bound.
        None => rng.uniform(0, u32::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::mock::ScriptedRandom;
    use crate::hal::SeededRandom;

    #[test]
    fn fixed_range_ignores_rng() {
        let mut rng = ScriptedRandom::new(&[]);
        assert_eq!(random_dwell(DwellRange::fixed(1500), &mut rng), 1500);
        assert!(rng.calls.is_empty(), "fixed range should not draw");
    }

    #[test]
    fn range_is_inclusive_at_both_ends() {
        let range = DwellRange::new(100, 110).unwrap();
        let mut rng = ScriptedRandom::new(&[0, 10]);
        assert_eq!(random_dwell(range, &mut rng), 100);
        assert_eq!(random_dwell(range, &mut rng), 110);
        assert_eq!(rng.calls, vec![(0, 11), (0, 11)]);
    }

    #[test]
    fn full_width_range_does_not_overflow() {
        let range = DwellRange::new(0, u32::MAX).unwrap();
        let mut rng = ScriptedRandom::new(&[u32::MAX - 1]);
        assert_eq!(random_dwell(range, &mut rng), u32::MAX - 1);
    }

    #[test]
    fn seeded_draws_stay_within_range() {
        let range = DwellRange::new(2_000, 5_000).unwrap();
        let mut rng = SeededRandom::from_seed(3);
        for _ in 0..1000 {
            let d = random_dwell(range, &mut rng);
            assert!((2_000..=5_000).contains(&d), "dwell {} out of range", d);
        }
    }

    #[test]
    fn rejects_inverted_range() {
        assert_eq!(
            DwellRange::new(10, 5),
            Err(ConfigError::InvertedRange {
                min_ms: 10,
                max_ms: 5
            })
        );
    }

    #[test]
    fn default_range_must_be_longer() {
        let short = DwellRange::new(1_000, 2_000).unwrap();
        let long = DwellRange::new(5_000, 9_000).unwrap();
        assert!(DwellRanges::new(long, short).is_ok());
        assert_eq!(
            DwellRanges::new(short, long),
            Err(ConfigError::DefaultRangeNotLonger)
        );
        assert_eq!(
            DwellRanges::new(short, short),
            Err(ConfigError::DefaultRangeNotLonger)
        );
    }

    #[test]
    fn ranges_pick_by_mood_class() {
        let ranges = DwellRanges::default();
        assert_eq!(ranges.for_mood(Mood::Default), ranges.default_range());
        for mood in [Mood::Happy, Mood::Angry, Mood::Tired] {
            assert_eq!(ranges.for_mood(mood), ranges.burst_range());
        }
    }
}
