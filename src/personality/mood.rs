//! Moods and the weighted sampler.

use crate::error::ConfigError;
use crate::hal::RandomSource;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Default,
    Happy,
    Angry,
    Tired,
}

impl Mood {
    /// Sampling order. The walk in [`mood_for_draw`] depends on it.
    pub const ALL: [Mood; 4] = [Mood::Default, Mood::Happy, Mood::Angry, Mood::Tired];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Default => "default",
            Mood::Happy => "happy",
            Mood::Angry => "angry",
            Mood::Tired => "tired",
        }
    }

    pub fn is_default(self) -> bool {
        self == Mood::Default
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Integer weight per mood. A constructed table always has a positive total
/// and a strictly dominant Default weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodWeights {
    default: u32,
    happy: u32,
    angry: u32,
    tired: u32,
    total: u32,
}

impl MoodWeights {
    pub fn new(default: u32, happy: u32, angry: u32, tired: u32) -> Result<Self, ConfigError> {
        let total = [default, happy, angry, tired]
            .iter()
            .try_fold(0u32, |acc, w| acc.checked_add(*w))
            .ok_or(ConfigError::WeightOverflow)?;
        if total == 0 {
            return Err(ConfigError::ZeroTotalWeight);
        }

        let other = happy.max(angry).max(tired);
        if default <= other {
            return Err(ConfigError::DefaultNotDominant { default, other });
        }

        Ok(Self {
            default,
            happy,
            angry,
            tired,
            total,
        })
    }

    pub fn weight(&self, mood: Mood) -> u32 {
        match mood {
            Mood::Default => self.default,
            Mood::Happy => self.happy,
            Mood::Angry => self.angry,
            Mood::Tired => self.tired,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    /// Long-run share of draws that land on `mood`.
    pub fn probability(&self, mood: Mood) -> f64 {
        self.weight(mood) as f64 / self.total as f64
    }
}

impl Default for MoodWeights {
    fn default() -> Self {
        Self {
            default: 80,
            happy: 7,
            angry: 7,
            tired: 6,
            total: 100,
        }
    }
}

/// Map a draw in `[0, total)` to its mood.
///
/// Walks [`Mood::ALL`] accumulating weights and returns the first mood whose
/// cumulative weight is strictly greater than `draw`, so each threshold value
/// belongs to the following bucket and zero-weight moods are never returned.
pub fn mood_for_draw(weights: &MoodWeights, draw: u32) -> Mood {
    let mut cumulative = 0u32;
    for mood in Mood::ALL {
        cumulative += weights.weight(mood);
        if draw < cumulative {
            return mood;
        }
    }
    // Out-of-range draws cannot come from `uniform(0, total)`.
    Mood::Default
}

/// Draw one mood with `P(mood) = weight(mood) / total`. Consumes one draw.
pub fn sample_mood(weights: &MoodWeights, rng: &mut impl RandomSource) -> Mood {
    let draw = rng.uniform(0, weights.total());
    mood_for_draw(weights, draw)
}
