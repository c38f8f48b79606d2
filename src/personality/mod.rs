//! Personality: the timed mood state machine and its pure helpers.
//!
//! A mood is drawn from a weighted table, held for a randomized dwell, then
//! re-drawn. Curiosity is re-rolled alongside every mood change.

pub mod controller;
pub mod curiosity;
pub mod dwell;
pub mod mood;

#[cfg(test)]
mod tests;

pub use controller::{MoodChange, PersonalityController, PersonalityState};
pub use curiosity::roll_curiosity;
pub use dwell::{random_dwell, DwellRange, DwellRanges};
pub use mood::{mood_for_draw, sample_mood, Mood, MoodWeights};

/// Everything the controller needs to pick moods and dwell times.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityProfile {
    pub weights: MoodWeights,
    pub dwell: DwellRanges,
    /// Chance (0–100) that curiosity is on after a mood change.
    pub curiosity_percent: u8,
    /// Curiosity state applied by `begin()`.
    pub baseline_curiosity: bool,
}

impl Default for PersonalityProfile {
    fn default() -> Self {
        Self {
            weights: MoodWeights::default(),
            dwell: DwellRanges::default(),
            curiosity_percent: 30,
            baseline_curiosity: false,
        }
    }
}
