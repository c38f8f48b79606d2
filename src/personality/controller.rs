//! Personality controller: holds a mood until its deadline, then re-rolls.

use super::curiosity::roll_curiosity;
use super::dwell::random_dwell;
use super::mood::{sample_mood, Mood};
use super::PersonalityProfile;
use crate::animation::AnimationSink;
use crate::hal::{deadline_reached, Millis, RandomSource};
use tracing::info;

/// The whole of the controller's state: in `mood` with `curious` until
/// `next_change_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PersonalityState {
    pub mood: Mood,
    pub curious: bool,
    pub next_change_at: Millis,
}

/// One transition, reported by [`PersonalityController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodChange {
    pub from: Mood,
    pub to: Mood,
    pub curious: bool,
    pub dwell_ms: Millis,
    pub next_change_at: Millis,
}

impl MoodChange {
    /// The sampler picked the mood already active.
    pub fn is_refresh(&self) -> bool {
        self.from == self.to
    }
}

pub struct PersonalityController<S> {
    sink: S,
    profile: PersonalityProfile,
    state: PersonalityState,
}

impl<S: AnimationSink> PersonalityController<S> {
    pub fn new(sink: S, profile: PersonalityProfile) -> Self {
        let state = PersonalityState {
            mood: Mood::Default,
            curious: profile.baseline_curiosity,
            next_change_at: 0,
        };
        Self {
            sink,
            profile,
            state,
        }
    }

    /// Enter the baseline state and schedule the first change.
    ///
    /// Sets Default mood with the baseline curiosity, pushes both to the sink
    /// and draws the first dwell from Default's range.
    pub fn begin(&mut self, now: Millis, rng: &mut impl RandomSource) {
        self.state.mood = Mood::Default;
        self.state.curious = self.profile.baseline_curiosity;
        self.apply();

        let dwell_ms = random_dwell(self.profile.dwell.default_range(), rng);
        self.state.next_change_at = now.wrapping_add(dwell_ms);
        info!(
            curious = self.state.curious,
            dwell_ms,
            "[Personality] started in default mood"
        );
    }

    /// Advance the state machine.
    ///
    /// Before the deadline this is a no-op: no state change, no sink call,
    /// no draws. At or past it, a new mood and curiosity are drawn and always
    /// pushed to the sink, even when the mood is unchanged, and a fresh
    /// deadline is scheduled from `now`.
    pub fn tick(&mut self, now: Millis, rng: &mut impl RandomSource) -> Option<MoodChange> {
        if !deadline_reached(now, self.state.next_change_at) {
            return None;
        }

        let from = self.state.mood;
        let mood = sample_mood(&self.profile.weights, rng);
        let curious = roll_curiosity(self.profile.curiosity_percent, rng);

        self.state.mood = mood;
        self.state.curious = curious;
        self.apply();

        let dwell_ms = random_dwell(self.profile.dwell.for_mood(mood), rng);
        self.state.next_change_at = now.wrapping_add(dwell_ms);

        let change = MoodChange {
            from,
            to: mood,
            curious,
            dwell_ms,
            next_change_at: self.state.next_change_at,
        };
        info!(
            from = %change.from,
            to = %change.to,
            curious,
            dwell_ms,
            "[Personality] mood change"
        );
        Some(change)
    }

    fn apply(&mut self) {
        self.sink.set_mood(self.state.mood);
        self.sink.set_curiosity(self.state.curious);
    }

    pub fn state(&self) -> PersonalityState {
        self.state
    }

    pub fn mood(&self) -> Mood {
        self.state.mood
    }

    pub fn is_curious(&self) -> bool {
        self.state.curious
    }

    pub fn next_change_at(&self) -> Millis {
        self.state.next_change_at
    }

    pub fn profile(&self) -> &PersonalityProfile {
        &self.profile
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
