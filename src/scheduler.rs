//! Cooperative scheduler: one non-blocking pass per loop iteration.
//!
//! Each pass advances the eye animation by a frame, ticks the personality,
//! and refreshes the breathing LED when its own interval has elapsed. The
//! scheduler owns every piece of mutable state, including the shared random
//! stream it lends to the personality.

use crate::animation::AnimationSink;
use crate::hal::{elapsed_since, Millis, RandomSource};
use crate::led::{brightness, BreathingWave, LedOutput};
use crate::personality::{MoodChange, PersonalityController};
use tracing::debug;

/// What happened during one [`Scheduler::poll`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollOutcome {
    pub mood_change: Option<MoodChange>,
    pub breath_level: Option<u8>,
}

pub struct Scheduler<S, L, R> {
    personality: PersonalityController<S>,
    led: L,
    rng: R,
    wave: BreathingWave,
    breath_interval_ms: Millis,
    last_breath_at: Millis,
}

impl<S, L, R> Scheduler<S, L, R>
where
    S: AnimationSink,
    L: LedOutput,
    R: RandomSource,
{
    pub fn new(
        personality: PersonalityController<S>,
        led: L,
        rng: R,
        wave: BreathingWave,
        breath_interval_ms: Millis,
    ) -> Self {
        Self {
            personality,
            led,
            rng,
            wave,
            breath_interval_ms,
            last_breath_at: 0,
        }
    }

    /// Start the personality and the breath timer at `now`.
    pub fn begin(&mut self, now: Millis) {
        self.personality.begin(now, &mut self.rng);
        self.last_breath_at = now;
    }

    pub fn poll(&mut self, now: Millis) -> PollOutcome {
        self.personality.sink_mut().update_frame();

        let mood_change = self.personality.tick(now, &mut self.rng);

        let breath_level = if elapsed_since(now, self.last_breath_at) >= self.breath_interval_ms {
            self.last_breath_at = now;
            let level = brightness(now, &self.wave);
            self.led.set_level(level);
            debug!(level, "[Breath] update");
            Some(level)
        } else {
            None
        };

        PollOutcome {
            mood_change,
            breath_level,
        }
    }

    pub fn personality(&self) -> &PersonalityController<S> {
        &self.personality
    }

    pub fn led(&self) -> &L {
        &self.led
    }

    pub fn last_breath_at(&self) -> Millis {
        self.last_breath_at
    }
}
