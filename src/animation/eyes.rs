//! Headless eye renderer: frame-limited, traces what a display would draw.

use super::AnimationSink;
use crate::hal::{elapsed_since, Clock, Millis};
use crate::personality::Mood;
use tracing::{debug, info, trace};

pub struct LoggedEyes<C> {
    clock: C,
    frame_interval_ms: Millis,
    blink_interval_ms: Millis,
    mood: Mood,
    curious: bool,
    last_frame_at: Option<Millis>,
    last_blink_at: Millis,
    frames_rendered: u64,
    blinks: u64,
}

impl<C: Clock> LoggedEyes<C> {
    pub fn new(clock: C, frame_interval_ms: Millis, blink_interval_ms: Millis) -> Self {
        let now = clock.now_millis();
        Self {
            clock,
            frame_interval_ms,
            blink_interval_ms,
            mood: Mood::Default,
            curious: false,
            last_frame_at: None,
            last_blink_at: now,
            frames_rendered: 0,
            blinks: 0,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn is_curious(&self) -> bool {
        self.curious
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn blinks(&self) -> u64 {
        self.blinks
    }
}

impl<C: Clock> AnimationSink for LoggedEyes<C> {
    fn set_mood(&mut self, mood: Mood) {
        // Every mood refresh restarts the idle blink timer, even when the
        // mood itself is unchanged.
        self.last_blink_at = self.clock.now_millis();
        if mood != self.mood {
            info!(from = %self.mood, to = %mood, "[Eyes] mood");
        }
        self.mood = mood;
    }

    fn set_curiosity(&mut self, on: bool) {
        if on != self.curious {
            debug!(curious = on, "[Eyes] curiosity");
        }
        self.curious = on;
    }

    fn update_frame(&mut self) {
        let now = self.clock.now_millis();
        if let Some(last) = self.last_frame_at {
            if elapsed_since(now, last) < self.frame_interval_ms {
                return;
            }
        }
        self.last_frame_at = Some(now);
        self.frames_rendered += 1;

        if self.blink_interval_ms > 0
            && elapsed_since(now, self.last_blink_at) >= self.blink_interval_ms
        {
            self.last_blink_at = now;
            self.blinks += 1;
            debug!(mood = %self.mood, "[Eyes] idle blink");
        }

        trace!(
            frame = self.frames_rendered,
            mood = %self.mood,
            curious = self.curious,
            "[Eyes] frame"
        );
    }
}
