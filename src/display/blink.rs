//! Fatal error blink: the visible signal that bring-up failed.

use crate::hal::{elapsed_since, Clock, Millis};
use crate::led::LedOutput;
use std::time::Duration;

const HALT_POLL_MS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorBlink {
    pub on_ms: Millis,
    pub off_ms: Millis,
}

impl Default for ErrorBlink {
    fn default() -> Self {
        Self {
            on_ms: 200,
            off_ms: 200,
        }
    }
}

impl ErrorBlink {
    /// Whether the LED is lit `elapsed_ms` into the pattern. Starts lit.
    pub fn is_lit(&self, elapsed_ms: Millis) -> bool {
        let cycle = self.on_ms.saturating_add(self.off_ms);
        if cycle == 0 {
            return true;
        }
        elapsed_ms % cycle < self.on_ms
    }

    /// Blink forever. No retries, no way out.
    pub fn halt<L: LedOutput, C: Clock>(&self, led: &mut L, clock: &C) -> ! {
        let started = clock.now_millis();
        let mut lit = None;
        loop {
            let now_lit = self.is_lit(elapsed_since(clock.now_millis(), started));
            if lit != Some(now_lit) {
                led.set_level(if now_lit { u8::MAX } else { 0 });
                lit = Some(now_lit);
            }
            std::thread::sleep(Duration::from_millis(HALT_POLL_MS));
        }
    }
}
