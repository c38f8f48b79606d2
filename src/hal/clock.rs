//! Monotonic millisecond clocks.

use super::Millis;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

/// A monotonic millisecond counter that wraps at its integer width.
pub trait Clock {
    fn now_millis(&self) -> Millis;
}

/// Host clock: milliseconds since construction, truncated to `u32` so it
/// wraps the same way the device counter does (about every 49.7 days).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    started: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> Millis {
        self.started.elapsed().as_millis() as Millis
    }
}

/// A hand-driven clock. Clones share the same counter, so a test can hold
/// one handle while the sink under test holds another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Millis>>,
}

impl ManualClock {
    pub fn starting_at(now: Millis) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: Millis) {
        self.now.set(now);
    }

    /// Move forward by `ms`, wrapping like the hardware counter.
    pub fn advance(&self, ms: Millis) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> Millis {
        self.now.get()
    }
}
