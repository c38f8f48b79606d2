//! LED output capability.

use tracing::trace;

pub trait LedOutput {
    /// Write a brightness level, 0 = off.
    fn set_level(&mut self, level: u8);
}

impl<L: LedOutput + ?Sized> LedOutput for &mut L {
    fn set_level(&mut self, level: u8) {
        (**self).set_level(level)
    }
}

/// Headless LED: remembers the last level and traces changes.
#[derive(Debug, Default)]
pub struct LoggedLed {
    level: u8,
    writes: u64,
}

impl LoggedLed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl LedOutput for LoggedLed {
    fn set_level(&mut self, level: u8) {
        if level != self.level {
            trace!(level, "[LED] level");
        }
        self.level = level;
        self.writes += 1;
    }
}
