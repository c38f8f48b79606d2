//! Breathing LED: the waveform and the output it drives.

pub mod breathing;
pub mod output;

pub use breathing::{brightness, BreathingWave};
pub use output::{LedOutput, LoggedLed};
