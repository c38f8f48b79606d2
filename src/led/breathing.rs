//! Gaussian "breathing" waveform.
//!
//! Brightness follows `exp(-((x - center) / width)^2 / 2)` over the phase
//! `x = (t mod period) / period`. `center` places the peak within the period
//! (0.5 gives a symmetric inhale/exhale) and `width` sets how sharp the bump is.

use crate::error::ConfigError;
use crate::hal::Millis;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreathingWave {
    period_ms: Millis,
    width: f32,
    center: f32,
    max_level: u8,
    deadband: f32,
}

impl BreathingWave {
    pub fn new(
        period_ms: Millis,
        width: f32,
        center: f32,
        max_level: u8,
        deadband: f32,
    ) -> Result<Self, ConfigError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::InvalidWidth(width));
        }
        if !(0.0..=1.0).contains(&center) {
            return Err(ConfigError::InvalidCenter(center));
        }
        if !(0.0..1.0).contains(&deadband) {
            return Err(ConfigError::InvalidDeadband(deadband));
        }
        Ok(Self {
            period_ms,
            width,
            center,
            max_level,
            deadband,
        })
    }

    pub fn period_ms(&self) -> Millis {
        self.period_ms
    }

    pub fn center(&self) -> f32 {
        self.center
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }
}

impl Default for BreathingWave {
    fn default() -> Self {
        Self {
            period_ms: 5_000,
            width: 0.14,
            center: 0.5,
            max_level: u8::MAX,
            deadband: 0.004,
        }
    }
}

/// Brightness level at time `t_ms`.
///
/// A zero period collapses the domain to the single phase `x = 0`. Curve
/// values below the deadband fraction snap to exactly 0 so the LED goes fully
/// dark between breaths; the result never exceeds `max_level`.
pub fn brightness(t_ms: Millis, wave: &BreathingWave) -> u8 {
    let x = if wave.period_ms == 0 {
        0.0
    } else {
        (t_ms % wave.period_ms) as f32 / wave.period_ms as f32
    };

    let z = (x - wave.center) / wave.width;
    let y = (-(z * z) / 2.0).exp();
    if y < wave.deadband {
        return 0;
    }

    let max = f32::from(wave.max_level);
    (y * max).round().min(max) as u8
}
