//! Typed errors for the startup boundary. Nothing past startup can fail.

use thiserror::Error;

/// A configuration value that breaks one of the static invariants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("mood weights sum to zero")]
    ZeroTotalWeight,
    #[error("mood weights overflow a u32 total")]
    WeightOverflow,
    #[error("default mood weight {default} must exceed every other weight (largest other is {other})")]
    DefaultNotDominant { default: u32, other: u32 },
    #[error("dwell range {min_ms}..={max_ms} ms has max below min")]
    InvertedRange { min_ms: u32, max_ms: u32 },
    #[error("default dwell range must be strictly longer than the burst range")]
    DefaultRangeNotLonger,
    #[error("curiosity percent {0} is above 100")]
    PercentOutOfRange(u8),
    #[error("breathing width must be positive and finite, got {0}")]
    InvalidWidth(f32),
    #[error("breathing center must lie in 0.0..=1.0, got {0}")]
    InvalidCenter(f32),
    #[error("breathing deadband must lie in 0.0..1.0, got {0}")]
    InvalidDeadband(f32),
}

/// Display bring-up failures. Any of these is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DisplayError {
    #[error("no display bus addresses configured")]
    NoAddresses,
    #[error("display did not answer at {address:#04x}")]
    NotResponding { address: u8 },
    #[error("no display found at any of {tried:02x?}")]
    NotFound { tried: Vec<u8> },
}
