//! Shared config utilities for loading/saving JSON config files, and the
//! lamp's own configuration.
//!
//! Config is read once at startup. Anything missing, unparsable or invalid
//! falls back to built-in defaults so the main loop never sees a bad value.

use crate::display::ErrorBlink;
use crate::error::ConfigError;
use crate::led::BreathingWave;
use crate::personality::{DwellRange, DwellRanges, MoodWeights, PersonalityProfile};
use anyhow::Context;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "MOOD_LAMP_CONFIG";

/// Generic load for any Serde config type with a `Default` implementation.
/// Falls back to `T::default()` if the file is missing or unparsable.
pub fn load_json_config<T: DeserializeOwned + Default>(path: &Path, label: &str) -> T {
    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<T>(&content) {
            Ok(config) => {
                info!("[{}] Loaded config from {}", label, path.display());
                config
            }
            Err(e) => {
                warn!(
                    "[{}] Failed to parse config {}: {}, using defaults",
                    label,
                    path.display(),
                    e
                );
                T::default()
            }
        },
        Err(_) => {
            info!(
                "[{}] No config file at {}, using defaults",
                label,
                path.display()
            );
            T::default()
        }
    }
}

/// Generic save for any Serde config type.
pub fn save_json_config<T: Serialize>(path: &Path, config: &T, label: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write config file {}", path.display()))?;
    info!("[{}] Saved config to {}", label, path.display());
    Ok(())
}

/// Resolve the config path: `MOOD_LAMP_CONFIG` when set and non-empty,
/// otherwise `<config dir>/mood-lamp/config.json`.
pub fn resolve_config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mood-lamp")
        .join("config.json")
}

// ── Personality ────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightsConfig {
    pub default: u32,
    pub happy: u32,
    pub angry: u32,
    pub tired: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            default: 80,
            happy: 7,
            angry: 7,
            tired: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeConfig {
    pub min_ms: u32,
    pub max_ms: u32,
}

impl RangeConfig {
    fn to_range(&self) -> Result<DwellRange, ConfigError> {
        DwellRange::new(self.min_ms, self.max_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityConfig {
    #[serde(default)]
    pub weights: WeightsConfig,
    #[serde(default = "default_default_dwell")]
    pub default_dwell: RangeConfig,
    /// Dwell for every mood other than Default.
    #[serde(default = "default_burst_dwell")]
    pub burst_dwell: RangeConfig,
    /// Chance (0–100) that curiosity turns on at each mood change.
    #[serde(default = "default_curiosity_percent")]
    pub curiosity_percent: u8,
    #[serde(default)]
    pub baseline_curiosity: bool,
}

impl Default for PersonalityConfig {
    fn default() -> Self {
        Self {
            weights: WeightsConfig::default(),
            default_dwell: default_default_dwell(),
            burst_dwell: default_burst_dwell(),
            curiosity_percent: default_curiosity_percent(),
            baseline_curiosity: false,
        }
    }
}

fn default_default_dwell() -> RangeConfig {
    RangeConfig {
        min_ms: 8_000,
        max_ms: 20_000,
    }
}
fn default_burst_dwell() -> RangeConfig {
    RangeConfig {
        min_ms: 2_000,
        max_ms: 5_000,
    }
}
fn default_curiosity_percent() -> u8 {
    30
}

impl PersonalityConfig {
    pub fn to_profile(&self) -> Result<PersonalityProfile, ConfigError> {
        let w = &self.weights;
        let weights = MoodWeights::new(w.default, w.happy, w.angry, w.tired)?;
        let dwell = DwellRanges::new(self.default_dwell.to_range()?, self.burst_dwell.to_range()?)?;
        if self.curiosity_percent > 100 {
            return Err(ConfigError::PercentOutOfRange(self.curiosity_percent));
        }
        Ok(PersonalityProfile {
            weights,
            dwell,
            curiosity_percent: self.curiosity_percent,
            baseline_curiosity: self.baseline_curiosity,
        })
    }
}

// ── Breathing ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreathingConfig {
    pub period_ms: u32,
    /// Gaussian width as a fraction of the period. Smaller = sharper breath.
    pub width: f32,
    /// Peak position as a fraction of the period.
    pub center: f32,
    pub max_level: u8,
    /// Fraction of full brightness below which the LED is forced off.
    pub deadband: f32,
    /// Minimum milliseconds between LED refreshes.
    pub update_interval_ms: u32,
}

impl Default for BreathingConfig {
    fn default() -> Self {
        Self {
            period_ms: 5_000,
            width: 0.14,
            center: 0.5,
            max_level: 255,
            deadband: 0.004,
            update_interval_ms: 20,
        }
    }
}

impl BreathingConfig {
    pub fn to_wave(&self) -> Result<BreathingWave, ConfigError> {
        BreathingWave::new(
            self.period_ms,
            self.width,
            self.center,
            self.max_level,
            self.deadband,
        )
    }
}

// ── Eyes / Display ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EyesConfig {
    pub max_fps: u32,
    /// Idle blink period; 0 disables idle blinks.
    pub blink_interval_ms: u32,
}

impl Default for EyesConfig {
    fn default() -> Self {
        Self {
            max_fps: 50,
            blink_interval_ms: 4_000,
        }
    }
}

impl EyesConfig {
    pub fn frame_interval_ms(&self) -> u32 {
        1_000 / self.max_fps.max(1)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Bus addresses probed in order during bring-up.
    pub addresses: Vec<u8>,
    /// Address the headless stand-in answers on; `null` simulates a
    /// missing panel.
    pub headless_address: Option<u8>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            addresses: vec![0x3C, 0x3D],
            headless_address: Some(0x3C),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBlinkConfig {
    pub on_ms: u32,
    pub off_ms: u32,
}

impl Default for ErrorBlinkConfig {
    fn default() -> Self {
        let blink = ErrorBlink::default();
        Self {
            on_ms: blink.on_ms,
            off_ms: blink.off_ms,
        }
    }
}

impl ErrorBlinkConfig {
    pub fn to_blink(&self) -> ErrorBlink {
        ErrorBlink {
            on_ms: self.on_ms,
            off_ms: self.off_ms,
        }
    }
}

// ── Top-Level Config ───────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LampConfig {
    #[serde(default)]
    pub personality: PersonalityConfig,
    #[serde(default)]
    pub breathing: BreathingConfig,
    #[serde(default)]
    pub eyes: EyesConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub error_blink: ErrorBlinkConfig,
    /// Main loop pacing in milliseconds.
    #[serde(default = "default_loop_interval_ms")]
    pub loop_interval_ms: u64,
    /// Fixed RNG seed for reproducible runs; entropy when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl Default for LampConfig {
    fn default() -> Self {
        Self {
            personality: PersonalityConfig::default(),
            breathing: BreathingConfig::default(),
            eyes: EyesConfig::default(),
            display: DisplayConfig::default(),
            error_blink: ErrorBlinkConfig::default(),
            loop_interval_ms: default_loop_interval_ms(),
            rng_seed: None,
        }
    }
}

fn default_loop_interval_ms() -> u64 {
    5
}

impl LampConfig {
    /// Check every static invariant the runtime relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.personality.to_profile()?;
        self.breathing.to_wave()?;
        Ok(())
    }
}

/// Load and validate the lamp config. An invalid file is reported and
/// replaced by defaults.
pub fn load_config(path: &Path) -> LampConfig {
    let config: LampConfig = load_json_config(path, "Config");
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            warn!("[Config] Invalid config {}: {}, using defaults", path.display(), e);
            LampConfig::default()
        }
    }
}

/// Save the lamp config as pretty JSON.
pub fn save_config(path: &Path, config: &LampConfig) -> anyhow::Result<()> {
    save_json_config(path, config, "Config")
}
