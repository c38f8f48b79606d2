pub mod animation;
pub mod config;
pub mod display;
pub mod error;
pub mod hal;
pub mod led;
pub mod personality;
pub mod scheduler;

use crate::animation::{AnimationSink, LoggedEyes};
use crate::config::LampConfig;
use crate::display::HeadlessDisplay;
use crate::hal::{Clock, RandomSource, SeededRandom, SystemClock};
use crate::led::{LedOutput, LoggedLed};
use crate::personality::PersonalityController;
use crate::scheduler::Scheduler;
use anyhow::Context;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber. `RUST_LOG` wins; `info` otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Drive the scheduler forever at `period`.
///
/// Starts the personality first, then polls once per interval tick with the
/// current clock reading. Each poll is non-blocking; the only await is the
/// pacing tick.
pub async fn run_loop<S, L, R, C>(scheduler: &mut Scheduler<S, L, R>, clock: &C, period: Duration)
where
    S: AnimationSink,
    L: LedOutput,
    R: RandomSource,
    C: Clock,
{
    scheduler.begin(clock.now_millis());

    let mut interval = tokio::time::interval(period.max(Duration::from_millis(1)));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        scheduler.poll(clock.now_millis());
    }
}

/// Bring the lamp up from config and run until Ctrl-C.
///
/// Display bring-up is the only fallible hardware step; if no panel answers
/// the LED blinks the error pattern forever.
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    let path = config::resolve_config_path();
    let config: LampConfig = config::load_config(&path);
    let clock = SystemClock::new();
    let mut led = LoggedLed::new();

    let mut display = HeadlessDisplay::new(config.display.headless_address);
    if let Err(e) = display::init_with_fallback(&mut display, &config.display.addresses) {
        error!("[Display] {}, halting", e);
        config.error_blink.to_blink().halt(&mut led, &clock);
    }

    let profile = config
        .personality
        .to_profile()
        .context("invalid personality config")?;
    let wave = config
        .breathing
        .to_wave()
        .context("invalid breathing config")?;

    let eyes = LoggedEyes::new(
        clock,
        config.eyes.frame_interval_ms(),
        config.eyes.blink_interval_ms,
    );
    let mut scheduler = Scheduler::new(
        PersonalityController::new(eyes, profile),
        led,
        SeededRandom::new(config.rng_seed),
        wave,
        config.breathing.update_interval_ms,
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;

    info!(
        loop_interval_ms = config.loop_interval_ms,
        seeded = config.rng_seed.is_some(),
        "[Lamp] running"
    );
    let period = Duration::from_millis(config.loop_interval_ms);
    runtime.block_on(async {
        tokio::select! {
            _ = run_loop(&mut scheduler, &clock, period) => {}
            res = tokio::signal::ctrl_c() => {
                res.context("failed to listen for Ctrl-C")?;
                info!("[Lamp] shutting down");
            }
        }
        Ok::<(), anyhow::Error>(())
    })?;

    let eyes = scheduler.personality().sink();
    info!(
        frames = eyes.frames_rendered(),
        blinks = eyes.blinks(),
        mood = %scheduler.personality().mood(),
        "[Lamp] stopped"
    );
    Ok(())
}
