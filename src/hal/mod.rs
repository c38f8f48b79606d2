//! Hardware capabilities: the clock, randomness, and the time math that
//! everything else schedules against.

pub mod clock;
pub mod rng;

#[cfg(test)]
pub mod mock;

pub use clock::{Clock, ManualClock, SystemClock};
pub use rng::{RandomSource, SeededRandom};

/// Milliseconds on the device counter. Wraps at `u32::MAX`.
pub type Millis = u32;

/// Whether `deadline` has been reached at `now`.
///
/// The wrapping difference is read as signed, so a deadline set just before
/// the counter overflows is still detected once `now` has wrapped to a small
/// value. Valid while the two stamps are less than half the counter apart.
pub fn deadline_reached(now: Millis, deadline: Millis) -> bool {
    (now.wrapping_sub(deadline) as i32) >= 0
}

/// Milliseconds elapsed from `since` to `now`, tolerating one wraparound.
pub fn elapsed_since(now: Millis, since: Millis) -> Millis {
    now.wrapping_sub(since)
}
