//! Monotonic millisecond time source.
//!
//! Timestamps are 32-bit and wrap after roughly 49.7 days. All elapsed-time
//! arithmetic in this crate uses [`elapsed_ms`], so comparisons stay
//! correct across the wrap as long as a single interval is shorter than the
//! full counter range.

use embassy_time::Instant;

/// Source of monotonic millisecond timestamps.
pub trait Clock {
    /// Current time in milliseconds. May wrap at `u32::MAX`.
    fn now_ms(&self) -> u32;
}

/// [`Clock`] backed by the Embassy time driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncation is the wrap.
        Instant::now().as_millis() as u32
    }
}

impl<F> Clock for F
where
    F: Fn() -> u32,
{
    fn now_ms(&self) -> u32 {
        self()
    }
}

/// Milliseconds from `since` to `now`, tolerant of one counter wrap.
#[inline]
pub(crate) fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
