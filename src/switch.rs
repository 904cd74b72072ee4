//! Push-switch debouncing and long-press detection.
//!
//! A press is accepted on the first sample that reads pressed. Only the
//! release is debounced: a released sample is ignored until the press has
//! lasted longer than the debounce window, and the first released sample
//! after that commits it. Bounce during contact closure therefore re-enters
//! the "already pressed" path and is harmless.
//!
//! The window is assumed to be shorter than the time between two
//! deliberate presses; a second press inside the window merges with the
//! first.

use core::sync::atomic::{AtomicBool, AtomicU32, Ordering};

use embassy_time::Duration;

use crate::clock::elapsed_ms;
use crate::config::{self, duration_to_ms, EncoderConfig};

/// Debounced classification of the switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SwitchState {
    /// Released.
    Off,
    /// Pressed for no longer than the long-press threshold.
    On,
    /// Held beyond the long-press threshold.
    LongPress,
}

/// Time-based switch debouncer.
///
/// Like [`QuadratureDecoder`](crate::QuadratureDecoder), every field is an
/// atomic cell. [`advance`](Self::advance) is the only writer of the press
/// state; the setters are the only writers of the configuration.
pub struct SwitchDebouncer {
    pressed: AtomicBool,
    long_press: AtomicBool,
    press_start: AtomicU32,

    invert_logic: AtomicBool,
    debounce_ms: AtomicU32,
    long_press_ms: AtomicU32,
}

impl Default for SwitchDebouncer {
    fn default() -> Self {
        Self::new()
    }
}

impl SwitchDebouncer {
    /// Released switch with default settings (active-low wiring).
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
            long_press: AtomicBool::new(false),
            press_start: AtomicU32::new(0),
            invert_logic: AtomicBool::new(!config::DEFAULT_SWITCH_ACTIVE_HIGH),
            debounce_ms: AtomicU32::new(config::DEFAULT_DEBOUNCE_MS),
            long_press_ms: AtomicU32::new(config::DEFAULT_LONG_PRESS_MS),
        }
    }

    /// Apply the switch part of `config`.
    pub fn apply_config(&self, config: &EncoderConfig) {
        self.set_switch_logic(config.switch_active_high);
        self.set_debounce_window(config.debounce_window);
        self.set_long_press_threshold(config.long_press_threshold);
    }

    /// Feed one raw sample of the switch pin taken at `now` (milliseconds).
    pub fn advance(&self, raw_level: bool, now: u32) {
        let pressed_level = raw_level ^ self.invert_logic.load(Ordering::Relaxed);

        if !self.pressed.load(Ordering::Acquire) {
            if pressed_level {
                self.commit_press(now);
            }
            return;
        }

        let held = elapsed_ms(now, self.press_start.load(Ordering::Relaxed));
        let window = self.debounce_ms.load(Ordering::Relaxed);

        if held > self.long_press_ms.load(Ordering::Relaxed)
            && !self.long_press.load(Ordering::Relaxed)
        {
            self.long_press.store(true, Ordering::Release);
            #[cfg(feature = "defmt")]
            defmt::trace!("switch: long press after {} ms", held);
        }

        if !pressed_level && held > window {
            self.commit_release(held);
        }
    }

    fn commit_press(&self, now: u32) {
        self.long_press.store(false, Ordering::Relaxed);
        self.press_start.store(now, Ordering::Relaxed);
        // Publishes press_start.
        self.pressed.store(true, Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::trace!("switch: pressed at {}", now);
    }

    fn commit_release(&self, _held: u32) {
        // Long press is cleared first so it is never observed without a press.
        self.long_press.store(false, Ordering::Release);
        self.pressed.store(false, Ordering::Release);
        self.press_start.store(0, Ordering::Relaxed);

        #[cfg(feature = "defmt")]
        defmt::trace!("switch: released after {} ms", _held);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// `true` while the switch is considered pressed.
    pub fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Acquire)
    }

    /// `true` while the current press exceeds the long-press threshold.
    pub fn is_long_press(&self) -> bool {
        self.long_press.load(Ordering::Acquire)
    }

    /// Off, On or LongPress. LongPress takes priority over On.
    pub fn classify(&self) -> SwitchState {
        if self.is_long_press() {
            SwitchState::LongPress
        } else if self.is_pressed() {
            SwitchState::On
        } else {
            SwitchState::Off
        }
    }

    /// Timestamp of the current press, or `None` when released.
    pub fn press_start(&self) -> Option<u32> {
        if self.is_pressed() {
            Some(self.press_start.load(Ordering::Relaxed))
        } else {
            None
        }
    }

    /// How long the switch has been held at `now`; zero when released.
    pub fn pressed_duration(&self, now: u32) -> Duration {
        match self.press_start() {
            Some(start) => Duration::from_millis(u64::from(elapsed_ms(now, start))),
            None => Duration::from_ticks(0),
        }
    }

    /// `true` if a high pin level means pressed.
    pub fn is_active_high(&self) -> bool {
        !self.invert_logic.load(Ordering::Relaxed)
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms.load(Ordering::Relaxed)))
    }

    pub fn long_press_threshold(&self) -> Duration {
        Duration::from_millis(u64::from(self.long_press_ms.load(Ordering::Relaxed)))
    }

    // -----------------------------------------------------------------------
    // Configuration
    // -----------------------------------------------------------------------

    /// Wiring polarity: `true` if the pin reads high while pressed.
    pub fn set_switch_logic(&self, active_high: bool) {
        self.invert_logic.store(!active_high, Ordering::Relaxed);
    }

    /// Minimum press length before a release is accepted. Saturates at
    /// `u32::MAX` ms.
    pub fn set_debounce_window(&self, window: Duration) {
        self.debounce_ms
            .store(duration_to_ms(window), Ordering::Relaxed);
    }

    /// Hold time after which a press is reported as [`SwitchState::LongPress`].
    pub fn set_long_press_threshold(&self, threshold: Duration) {
        self.long_press_ms
            .store(duration_to_ms(threshold), Ordering::Relaxed);
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
