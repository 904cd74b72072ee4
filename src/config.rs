//! Tunable settings for the quadrature decoder and the switch debouncer.

use embassy_time::Duration;

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Rotary defaults
// ---------------------------------------------------------------------------

/// Lower bound of the position counter.
pub const DEFAULT_MIN_VALUE: i32 = -10;

/// Upper bound of the position counter.
pub const DEFAULT_MAX_VALUE: i32 = 10;

/// Clamp at the limits rather than rolling over.
pub const DEFAULT_WRAP_MODE: bool = false;

/// Clockwise rotation increments the position.
pub const DEFAULT_INVERT_DIRECTION: bool = false;

/// Two detents per count (full resynchronization between counts).
pub const DEFAULT_HIGH_SENSITIVITY: bool = false;

/// Position change per accepted transition.
pub const DEFAULT_STEP_SIZE: i32 = 1;

// ---------------------------------------------------------------------------
// Switch defaults
// ---------------------------------------------------------------------------

/// Switch reads low when pressed (pull-up wiring).
pub const DEFAULT_SWITCH_ACTIVE_HIGH: bool = false;

/// Quiet period guarding the release edge, in milliseconds.
pub const DEFAULT_DEBOUNCE_MS: u32 = 100;

/// Hold time after which a press counts as a long press, in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u32 = 700;

/// Complete driver configuration.
///
/// Every field has a default matching a typical EC11-style encoder with
/// the switch wired to ground through a pull-up. Apply with
/// [`EncoderState::configure`](crate::EncoderState::configure) or pass to
/// [`RotaryEncoder::new`](crate::RotaryEncoder::new).
///
/// # Example
///
/// ```
/// use embassy_time::Duration;
/// use rotary_encoder_driver::EncoderConfig;
///
/// let config = EncoderConfig {
///     min_value: 0,
///     max_value: 99,
///     wrap_mode: true,
///     long_press_threshold: Duration::from_millis(1000),
///     ..EncoderConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EncoderConfig {
    /// Lowest reachable position (inclusive).
    pub min_value: i32,
    /// Highest reachable position (inclusive).
    pub max_value: i32,
    /// Roll over to the opposite limit instead of stopping at it.
    pub wrap_mode: bool,
    /// Swap clockwise and counter-clockwise.
    pub invert_direction: bool,
    /// Count every detent instead of every second one.
    pub high_sensitivity: bool,
    /// Position change per accepted transition, at least 1.
    pub step_size: i32,
    /// `true` if the switch pin reads high while pressed.
    pub switch_active_high: bool,
    /// Minimum press length before a release is accepted.
    pub debounce_window: Duration,
    /// Hold time after which a press becomes a long press.
    pub long_press_threshold: Duration,
}

impl EncoderConfig {
    /// Default configuration, usable in `const` and `static` contexts.
    pub const fn new() -> Self {
        Self {
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            wrap_mode: DEFAULT_WRAP_MODE,
            invert_direction: DEFAULT_INVERT_DIRECTION,
            high_sensitivity: DEFAULT_HIGH_SENSITIVITY,
            step_size: DEFAULT_STEP_SIZE,
            switch_active_high: DEFAULT_SWITCH_ACTIVE_HIGH,
            debounce_window: Duration::from_millis(DEFAULT_DEBOUNCE_MS as u64),
            long_press_threshold: Duration::from_millis(DEFAULT_LONG_PRESS_MS as u64),
        }
    }

    /// Check the cross-field invariants.
    ///
    /// # Errors
    /// * [`ConfigError::InvalidLimits`] if `min_value > max_value`
    /// * [`ConfigError::InvalidStep`] if `step_size < 1`
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_limits(self.min_value, self.max_value)?;
        validate_step(self.step_size)
    }
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn validate_limits(min: i32, max: i32) -> Result<(), ConfigError> {
    if min > max {
        return Err(ConfigError::InvalidLimits);
    }
    Ok(())
}

pub(crate) fn validate_step(step: i32) -> Result<(), ConfigError> {
    if step < 1 {
        return Err(ConfigError::InvalidStep);
    }
    Ok(())
}

/// Convert a duration to the 32-bit millisecond domain of the clock,
/// saturating at `u32::MAX`.
pub(crate) fn duration_to_ms(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
