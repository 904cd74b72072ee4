//! Error types for the encoder driver.

use core::fmt;

/// A configuration call was rejected; the previous settings remain in force.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// `min_value` is greater than `max_value`.
    InvalidLimits,
    /// Rotational step is zero or negative.
    InvalidStep,
    /// Requested position lies outside `[min_value, max_value]`.
    PositionOutOfRange,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::InvalidLimits => write!(f, "Minimum value exceeds maximum value"),
            ConfigError::InvalidStep => write!(f, "Rotational step must be at least 1"),
            ConfigError::PositionOutOfRange => write!(f, "Position outside configured limits"),
        }
    }
}

/// Errors that can occur while driving the encoder.
#[derive(Debug)]
pub enum EncoderError<E> {
    /// Underlying digital pin error.
    Pin(E),

    /// Rejected configuration.
    Config(ConfigError),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for EncoderError<E> {
    fn from(error: E) -> Self {
        EncoderError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for EncoderError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EncoderError::Pin(e) => write!(f, "Pin error: {:?}", e),
            EncoderError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for EncoderError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            EncoderError::Pin(e) => defmt::write!(f, "Pin error: {}", e),
            EncoderError::Config(e) => defmt::write!(f, "Configuration error: {}", e),
        }
    }
}
