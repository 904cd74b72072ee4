//! Storage for both state machines.

use crate::config::EncoderConfig;
use crate::error::ConfigError;
use crate::quadrature::QuadratureDecoder;
use crate::switch::SwitchDebouncer;

/// Rotary and switch state of one encoder.
///
/// Constructible in a `const` context so it can live in a `static` and be
/// shared between an interrupt handler that drives a [`RotaryEncoder`] and
/// thread code that only reads:
///
/// ```
/// use rotary_encoder_driver::{EncoderState, SwitchState};
///
/// static KNOB: EncoderState = EncoderState::new();
///
/// // Anywhere, without locking:
/// let position = KNOB.rotary().position();
/// assert_eq!(KNOB.switch().classify(), SwitchState::Off);
/// # let _ = position;
/// ```
///
/// [`RotaryEncoder`]: crate::RotaryEncoder
#[derive(Default)]
pub struct EncoderState {
    rotary: QuadratureDecoder,
    switch: SwitchDebouncer,
}

impl EncoderState {
    /// Both state machines with default settings.
    pub const fn new() -> Self {
        Self {
            rotary: QuadratureDecoder::new(),
            switch: SwitchDebouncer::new(),
        }
    }

    /// Validate `config` and apply it to both state machines.
    ///
    /// Nothing is changed if validation fails.
    pub fn configure(&self, config: &EncoderConfig) -> Result<(), ConfigError> {
        if let Err(e) = config.validate() {
            #[cfg(feature = "defmt")]
            defmt::warn!("encoder: rejected configuration: {}", e);
            return Err(e);
        }
        self.rotary.apply_config(config)?;
        self.switch.apply_config(config);
        Ok(())
    }

    pub fn rotary(&self) -> &QuadratureDecoder {
        &self.rotary
    }

    pub fn switch(&self) -> &SwitchDebouncer {
        &self.switch
    }
}
