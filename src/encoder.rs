//! Pin-level interface for a rotary encoder with push switch.
//!
//! [`RotaryEncoder`] owns the three input pins and the clock, samples them
//! on every tick and feeds the levels into the [`EncoderState`] it was
//! given. The state itself is borrowed, so it can be a `static` read from
//! elsewhere while the encoder is driven from an interrupt handler.

use embassy_time::Duration;
use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::config::EncoderConfig;
use crate::error::EncoderError;
use crate::quadrature::Direction;
use crate::state::EncoderState;
use crate::switch::SwitchState;

/// Pin that can enable its internal pull-up resistor.
///
/// `embedded-hal` has no pin-mode API, so board code implements this for
/// its concrete pin type (for example by calling `set_pull(Pull::Up)` on an
/// Embassy `Flex` pin).
pub trait PullUp {
    type Error;

    fn enable_pull_up(&mut self) -> Result<(), Self::Error>;
}

/// Mechanical rotary encoder with push switch on three digital inputs.
///
/// # Example
///
/// ```no_run
/// use rotary_encoder_driver::{EmbassyClock, EncoderConfig, EncoderState, RotaryEncoder};
///
/// static KNOB: EncoderState = EncoderState::new();
///
/// # fn demo<P: embedded_hal::digital::InputPin>(clk: P, dt: P, sw: P) -> Result<(), rotary_encoder_driver::EncoderError<P::Error>> {
/// let mut encoder = RotaryEncoder::new(clk, dt, sw, EmbassyClock, &KNOB, &EncoderConfig::default())?;
///
/// // From a polling loop or a GPIO interrupt:
/// encoder.update_all()?;
///
/// let position = KNOB.rotary().position();
/// # let _ = position;
/// # Ok(())
/// # }
/// ```
pub struct RotaryEncoder<'s, A, B, S, C> {
    pin_a: A,
    pin_b: B,
    pin_switch: S,
    clock: C,
    state: &'s EncoderState,
}

impl<'s, A, B, S, C, E> RotaryEncoder<'s, A, B, S, C>
where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
    S: InputPin<Error = E>,
    C: Clock,
{
    /// Create the driver, apply `config` to `state` and seed phase A.
    ///
    /// # Arguments
    /// * `pin_a` — phase A (CLK)
    /// * `pin_b` — phase B (DT)
    /// * `pin_switch` — push switch (SW)
    /// * `clock` — millisecond time source for the switch
    /// * `state` — storage for the decoded state
    /// * `config` — initial settings
    ///
    /// # Errors
    /// * [`EncoderError::Config`] if `config` is invalid
    /// * [`EncoderError::Pin`] if phase A cannot be read
    pub fn new(
        pin_a: A,
        pin_b: B,
        pin_switch: S,
        clock: C,
        state: &'s EncoderState,
        config: &EncoderConfig,
    ) -> Result<Self, EncoderError<E>> {
        state.configure(config).map_err(EncoderError::Config)?;

        let mut encoder = Self {
            pin_a,
            pin_b,
            pin_switch,
            clock,
            state,
        };
        encoder.resync()?;
        Ok(encoder)
    }

    /// Re-seed phase A from the pin and drop the phase B reference.
    ///
    /// The next A edge only re-establishes the reference pair.
    pub fn resync(&mut self) -> Result<(), EncoderError<E>> {
        let a = self.pin_a.is_high()?;
        self.state.rotary().seed(a);
        Ok(())
    }

    /// Give back the pins and the clock.
    pub fn release(self) -> (A, B, S, C) {
        (self.pin_a, self.pin_b, self.pin_switch, self.clock)
    }

    /// The state this driver writes to.
    pub fn state(&self) -> &'s EncoderState {
        self.state
    }

    // -----------------------------------------------------------------------
    // Ticks
    // -----------------------------------------------------------------------

    /// Sample both phase lines and advance the quadrature decoder.
    pub fn update_rotary(&mut self) -> Result<(), EncoderError<E>> {
        let a = self.pin_a.is_high()?;
        let b = self.pin_b.is_high()?;
        self.state.rotary().advance(a, b);
        Ok(())
    }

    /// Sample the switch and advance the debouncer.
    pub fn update_switch(&mut self) -> Result<(), EncoderError<E>> {
        let level = self.pin_switch.is_high()?;
        let now = self.clock.now_ms();
        self.state.switch().advance(level, now);
        Ok(())
    }

    /// [`update_rotary`](Self::update_rotary) then
    /// [`update_switch`](Self::update_switch).
    pub fn update_all(&mut self) -> Result<(), EncoderError<E>> {
        self.update_rotary()?;
        self.update_switch()
    }

    // -----------------------------------------------------------------------
    // Rotary
    // -----------------------------------------------------------------------

    pub fn position(&self) -> i32 {
        self.state.rotary().position()
    }

    pub fn direction(&self) -> Direction {
        self.state.rotary().direction()
    }

    /// Force the position; the direction becomes [`Direction::NotMoved`].
    pub fn set_position(&mut self, position: i32) -> Result<(), EncoderError<E>> {
        self.state
            .rotary()
            .set_position(position)
            .map_err(EncoderError::Config)
    }

    /// Set limits and boundary policy (`wrap = true` rolls over).
    pub fn set_limits(&mut self, min: i32, max: i32, wrap: bool) -> Result<(), EncoderError<E>> {
        self.state
            .rotary()
            .set_limits(min, max, wrap)
            .map_err(EncoderError::Config)
    }

    pub fn set_min_value(&mut self, min: i32) -> Result<(), EncoderError<E>> {
        self.state
            .rotary()
            .set_min_value(min)
            .map_err(EncoderError::Config)
    }

    pub fn set_max_value(&mut self, max: i32) -> Result<(), EncoderError<E>> {
        self.state
            .rotary()
            .set_max_value(max)
            .map_err(EncoderError::Config)
    }

    pub fn set_wrap_mode(&mut self, wrap: bool) {
        self.state.rotary().set_wrap_mode(wrap);
    }

    pub fn set_direction_inverted(&mut self, inverted: bool) {
        self.state.rotary().set_direction_inverted(inverted);
    }

    pub fn set_sensitivity(&mut self, high: bool) {
        self.state.rotary().set_sensitivity(high);
    }

    pub fn set_step(&mut self, step: i32) -> Result<(), EncoderError<E>> {
        self.state.rotary().set_step(step).map_err(EncoderError::Config)
    }

    // -----------------------------------------------------------------------
    // Switch
    // -----------------------------------------------------------------------

    pub fn switch_state(&self) -> SwitchState {
        self.state.switch().classify()
    }

    pub fn is_pressed(&self) -> bool {
        self.state.switch().is_pressed()
    }

    /// How long the switch has been held, measured against the clock now.
    pub fn pressed_duration(&self) -> Duration {
        self.state.switch().pressed_duration(self.clock.now_ms())
    }

    /// `true` if the switch pin reads high while pressed.
    pub fn set_switch_logic(&mut self, active_high: bool) {
        self.state.switch().set_switch_logic(active_high);
    }

    pub fn set_debounce_window(&mut self, window: Duration) {
        self.state.switch().set_debounce_window(window);
    }

    pub fn set_long_press_threshold(&mut self, threshold: Duration) {
        self.state.switch().set_long_press_threshold(threshold);
    }
}

impl<A, B, S, C> RotaryEncoder<'_, A, B, S, C> {
    pub(crate) fn pin_a_mut(&mut self) -> &mut A {
        &mut self.pin_a
    }

    pub(crate) fn pin_switch_mut(&mut self) -> &mut S {
        &mut self.pin_switch
    }
}

// ---------------------------------------------------------------------------
// Pull-up control
// ---------------------------------------------------------------------------

impl<'s, A, B, S, C, E> RotaryEncoder<'s, A, B, S, C>
where
    A: InputPin<Error = E> + PullUp<Error = E>,
    B: InputPin<Error = E> + PullUp<Error = E>,
    S: InputPin<Error = E>,
    C: Clock,
{
    /// Enable the pull-ups on both phase lines and resynchronize, since the
    /// idle levels may have changed.
    pub fn enable_pullups_rotary(&mut self) -> Result<(), EncoderError<E>> {
        self.pin_a.enable_pull_up()?;
        self.pin_b.enable_pull_up()?;
        self.resync()
    }
}

impl<'s, A, B, S, C, E> RotaryEncoder<'s, A, B, S, C>
where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
    S: InputPin<Error = E> + PullUp<Error = E>,
    C: Clock,
{
    /// Enable the switch pull-up. A pulled-up switch reads low when pressed,
    /// so the switch logic becomes active-low.
    pub fn enable_pullup_switch(&mut self) -> Result<(), EncoderError<E>> {
        self.pin_switch.enable_pull_up()?;
        self.state.switch().set_switch_logic(false);
        Ok(())
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
