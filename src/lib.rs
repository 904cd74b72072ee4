//! Driver for mechanical rotary encoders with a built-in push switch.
//!
//! Decodes the two quadrature phase lines into a bounded or wrapping
//! position counter and debounces the switch, classifying sustained presses
//! as long presses. Works with any `embedded-hal` 1.0 input pins, from a
//! polling loop, a GPIO interrupt handler, or an Embassy task.
//!
//! # Architecture
//!
//! - **[`QuadratureDecoder`]** — edge-triggered, bounce-tolerant decoding
//!   and the position counter with clamp or wrap boundaries.
//! - **[`SwitchDebouncer`]** — immediate press detection, debounced release
//!   and long-press classification.
//! - **[`EncoderState`]** — both state machines in atomic cells, so the
//!   block can be a `static` shared between interrupt and thread context.
//! - **[`RotaryEncoder`]** (public) — owns the pins and the [`Clock`] and
//!   feeds samples into an `EncoderState`.
//!
//! # Quick start
//!
//! ```ignore
//! use rotary_encoder_driver::{EmbassyClock, EncoderConfig, EncoderState, RotaryEncoder};
//!
//! static KNOB: EncoderState = EncoderState::new();
//!
//! let config = EncoderConfig { min_value: 0, max_value: 127, ..EncoderConfig::default() };
//! let mut encoder = RotaryEncoder::new(clk, dt, sw, EmbassyClock, &KNOB, &config)?;
//!
//! loop {
//!     encoder.update_all()?;
//!     let position = KNOB.rotary().position();
//!     let switch = KNOB.switch().classify();
//! }
//! ```
//!
//! # Features
//!
//! - **`defmt`** — [`defmt::Format`] implementations on public types and
//!   trace logging of decoded events.

#![no_std]

pub use clock::{Clock, EmbassyClock};
pub use config::{
    EncoderConfig, DEFAULT_DEBOUNCE_MS, DEFAULT_HIGH_SENSITIVITY, DEFAULT_INVERT_DIRECTION,
    DEFAULT_LONG_PRESS_MS, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, DEFAULT_STEP_SIZE,
    DEFAULT_SWITCH_ACTIVE_HIGH, DEFAULT_WRAP_MODE,
};
pub use encoder::{PullUp, RotaryEncoder};
pub use error::{ConfigError, EncoderError};
pub use quadrature::{Direction, PhaseLevel, QuadratureDecoder};
pub use state::EncoderState;
pub use switch::{SwitchDebouncer, SwitchState};

mod clock;
mod config;
mod encoder;
mod error;
mod quadrature;
mod state;
mod switch;
mod wait;
