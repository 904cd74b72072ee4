//! Async entry points for Embassy firmware.
//!
//! Instead of binding a GPIO interrupt by hand, a task can await pin edges
//! through [`embedded_hal_async::digital::Wait`] or tick the encoder on a
//! fixed period. Long-press detection needs ticks while the switch is held,
//! so a switch driven only by edges never reports
//! [`SwitchState::LongPress`] until its next edge; use [`RotaryEncoder::poll`]
//! when that matters.

use core::convert::Infallible;

use embassy_time::{Duration, Ticker};
use embedded_hal::digital::InputPin;
use embedded_hal_async::digital::Wait;

use crate::clock::Clock;
use crate::encoder::RotaryEncoder;
use crate::error::EncoderError;
use crate::quadrature::Direction;
use crate::switch::SwitchState;

impl<'s, A, B, S, C, E> RotaryEncoder<'s, A, B, S, C>
where
    A: InputPin<Error = E>,
    B: InputPin<Error = E>,
    S: InputPin<Error = E>,
    C: Clock,
{
    /// Wait for any edge on phase A, then run
    /// [`update_rotary`](Self::update_rotary).
    ///
    /// Returns the direction after the update. A resynchronizing edge or a
    /// bounce leaves the previous direction in place; compare
    /// [`position`](Self::position) before and after to detect a move.
    ///
    /// # Example
    /// ```ignore
    /// loop {
    ///     let before = encoder.position();
    ///     let direction = encoder.wait_for_rotation().await?;
    ///     if encoder.position() != before {
    ///         info!("{} -> {}", direction, encoder.position());
    ///     }
    /// }
    /// ```
    pub async fn wait_for_rotation(&mut self) -> Result<Direction, EncoderError<E>>
    where
        A: Wait,
    {
        self.pin_a_mut().wait_for_any_edge().await?;
        self.update_rotary()?;
        Ok(self.direction())
    }

    /// Wait for any edge on the switch pin, then run
    /// [`update_switch`](Self::update_switch).
    pub async fn wait_for_switch_edge(&mut self) -> Result<SwitchState, EncoderError<E>>
    where
        S: Wait,
    {
        self.pin_switch_mut().wait_for_any_edge().await?;
        self.update_switch()?;
        Ok(self.switch_state())
    }

    /// Run [`update_all`](Self::update_all) every `period`, forever.
    ///
    /// Only returns on a pin error. One to five milliseconds suits typical
    /// hand-turned encoders.
    pub async fn poll(&mut self, period: Duration) -> Result<Infallible, EncoderError<E>> {
        let mut ticker = Ticker::every(period);
        loop {
            self.update_all()?;
            ticker.next().await;
        }
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────
