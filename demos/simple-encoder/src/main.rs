//! Simple encoder example
//!
//! Demonstrates basic usage of the rotary-encoder-driver crate on the
//! Raspberry Pi Pico 2. A polling task samples the encoder every 2 ms and
//! writes into a shared `static` state block; the main loop reads that
//! state and logs position and switch changes via defmt.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes                        |
//! |-----------|------------|------------------------------|
//! | ENC CLK   | GP10       | Phase A, pull-up enabled     |
//! | ENC DT    | GP11       | Phase B, pull-up enabled     |
//! | ENC SW    | GP12       | Active-low, pull-up enabled  |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::block::ImageDef;
use embassy_rp::gpio::{Input, Pull};
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use rotary_encoder_driver::{
    EmbassyClock, EncoderConfig, EncoderState, RotaryEncoder, SwitchState,
};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

/// Decoded encoder state, written by the polling task and read by main.
static KNOB: EncoderState = EncoderState::new();

type KnobEncoder = RotaryEncoder<'static, Input<'static>, Input<'static>, Input<'static>, EmbassyClock>;

/// Samples the encoder every 2 ms for as long as the pins can be read.
#[embassy_executor::task]
async fn encoder_task(mut encoder: KnobEncoder) {
    if let Err(e) = encoder.poll(Duration::from_millis(2)).await {
        error!("Encoder polling stopped: {}", e);
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());

    // --- Encoder pins (pull-ups enabled, switch active-low) ---
    let clk = Input::new(p.PIN_10, Pull::Up);
    let dt = Input::new(p.PIN_11, Pull::Up);
    let sw = Input::new(p.PIN_12, Pull::Up);

    let config = EncoderConfig {
        min_value: 0,
        max_value: 100,
        wrap_mode: false,
        ..EncoderConfig::default()
    };

    let encoder = match RotaryEncoder::new(clk, dt, sw, EmbassyClock, &KNOB, &config) {
        Ok(encoder) => encoder,
        Err(e) => {
            error!("Encoder setup failed: {}", e);
            return;
        }
    };

    spawner.spawn(encoder_task(encoder)).unwrap();

    info!("Encoder example started, rotate the knob or press it");

    let mut last_position = KNOB.rotary().position();
    let mut last_switch = SwitchState::Off;

    loop {
        let position = KNOB.rotary().position();
        if position != last_position {
            info!(
                "Position: {} ({})",
                position,
                KNOB.rotary().direction()
            );
            last_position = position;
        }

        let switch = KNOB.switch().classify();
        if switch != last_switch {
            info!("Switch: {}", switch);
            last_switch = switch;
        }

        Timer::after(Duration::from_millis(20)).await;
    }
}
