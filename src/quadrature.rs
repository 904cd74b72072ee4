//! Bounce-tolerant quadrature decoding and the bounded position counter.
//!
//! The decoder only acts on edges of phase A. A transition is accepted once
//! phase B has also changed relative to the last recorded pair, so contact
//! bounce on either line alone never moves the counter. Direction follows
//! from the new levels only: the lines differ when turning clockwise.
//!
//! ```text
//!          ┌───┐   ┌───┐
//!   A  ────┘   └───┘   └───
//!            ┌───┐   ┌───┐
//!   B  ──────┘   └───┘   └─
//!         CW →
//! ```
//!
//! All state lives in atomic cells accessed with plain loads and stores, so
//! a decoder can sit in a `static` and be advanced from an interrupt handler
//! while thread code reads [`position`](QuadratureDecoder::position).

use core::sync::atomic::{AtomicBool, AtomicI32, AtomicU8, Ordering};

use crate::config::{self, EncoderConfig};
use crate::error::ConfigError;

/// Result of the most recent rotation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Last accepted move increased the position.
    ClockWise,
    /// Last accepted move decreased the position.
    CounterClockWise,
    /// No move yet, position was set directly, or a clamp-mode move hit a limit.
    NotMoved,
}

impl Direction {
    /// Signed unit value: `1`, `-1` or `0`.
    pub const fn as_i8(self) -> i8 {
        match self {
            Direction::ClockWise => 1,
            Direction::CounterClockWise => -1,
            Direction::NotMoved => 0,
        }
    }

    const fn to_bits(self) -> u8 {
        match self {
            Direction::NotMoved => 0,
            Direction::ClockWise => 1,
            Direction::CounterClockWise => 2,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            1 => Direction::ClockWise,
            2 => Direction::CounterClockWise,
            _ => Direction::NotMoved,
        }
    }
}

/// Last observed level of a phase line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PhaseLevel {
    Low,
    High,
    /// No reference recorded; the next edge only resynchronizes.
    Unknown,
}

impl PhaseLevel {
    /// Level of a raw pin sample.
    pub const fn from_sample(high: bool) -> Self {
        if high {
            PhaseLevel::High
        } else {
            PhaseLevel::Low
        }
    }

    /// `true` if the sample equals this recorded level. `Unknown` matches nothing.
    pub const fn matches(self, high: bool) -> bool {
        matches!(
            (self, high),
            (PhaseLevel::High, true) | (PhaseLevel::Low, false)
        )
    }

    const fn to_bits(self) -> u8 {
        match self {
            PhaseLevel::Low => 0,
            PhaseLevel::High => 1,
            PhaseLevel::Unknown => 2,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits {
            0 => PhaseLevel::Low,
            1 => PhaseLevel::High,
            _ => PhaseLevel::Unknown,
        }
    }
}

/// Quadrature decoder with a bounded position counter.
///
/// Each field has a single writer: [`advance`](Self::advance) (typically
/// interrupt context) owns the phase tracking and, together with the
/// setters (thread context, not concurrently with rotation), the position
/// and direction.
pub struct QuadratureDecoder {
    position: AtomicI32,
    direction: AtomicU8,
    last_phase_a: AtomicU8,
    last_phase_b: AtomicU8,

    min_value: AtomicI32,
    max_value: AtomicI32,
    wrap_mode: AtomicBool,
    invert_direction: AtomicBool,
    high_sensitivity: AtomicBool,
    step_size: AtomicI32,
}

impl Default for QuadratureDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl QuadratureDecoder {
    /// Decoder at position 0 with default settings and no phase reference.
    pub const fn new() -> Self {
        Self {
            position: AtomicI32::new(0),
            direction: AtomicU8::new(Direction::NotMoved.to_bits()),
            last_phase_a: AtomicU8::new(PhaseLevel::Unknown.to_bits()),
            last_phase_b: AtomicU8::new(PhaseLevel::Unknown.to_bits()),
            min_value: AtomicI32::new(config::DEFAULT_MIN_VALUE),
            max_value: AtomicI32::new(config::DEFAULT_MAX_VALUE),
            wrap_mode: AtomicBool::new(config::DEFAULT_WRAP_MODE),
            invert_direction: AtomicBool::new(config::DEFAULT_INVERT_DIRECTION),
            high_sensitivity: AtomicBool::new(config::DEFAULT_HIGH_SENSITIVITY),
            step_size: AtomicI32::new(config::DEFAULT_STEP_SIZE),
        }
    }

    /// Apply the rotary part of `config`, moving the position inside the new
    /// limits if needed.
    pub fn apply_config(&self, config: &EncoderConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.store_limits(config.min_value, config.max_value);
        self.wrap_mode.store(config.wrap_mode, Ordering::Relaxed);
        self.invert_direction
            .store(config.invert_direction, Ordering::Relaxed);
        self.high_sensitivity
            .store(config.high_sensitivity, Ordering::Relaxed);
        self.step_size.store(config.step_size, Ordering::Relaxed);
        Ok(())
    }

    /// Record the initial level of phase A and forget phase B, so the first
    /// edge after startup only establishes the reference pair.
    pub fn seed(&self, sample_a: bool) {
        self.store_phase_a(PhaseLevel::from_sample(sample_a));
        self.store_phase_b(PhaseLevel::Unknown);
    }

    // -----------------------------------------------------------------------
    // Decoding
    // -----------------------------------------------------------------------

    /// Feed one sample of both phase lines.
    ///
    /// Call on every sampling tick, from an interrupt on either line or a
    /// polling loop. Samples without an A edge are ignored entirely.
    pub fn advance(&self, sample_a: bool, sample_b: bool) {
        if self.phase_a().matches(sample_a) {
            return;
        }
        self.store_phase_a(PhaseLevel::from_sample(sample_a));

        let last_b = self.phase_b();
        if last_b == PhaseLevel::Unknown {
            self.store_phase_b(PhaseLevel::from_sample(sample_b));
            #[cfg(feature = "defmt")]
            defmt::debug!("quadrature: resync a={} b={}", sample_a, sample_b);
            return;
        }

        // B has not caught up yet: bounce on A, or the first half of a detent.
        if last_b.matches(sample_b) {
            return;
        }

        let forward = (sample_a != sample_b) ^ self.invert_direction.load(Ordering::Relaxed);
        self.apply_step(forward);

        if self.high_sensitivity.load(Ordering::Relaxed) {
            self.store_phase_b(PhaseLevel::from_sample(sample_b));
        } else {
            self.store_phase_b(PhaseLevel::Unknown);
        }
    }

    /// Move one step according to the boundary policy.
    fn apply_step(&self, forward: bool) {
        let position = self.position.load(Ordering::Relaxed);
        let min = self.min_value.load(Ordering::Relaxed);
        let max = self.max_value.load(Ordering::Relaxed);
        let step = i64::from(self.step_size.load(Ordering::Relaxed));

        // Widened so steps near i32::MIN/MAX neither overflow nor saturate.
        let candidate = if forward {
            i64::from(position) + step
        } else {
            i64::from(position) - step
        };
        let resolved = if forward {
            Direction::ClockWise
        } else {
            Direction::CounterClockWise
        };

        let next = if candidate > i64::from(max) {
            if !self.wrap_mode.load(Ordering::Relaxed) {
                self.reject_step(position);
                return;
            }
            min
        } else if candidate < i64::from(min) {
            if !self.wrap_mode.load(Ordering::Relaxed) {
                self.reject_step(position);
                return;
            }
            max
        } else {
            candidate as i32
        };

        self.position.store(next, Ordering::Relaxed);
        self.direction.store(resolved.to_bits(), Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::trace!("quadrature: {} -> {}", resolved, next);
    }

    fn reject_step(&self, _position: i32) {
        self.direction
            .store(Direction::NotMoved.to_bits(), Ordering::Release);

        #[cfg(feature = "defmt")]
        defmt::debug!("quadrature: move rejected at limit, position {}", _position);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Current position, always within the configured limits.
    pub fn position(&self) -> i32 {
        self.position.load(Ordering::Relaxed)
    }

    /// Outcome of the most recent transition.
    pub fn direction(&self) -> Direction {
        Direction::from_bits(self.direction.load(Ordering::Acquire))
    }

    /// Last recorded levels of phase A and phase B.
    pub fn phases(&self) -> (PhaseLevel, PhaseLevel) {
        (self.phase_a(), self.phase_b())
    }

    /// Configured `(min_value, max_value)`.
    pub fn limits(&self) -> (i32, i32) {
        (
            self.min_value.load(Ordering::Relaxed),
            self.max_value.load(Ordering::Relaxed),
        )
    }

    pub fn wrap_mode(&self) -> bool {
        self.wrap_mode.load(Ordering::Relaxed)
    }

    pub fn is_direction_inverted(&self) -> bool {
        self.invert_direction.load(Ordering::Relaxed)
    }

    pub fn is_high_sensitivity(&self) -> bool {
        self.high_sensitivity.load(Ordering::Relaxed)
    }

    pub fn step(&self) -> i32 {
        self.step_size.load(Ordering::Relaxed)
    }

    // -----------------------------------------------------------------------
    // Mutation and configuration
    // -----------------------------------------------------------------------

    /// Force the position. The direction becomes [`Direction::NotMoved`].
    ///
    /// # Errors
    /// [`ConfigError::PositionOutOfRange`] if `position` is outside the limits.
    pub fn set_position(&self, position: i32) -> Result<(), ConfigError> {
        let (min, max) = self.limits();
        if position < min || position > max {
            return Err(ConfigError::PositionOutOfRange);
        }
        self.position.store(position, Ordering::Relaxed);
        self.direction
            .store(Direction::NotMoved.to_bits(), Ordering::Release);
        Ok(())
    }

    /// Set both limits and the boundary policy at once.
    ///
    /// # Errors
    /// [`ConfigError::InvalidLimits`] if `min > max`.
    pub fn set_limits(&self, min: i32, max: i32, wrap: bool) -> Result<(), ConfigError> {
        config::validate_limits(min, max)?;
        self.store_limits(min, max);
        self.wrap_mode.store(wrap, Ordering::Relaxed);
        Ok(())
    }

    /// Change the lower limit, moving the position up to it if needed.
    ///
    /// # Errors
    /// [`ConfigError::InvalidLimits`] if `min` exceeds the current maximum.
    pub fn set_min_value(&self, min: i32) -> Result<(), ConfigError> {
        let max = self.max_value.load(Ordering::Relaxed);
        config::validate_limits(min, max)?;
        self.store_limits(min, max);
        Ok(())
    }

    /// Change the upper limit, moving the position down to it if needed.
    ///
    /// # Errors
    /// [`ConfigError::InvalidLimits`] if `max` is below the current minimum.
    pub fn set_max_value(&self, max: i32) -> Result<(), ConfigError> {
        let min = self.min_value.load(Ordering::Relaxed);
        config::validate_limits(min, max)?;
        self.store_limits(min, max);
        Ok(())
    }

    /// `true` rolls over at the limits, `false` stops at them.
    pub fn set_wrap_mode(&self, wrap: bool) {
        self.wrap_mode.store(wrap, Ordering::Relaxed);
    }

    /// Swap the meaning of clockwise and counter-clockwise.
    pub fn set_direction_inverted(&self, inverted: bool) {
        self.invert_direction.store(inverted, Ordering::Relaxed);
    }

    /// `true` counts every detent; `false` needs two transitions per count.
    pub fn set_sensitivity(&self, high: bool) {
        self.high_sensitivity.store(high, Ordering::Relaxed);
    }

    /// Position change per accepted transition.
    ///
    /// # Errors
    /// [`ConfigError::InvalidStep`] if `step < 1`.
    pub fn set_step(&self, step: i32) -> Result<(), ConfigError> {
        config::validate_step(step)?;
        self.step_size.store(step, Ordering::Relaxed);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Cell helpers
    // -----------------------------------------------------------------------

    /// Store already-validated limits and pull the position inside them.
    fn store_limits(&self, min: i32, max: i32) {
        self.min_value.store(min, Ordering::Relaxed);
        self.max_value.store(max, Ordering::Relaxed);

        let position = self.position.load(Ordering::Relaxed);
        let clamped = position.clamp(min, max);
        if clamped != position {
            self.position.store(clamped, Ordering::Relaxed);
        }
    }

    fn phase_a(&self) -> PhaseLevel {
        PhaseLevel::from_bits(self.last_phase_a.load(Ordering::Relaxed))
    }

    fn phase_b(&self) -> PhaseLevel {
        PhaseLevel::from_bits(self.last_phase_b.load(Ordering::Relaxed))
    }

    fn store_phase_a(&self, level: PhaseLevel) {
        self.last_phase_a.store(level.to_bits(), Ordering::Relaxed);
    }

    fn store_phase_b(&self, level: PhaseLevel) {
        self.last_phase_b.store(level.to_bits(), Ordering::Relaxed);
    }
}

// ── Unit Tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const L: bool = false;
    const H: bool = true;

    /// One full clockwise cycle starting from (L, L).
    const CW_CYCLE: [(bool, bool); 4] = [(H, L), (H, H), (L, H), (L, L)];

    /// One full counter-clockwise cycle starting from (L, L).
    const CCW_CYCLE: [(bool, bool); 4] = [(L, H), (H, H), (H, L), (L, L)];

    // Helper: decoder seeded with A low, optional overrides applied.
    fn seeded(configure: impl FnOnce(&mut EncoderConfig)) -> QuadratureDecoder {
        let mut config = EncoderConfig::default();
        configure(&mut config);
        let decoder = QuadratureDecoder::new();
        decoder.apply_config(&config).unwrap();
        decoder.seed(L);
        decoder
    }

    fn feed(decoder: &QuadratureDecoder, samples: &[(bool, bool)]) {
        for &(a, b) in samples {
            decoder.advance(a, b);
        }
    }

    // Helper: bring the decoder into a known tracked pair (a, b), high sensitivity.
    fn tracked(a: bool, b: bool, configure: impl FnOnce(&mut EncoderConfig)) -> QuadratureDecoder {
        let decoder = seeded(|c| {
            c.high_sensitivity = true;
            configure(c);
        });
        decoder.seed(!a);
        decoder.advance(a, b);
        assert_eq!(decoder.phases(), (PhaseLevel::from_sample(a), PhaseLevel::from_sample(b)));
        assert_eq!(decoder.position(), 0);
        decoder
    }

    // ── Startup and resynchronization ────────────────────────────────

    #[test]
    fn new_decoder_defaults() {
        let decoder = QuadratureDecoder::new();
        assert_eq!(decoder.position(), 0);
        assert_eq!(decoder.direction(), Direction::NotMoved);
        assert_eq!(decoder.phases(), (PhaseLevel::Unknown, PhaseLevel::Unknown));
        assert_eq!(decoder.limits(), (-10, 10));
        assert_eq!(decoder.step(), 1);
        assert!(!decoder.wrap_mode());
    }

    #[test]
    fn seed_leaves_phase_b_unknown() {
        let decoder = QuadratureDecoder::new();
        decoder.seed(H);
        assert_eq!(decoder.phases(), (PhaseLevel::High, PhaseLevel::Unknown));
    }

    #[test]
    fn first_edge_after_startup_only_resyncs() {
        let decoder = seeded(|c| c.high_sensitivity = true);
        decoder.advance(H, L);
        assert_eq!(decoder.position(), 0);
        assert_eq!(decoder.direction(), Direction::NotMoved);
        assert_eq!(decoder.phases(), (PhaseLevel::High, PhaseLevel::Low));
    }

    #[test]
    fn unseeded_decoder_resyncs_on_first_sample() {
        let decoder = QuadratureDecoder::new();
        decoder.advance(L, H);
        assert_eq!(decoder.position(), 0);
        assert_eq!(decoder.phases(), (PhaseLevel::Low, PhaseLevel::High));
    }

    // ── Direction ────────────────────────────────────────────────────

    #[test]
    fn differing_levels_mean_clockwise() {
        // Tracked pair (L, H); A and B both change to (H, L).
        let decoder = tracked(L, H, |_| {});
        decoder.advance(H, L);
        assert_eq!(decoder.direction(), Direction::ClockWise);
        assert_eq!(decoder.position(), 1);
    }

    #[test]
    fn equal_levels_mean_counter_clockwise() {
        let decoder = tracked(L, L, |_| {});
        decoder.advance(H, H);
        assert_eq!(decoder.direction(), Direction::CounterClockWise);
        assert_eq!(decoder.position(), -1);
    }

    #[test]
    fn position_moves_by_exactly_step_size() {
        let decoder = tracked(L, H, |c| c.step_size = 3);
        decoder.advance(H, L);
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn inverted_direction_swaps_sign() {
        let decoder = tracked(L, H, |c| c.invert_direction = true);
        decoder.advance(H, L);
        assert_eq!(decoder.direction(), Direction::CounterClockWise);
        assert_eq!(decoder.position(), -1);
    }

    #[test]
    fn full_clockwise_cycles_count_up() {
        let decoder = seeded(|_| {});
        for _ in 0..3 {
            feed(&decoder, &CW_CYCLE);
        }
        assert_eq!(decoder.position(), 3);
        assert_eq!(decoder.direction(), Direction::ClockWise);
    }

    #[test]
    fn full_counter_clockwise_cycles_count_down() {
        let decoder = seeded(|_| {});
        for _ in 0..3 {
            feed(&decoder, &CCW_CYCLE);
        }
        assert_eq!(decoder.position(), -3);
        assert_eq!(decoder.direction(), Direction::CounterClockWise);
    }

    // ── Sensitivity ──────────────────────────────────────────────────

    #[test]
    fn low_sensitivity_needs_two_transitions_per_count() {
        let decoder = seeded(|_| {});
        // (H, L) resyncs, (L, H) counts and forgets B.
        feed(&decoder, &[(H, L), (H, H), (L, H)]);
        assert_eq!(decoder.position(), 1);
        assert_eq!(decoder.phases(), (PhaseLevel::Low, PhaseLevel::Unknown));

        // Next A edge only resyncs again.
        feed(&decoder, &[(L, L), (H, L)]);
        assert_eq!(decoder.position(), 1);

        feed(&decoder, &[(H, H), (L, H)]);
        assert_eq!(decoder.position(), 2);
    }

    #[test]
    fn high_sensitivity_counts_every_transition() {
        let decoder = seeded(|c| c.high_sensitivity = true);
        feed(&decoder, &CW_CYCLE);
        // First edge resyncs, the other A edge counts.
        assert_eq!(decoder.position(), 1);
        feed(&decoder, &CW_CYCLE);
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn sensitivity_can_change_at_runtime() {
        let decoder = seeded(|_| {});
        decoder.set_sensitivity(true);
        assert!(decoder.is_high_sensitivity());
        feed(&decoder, &CW_CYCLE);
        feed(&decoder, &CW_CYCLE);
        assert_eq!(decoder.position(), 3);
    }

    // ── Bounce immunity and idempotence ──────────────────────────────

    #[test]
    fn a_bounce_before_b_changes_is_ignored() {
        let decoder = tracked(L, L, |_| {});
        // A chatters while B stays put.
        feed(&decoder, &[(H, L), (L, L), (H, L), (L, L), (H, L)]);
        assert_eq!(decoder.position(), 0);
        assert_eq!(decoder.direction(), Direction::NotMoved);
    }

    #[test]
    fn b_noise_alone_is_ignored() {
        let decoder = tracked(L, L, |_| {});
        feed(&decoder, &[(L, H), (L, L), (L, H), (L, L)]);
        assert_eq!(decoder.position(), 0);
        assert_eq!(decoder.phases(), (PhaseLevel::Low, PhaseLevel::Low));
    }

    #[test]
    fn repeated_identical_samples_are_idempotent() {
        let decoder = tracked(L, H, |_| {});
        decoder.advance(H, L);
        let position = decoder.position();
        let direction = decoder.direction();
        for _ in 0..10 {
            decoder.advance(H, L);
        }
        assert_eq!(decoder.position(), position);
        assert_eq!(decoder.direction(), direction);
    }

    // ── Boundary policy ──────────────────────────────────────────────

    #[test]
    fn wrap_forward_rolls_to_min() {
        let decoder = tracked(L, H, |c| c.wrap_mode = true);
        decoder.set_position(10).unwrap();
        decoder.advance(H, L);
        assert_eq!(decoder.position(), -10);
        assert_eq!(decoder.direction(), Direction::ClockWise);
    }

    #[test]
    fn wrap_backward_rolls_to_max() {
        let decoder = tracked(L, L, |c| c.wrap_mode = true);
        decoder.set_position(-10).unwrap();
        decoder.advance(H, H);
        assert_eq!(decoder.position(), 10);
        assert_eq!(decoder.direction(), Direction::CounterClockWise);
    }

    #[test]
    fn clamp_rejects_move_past_max() {
        let decoder = tracked(L, H, |_| {});
        decoder.set_position(10).unwrap();
        decoder.advance(H, L);
        assert_eq!(decoder.position(), 10);
        assert_eq!(decoder.direction(), Direction::NotMoved);
    }

    #[test]
    fn clamp_rejects_partial_step_instead_of_clamping() {
        let decoder = tracked(L, L, |c| c.step_size = 4);
        decoder.set_position(-8).unwrap();
        decoder.advance(H, H);
        assert_eq!(decoder.position(), -8);
        assert_eq!(decoder.direction(), Direction::NotMoved);
    }

    #[test]
    fn rejected_move_still_updates_phase_tracking() {
        let decoder = tracked(L, H, |_| {});
        decoder.set_position(10).unwrap();
        decoder.advance(H, L);
        assert_eq!(decoder.phases(), (PhaseLevel::High, PhaseLevel::Low));
    }

    #[test]
    fn wrap_at_i32_extremes_does_not_overflow() {
        let decoder = tracked(L, H, |c| {
            c.min_value = i32::MIN;
            c.max_value = i32::MAX;
            c.wrap_mode = true;
            c.step_size = i32::MAX;
        });
        decoder.set_position(i32::MAX).unwrap();
        decoder.advance(H, L);
        assert_eq!(decoder.position(), i32::MIN);
    }

    #[test]
    fn position_stays_in_bounds_under_long_rotation() {
        for wrap in [false, true] {
            let decoder = seeded(|c| {
                c.min_value = -3;
                c.max_value = 4;
                c.wrap_mode = wrap;
                c.high_sensitivity = true;
                c.step_size = 2;
            });
            for i in 0..50 {
                let cycle = if i % 7 < 5 { &CW_CYCLE } else { &CCW_CYCLE };
                for &(a, b) in cycle.iter() {
                    decoder.advance(a, b);
                    let p = decoder.position();
                    assert!((-3..=4).contains(&p), "position {} out of range (wrap={})", p, wrap);
                }
            }
        }
    }

    // ── Setters ──────────────────────────────────────────────────────

    #[test]
    fn set_position_resets_direction() {
        let decoder = tracked(L, H, |_| {});
        decoder.advance(H, L);
        assert_eq!(decoder.direction(), Direction::ClockWise);
        decoder.set_position(5).unwrap();
        assert_eq!(decoder.position(), 5);
        assert_eq!(decoder.direction(), Direction::NotMoved);
    }

    #[test]
    fn set_position_out_of_range_rejected() {
        let decoder = seeded(|_| {});
        decoder.set_position(3).unwrap();
        assert_eq!(decoder.set_position(11), Err(ConfigError::PositionOutOfRange));
        assert_eq!(decoder.set_position(-11), Err(ConfigError::PositionOutOfRange));
        assert_eq!(decoder.position(), 3);
    }

    #[test]
    fn set_limits_validates_and_clamps_position() {
        let decoder = seeded(|_| {});
        decoder.set_position(8).unwrap();

        assert_eq!(decoder.set_limits(5, 4, true), Err(ConfigError::InvalidLimits));
        assert_eq!(decoder.limits(), (-10, 10));

        decoder.set_limits(0, 5, true).unwrap();
        assert_eq!(decoder.limits(), (0, 5));
        assert!(decoder.wrap_mode());
        assert_eq!(decoder.position(), 5);
    }

    #[test]
    fn set_min_and_max_individually() {
        let decoder = seeded(|_| {});
        decoder.set_min_value(2).unwrap();
        assert_eq!(decoder.position(), 2);
        assert_eq!(decoder.set_max_value(1), Err(ConfigError::InvalidLimits));
        decoder.set_max_value(6).unwrap();
        assert_eq!(decoder.limits(), (2, 6));
        assert_eq!(decoder.set_min_value(7), Err(ConfigError::InvalidLimits));
        assert_eq!(decoder.limits(), (2, 6));
        assert_eq!(decoder.position(), 2);
    }

    #[test]
    fn set_step_rejects_non_positive() {
        let decoder = seeded(|_| {});
        assert_eq!(decoder.set_step(0), Err(ConfigError::InvalidStep));
        assert_eq!(decoder.step(), 1);
        decoder.set_step(5).unwrap();
        assert_eq!(decoder.step(), 5);
    }

    #[test]
    fn apply_config_rejects_invalid_without_changes() {
        let decoder = seeded(|_| {});
        let bad = EncoderConfig {
            min_value: 0,
            max_value: 100,
            step_size: 0,
            ..EncoderConfig::default()
        };
        assert_eq!(decoder.apply_config(&bad), Err(ConfigError::InvalidStep));
        assert_eq!(decoder.limits(), (-10, 10));
    }

    #[test]
    fn direction_signed_values() {
        assert_eq!(Direction::ClockWise.as_i8(), 1);
        assert_eq!(Direction::CounterClockWise.as_i8(), -1);
        assert_eq!(Direction::NotMoved.as_i8(), 0);
    }
}
