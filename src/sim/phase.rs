//! Safe/unsafe phase cycle
//!
//! Counts down a safe window, ramps the tracking and music fractions up just
//! before it ends, holds them through the fixed-length unsafe window, then
//! draws a fresh safe window from the seeded generator.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::TuningError;
use crate::tuning::PhaseTuning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Being seen is harmless
    Safe,
    /// Moving now means capture
    Unsafe,
}

/// Phase state machine, generic over the injected random source
#[derive(Debug, Clone)]
pub struct PhaseTimer<R> {
    phase: Phase,
    seconds_remaining: f32,
    /// Blend weight from idle wobble (0) to tracking the player (1)
    tracking: f32,
    /// Blend weight from the safe loop (0) to the unsafe loop (1)
    music: f32,
    tuning: PhaseTuning,
    rng: R,
}

/// Ramp toward 1 inside the window, otherwise decay toward 0
fn step_fraction(current: f32, remaining: f32, window: f32, dt: f32) -> f32 {
    let next = if remaining < window {
        1.0 - remaining / window
    } else {
        current - dt / window
    };
    next.clamp(0.0, 1.0)
}

impl<R: Rng> PhaseTimer<R> {
    /// Start in the safe phase with `initial_safe_seconds` on the clock
    pub fn new(tuning: PhaseTuning, rng: R) -> Result<Self, TuningError> {
        tuning.validate()?;
        Ok(Self {
            phase: Phase::Safe,
            seconds_remaining: tuning.initial_safe_seconds,
            tracking: 0.0,
            music: 0.0,
            tuning,
            rng,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_safe(&self) -> bool {
        self.phase == Phase::Safe
    }

    pub fn seconds_remaining(&self) -> f32 {
        self.seconds_remaining
    }

    pub fn tracking_fraction(&self) -> f32 {
        self.tracking
    }

    pub fn music_fraction(&self) -> f32 {
        self.music
    }

    /// Advance the clock by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.seconds_remaining = (self.seconds_remaining - dt).max(0.0);

        match self.phase {
            Phase::Safe => {
                let remaining = self.seconds_remaining;
                self.tracking =
                    step_fraction(self.tracking, remaining, self.tuning.time_to_lerp, dt);
                self.music =
                    step_fraction(self.music, remaining, self.tuning.music_time_to_lerp, dt);

                if remaining <= 0.0 {
                    self.phase = Phase::Unsafe;
                    self.seconds_remaining = self.tuning.duration_of_bad;
                    log::debug!("Lights hot for {}s", self.seconds_remaining);
                }
            }
            Phase::Unsafe => {
                if self.seconds_remaining <= 0.0 {
                    self.phase = Phase::Safe;
                    self.seconds_remaining = self.draw_safe_seconds();
                    log::debug!("Lights cool for {}s", self.seconds_remaining);
                }
            }
        }
    }

    /// Whole seconds in `[min, max)`; validation guarantees a non-empty range
    fn draw_safe_seconds(&mut self) -> f32 {
        let min = self.tuning.min_seconds_between_change;
        let max = self.tuning.max_seconds_between_change;
        self.rng.random_range(min..max) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn timer(tuning: PhaseTuning) -> PhaseTimer<Pcg32> {
        PhaseTimer::new(tuning, Pcg32::seed_from_u64(12345)).unwrap()
    }

    #[test]
    fn test_starts_safe_and_idle() {
        let t = timer(PhaseTuning::default());
        assert_eq!(t.phase(), Phase::Safe);
        assert_eq!(t.seconds_remaining(), 8.0);
        assert_eq!(t.tracking_fraction(), 0.0);
        assert_eq!(t.music_fraction(), 0.0);
    }

    #[test]
    fn test_rejects_empty_change_window() {
        let tuning = PhaseTuning {
            min_seconds_between_change: 5,
            max_seconds_between_change: 5,
            ..Default::default()
        };
        assert!(matches!(
            PhaseTimer::new(tuning, Pcg32::seed_from_u64(1)),
            Err(TuningError::EmptyChangeWindow { .. })
        ));
    }

    #[test]
    fn test_safe_to_unsafe_after_exact_duration() {
        let mut t = timer(PhaseTuning::default());
        t.advance(8.0);
        assert_eq!(t.phase(), Phase::Unsafe);
        assert_eq!(t.seconds_remaining(), 4.0);
        assert_eq!(t.tracking_fraction(), 1.0);
        assert_eq!(t.music_fraction(), 1.0);
    }

    #[test]
    fn test_ramps_inside_windows() {
        let mut t = timer(PhaseTuning::default());
        // 1.5s left: inside the 2s music window, outside the 0.5s light window
        t.advance(6.5);
        assert_eq!(t.phase(), Phase::Safe);
        assert_eq!(t.tracking_fraction(), 0.0);
        assert!((t.music_fraction() - 0.25).abs() < 1e-6);

        // 0.25s left: halfway through the light window
        t.advance(1.25);
        assert!((t.tracking_fraction() - 0.5).abs() < 1e-5);
        assert!((t.music_fraction() - 0.875).abs() < 1e-5);
    }

    #[test]
    fn test_fractions_hold_while_unsafe() {
        let mut t = timer(PhaseTuning::default());
        t.advance(8.0);
        for _ in 0..30 {
            t.advance(0.1);
            assert_eq!(t.phase(), Phase::Unsafe);
            assert_eq!(t.tracking_fraction(), 1.0);
            assert_eq!(t.music_fraction(), 1.0);
        }
    }

    #[test]
    fn test_fractions_decay_after_safety_returns() {
        let mut t = timer(PhaseTuning::default());
        t.advance(8.0);
        t.advance(4.0);
        assert_eq!(t.phase(), Phase::Safe);
        assert!(t.seconds_remaining() >= 6.0);

        // Lights release over time_to_lerp, music over music_time_to_lerp
        t.advance(0.25);
        assert!((t.tracking_fraction() - 0.5).abs() < 1e-5);
        assert!((t.music_fraction() - 0.875).abs() < 1e-5);
        t.advance(0.25);
        assert_eq!(t.tracking_fraction(), 0.0);
        t.advance(1.5);
        assert_eq!(t.music_fraction(), 0.0);
    }

    #[test]
    fn test_unsafe_to_safe_draws_from_window() {
        let mut t = timer(PhaseTuning::default());
        t.advance(8.0);
        t.advance(4.0);
        assert_eq!(t.phase(), Phase::Safe);
        let drawn = t.seconds_remaining();
        assert!((6.0..12.0).contains(&drawn));
        assert_eq!(drawn.fract(), 0.0);
    }

    #[test]
    fn test_draw_covers_whole_window() {
        let tuning = PhaseTuning {
            initial_safe_seconds: 0.0,
            min_seconds_between_change: 3,
            max_seconds_between_change: 9,
            duration_of_bad: 1.0,
            ..Default::default()
        };
        let mut t = timer(tuning);
        let mut seen = [0u32; 9];

        for _ in 0..600 {
            // Finish whatever safe window is running, then the unsafe one
            t.advance(t.seconds_remaining());
            assert_eq!(t.phase(), Phase::Unsafe);
            t.advance(1.0);
            assert_eq!(t.phase(), Phase::Safe);

            let drawn = t.seconds_remaining();
            assert!((3.0..9.0).contains(&drawn), "drew {drawn}");
            seen[drawn as usize] += 1;
        }

        assert!(seen[3..9].iter().all(|&n| n > 0), "{seen:?}");
        assert!(seen[..3].iter().all(|&n| n == 0));
    }

    #[test]
    fn test_same_seed_same_cycle() {
        let run = || {
            let mut t = timer(PhaseTuning::default());
            let mut draws = Vec::new();
            for _ in 0..20 {
                t.advance(t.seconds_remaining());
                t.advance(t.seconds_remaining());
                draws.push(t.seconds_remaining());
            }
            draws
        };
        assert_eq!(run(), run());
    }

    proptest! {
        #[test]
        fn prop_fractions_stay_in_unit_range(dts in prop::collection::vec(0.0f32..3.0, 1..200)) {
            let mut t = timer(PhaseTuning::default());
            for dt in dts {
                t.advance(dt);
                prop_assert!((0.0..=1.0).contains(&t.tracking_fraction()));
                prop_assert!((0.0..=1.0).contains(&t.music_fraction()));
                prop_assert!(t.seconds_remaining() >= 0.0);
            }
        }
    }
}
