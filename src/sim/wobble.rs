//! Idle wobble oscillator
//!
//! Phase slowly rotates through [0, 1); `swing_angle` maps it to a small
//! rotation whose amplitude belongs to each light.

use serde::{Deserialize, Serialize};

use crate::tuning::WobbleTuning;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wobble {
    /// Current phase in [0, 1)
    pub phase: f32,
    /// Seconds per full cycle
    pub period: f32,
}

impl Wobble {
    pub fn new(tuning: &WobbleTuning) -> Self {
        Self {
            phase: tuning.phase - tuning.phase.floor(),
            period: tuning.period,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.phase += dt / self.period;
        self.phase -= self.phase.floor();
    }
}

/// Sinusoidal swing for a phase in [0, 1)
#[inline]
pub fn swing_angle(phase: f32, amplitude_deg: f32) -> f32 {
    (amplitude_deg * (phase * std::f32::consts::TAU).sin()).to_radians()
}
