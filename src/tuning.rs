//! Gameplay tuning
//!
//! Every speed, threshold and timing window the play mode uses lives here and
//! is handed to the mode once at construction. Defaults match the shipped game.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::TuningError;

/// Safe/unsafe cycle timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseTuning {
    /// Length of the very first safe phase (seconds)
    pub initial_safe_seconds: f32,
    /// Shortest randomized safe phase (whole seconds, inclusive)
    pub min_seconds_between_change: u32,
    /// Longest randomized safe phase (whole seconds, exclusive)
    pub max_seconds_between_change: u32,
    /// Window before the switch in which the lights swing onto the player
    pub time_to_lerp: f32,
    /// Window before the switch in which the music crossfades
    pub music_time_to_lerp: f32,
    /// Length of every unsafe phase (seconds)
    pub duration_of_bad: f32,
}

impl Default for PhaseTuning {
    fn default() -> Self {
        Self {
            initial_safe_seconds: 8.0,
            min_seconds_between_change: 6,
            max_seconds_between_change: 12,
            time_to_lerp: 0.5,
            music_time_to_lerp: 2.0,
            duration_of_bad: 4.0,
        }
    }
}

/// Idle oscillation of one searchlight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WobbleTuning {
    /// Seconds per full oscillation
    pub period: f32,
    /// Starting phase in [0, 1)
    pub phase: f32,
    /// Peak swing in degrees
    pub amplitude_deg: f32,
}

/// Searchlight behaviour
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightTuning {
    pub left: WobbleTuning,
    pub right: WobbleTuning,
    /// Local axis the wobble rotates about (normalized on use)
    pub wobble_axis: Vec3,
    /// Up reference for the look-at orientation
    pub look_up: Vec3,
}

impl Default for LightTuning {
    fn default() -> Self {
        Self {
            left: WobbleTuning {
                period: 10.0,
                phase: 0.0,
                amplitude_deg: 5.0,
            },
            right: WobbleTuning {
                period: 8.0,
                phase: 0.5,
                amplitude_deg: 5.0,
            },
            wobble_axis: Vec3::new(1.0, 1.0, 0.0),
            look_up: Vec3::Z,
        }
    }
}

/// Vehicle movement and win threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscapeTuning {
    /// Upward speed while the action button is held (units/sec)
    pub player_speed: f32,
    /// Camera stops following above this height
    pub max_camera_y: f32,
    /// Player height past which the escape succeeds
    pub win_y: f32,
}

impl Default for EscapeTuning {
    fn default() -> Self {
        Self {
            player_speed: 1.0,
            max_camera_y: 18.0,
            win_y: 20.0,
        }
    }
}

/// Music loop and listener parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioTuning {
    /// Max audible distance handed to the loop player
    pub max_distance: f32,
    /// Listener smoothing window (seconds)
    pub listener_smoothing: f32,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self {
            max_distance: 10.0,
            listener_smoothing: 1.0 / 60.0,
        }
    }
}

/// Scene labels the mode resolves at construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeLabels {
    pub body: String,
    /// Front-right, front-left, back-right, back-left
    pub wheels: [String; 4],
    pub light_left: String,
    pub light_right: String,
}

impl Default for NodeLabels {
    fn default() -> Self {
        Self {
            body: "Body".to_string(),
            wheels: [
                "Wheel_FR".to_string(),
                "Wheel_FL".to_string(),
                "Wheel_BR".to_string(),
                "Wheel_BL".to_string(),
            ],
            light_left: "Searchlight_L".to_string(),
            light_right: "Searchlight_R".to_string(),
        }
    }
}

/// Complete, immutable play mode configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Seed for the unsafe→safe duration draw
    pub seed: u64,
    pub phase: PhaseTuning,
    pub lights: LightTuning,
    pub escape: EscapeTuning,
    pub audio: AudioTuning,
    pub labels: NodeLabels,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            seed: 0x5EA2_C41F,
            phase: PhaseTuning::default(),
            lights: LightTuning::default(),
            escape: EscapeTuning::default(),
            audio: AudioTuning::default(),
            labels: NodeLabels::default(),
        }
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TuningError::NonPositive { field, value })
    }
}

fn direction(field: &'static str, value: Vec3) -> Result<(), TuningError> {
    match value.try_normalize() {
        Some(_) => Ok(()),
        None => Err(TuningError::ZeroVector { field }),
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Negative { field, value })
    }
}

impl PhaseTuning {
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.min_seconds_between_change >= self.max_seconds_between_change {
            return Err(TuningError::EmptyChangeWindow {
                min: self.min_seconds_between_change,
                max: self.max_seconds_between_change,
            });
        }
        positive("phase.time_to_lerp", self.time_to_lerp)?;
        positive("phase.music_time_to_lerp", self.music_time_to_lerp)?;
        non_negative("phase.initial_safe_seconds", self.initial_safe_seconds)?;
        non_negative("phase.duration_of_bad", self.duration_of_bad)
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        self.phase.validate()?;
        positive("lights.left.period", self.lights.left.period)?;
        positive("lights.right.period", self.lights.right.period)?;
        direction("lights.wobble_axis", self.lights.wobble_axis)?;
        direction("lights.look_up", self.lights.look_up)?;
        non_negative("escape.player_speed", self.escape.player_speed)?;
        positive("audio.max_distance", self.audio.max_distance)?;
        non_negative("audio.listener_smoothing", self.audio.listener_smoothing)
    }
}
