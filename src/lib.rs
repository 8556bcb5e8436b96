//! Searchlight Escape - a facility breakout play mode
//!
//! Core modules:
//! - `sim`: Phase cycle, searchlight blending, vehicle movement, outcome
//! - `play_mode`: Per-frame orchestration of the above
//! - `input`: Button latch fed by host events
//! - `audio`: Safe/unsafe music crossfade over a host sound system
//! - `renderer`: Host rendering seam and status overlay layout
//! - `scene`: Scene graph copy and typed node handles
//! - `tuning`: Data-driven gameplay constants

pub mod audio;
pub mod error;
pub mod input;
pub mod play_mode;
pub mod renderer;
pub mod scene;
pub mod sim;
pub mod tuning;

pub use error::{PlayModeError, SceneError, TuningError};
pub use play_mode::PlayMode;
pub use tuning::Tuning;

/// Frame loop constants for hosts that drive the mode
pub mod consts {
    /// Nominal frame time (60 Hz)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
}
