//! Construction-time errors
//!
//! The play mode either fails to construct or runs indefinitely; nothing in
//! the per-tick update can fail.

use thiserror::Error;

/// Scene graph does not have the shape the play mode needs
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// One or more required transform labels were not found
    #[error("scene is missing required nodes: {}", .labels.join(", "))]
    MissingNodes { labels: Vec<String> },
    /// The scene must carry exactly one camera
    #[error("expecting scene to have exactly one camera, but it has {0}")]
    CameraCount(usize),
    /// Camera refers to a transform index that does not exist
    #[error("camera transform index {0} is out of range")]
    DanglingCamera(usize),
}

/// Tuning values that cannot drive the simulation
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("empty change window: min {min}s must be below max {max}s")]
    EmptyChangeWindow { min: u32, max: u32 },
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("{field} must be a finite, non-zero direction")]
    ZeroVector { field: &'static str },
    #[error("malformed tuning json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Anything that prevents the play mode from starting
#[derive(Debug, Error)]
pub enum PlayModeError {
    #[error(transparent)]
    Scene(#[from] SceneError),
    #[error(transparent)]
    Tuning(#[from] TuningError),
}
