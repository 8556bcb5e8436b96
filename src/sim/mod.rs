//! Deterministic gameplay logic
//!
//! Everything here is driven by elapsed time and a seeded RNG only:
//! - No rendering or platform dependencies
//! - Light orientation is a pure function of its inputs

pub mod outcome;
pub mod phase;
pub mod searchlight;
pub mod vehicle;
pub mod wobble;

pub use outcome::Outcome;
pub use phase::{Phase, PhaseTimer};
pub use searchlight::{LightFrame, LightRig, Searchlight, light_orientation, look_rotation, point_at};
pub use vehicle::Vehicle;
pub use wobble::Wobble;
