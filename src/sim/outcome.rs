//! Win/loss resolution

use serde::{Deserialize, Serialize};

/// Result of the run so far. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    Playing,
    /// Climbed past the exit
    Won,
    /// Moved while the lights were hot
    Lost,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        self != Outcome::Playing
    }

    /// Outcome after the vehicle moved this tick.
    ///
    /// Capture wins over escape when both happen on the same tick.
    pub fn after_move(self, is_safe: bool, player_y: f32, win_y: f32) -> Outcome {
        match self {
            Outcome::Playing if !is_safe => Outcome::Lost,
            Outcome::Playing if player_y > win_y => Outcome::Won,
            other => other,
        }
    }

    /// Status line shown once the run is over
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Playing => None,
            Outcome::Won => Some("You have escaped! Congratulations!"),
            Outcome::Lost => Some("You were caught... Game over!"),
        }
    }
}
