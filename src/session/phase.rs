//! Session lifecycle phases.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session is in its lifecycle.
///
/// `Ready -> Playing` on start, `Playing -> Playing` on each move that
/// leaves a legal move, `Playing -> GameOver` when none remains. A restart
/// from any phase lands in a fresh `Playing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Created but not started; the board is empty.
    #[default]
    Ready,
    /// Accepting moves.
    Playing,
    /// No move can change the board.
    GameOver,
}

impl Phase {
    /// True while moves are accepted.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Phase::Playing)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Ready => "ready",
            Phase::Playing => "playing",
            Phase::GameOver => "game over",
        })
    }
}
