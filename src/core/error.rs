//! Engine error type.
//!
//! Only two conditions are errors at the engine level: an unrecognized
//! direction and a malformed board handed to the checked constructor.
//! Spawning onto a full board is a no-op, never an error.

use crate::session::Phase;

/// Errors surfaced by the engine and the session controller.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A move direction that is not one of left, right, up or down.
    #[error("invalid direction: {0:?}")]
    InvalidDirection(String),

    /// A cell value that is neither 0 nor a power of two.
    #[error("invalid tile {value} at row {row}, column {col}")]
    InvalidTile { row: usize, col: usize, value: u32 },

    /// Rejected engine configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A move was attempted while the session is not accepting moves.
    #[error("session is not playing (phase: {0})")]
    NotPlaying(Phase),

    /// Snapshot bytes could not be encoded or decoded.
    #[error("snapshot error: {0}")]
    Snapshot(String),
}

impl From<bincode::Error> for EngineError {
    fn from(err: bincode::Error) -> Self {
        EngineError::Snapshot(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::InvalidDirection("sideways".into());
        assert_eq!(err.to_string(), "invalid direction: \"sideways\"");

        let err = EngineError::InvalidTile { row: 1, col: 2, value: 3 };
        assert_eq!(err.to_string(), "invalid tile 3 at row 1, column 2");

        let err = EngineError::NotPlaying(Phase::GameOver);
        assert_eq!(err.to_string(), "session is not playing (phase: game over)");
    }
}
