//! In-memory session checkpoints.
//!
//! A snapshot captures everything needed to resume a seeded session
//! exactly: the same future moves produce the same spawns. Snapshots are
//! plain values; writing them anywhere is left to the caller.

use serde::{Deserialize, Serialize};

use crate::core::{Board, EngineConfig, EngineError, GameRng, GameRngState, Result};
use crate::rules::is_game_over;

use super::controller::Session;
use super::phase::Phase;

/// Serializable state of a `Session<GameRng>`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub config: EngineConfig,
    pub board: Board,
    pub phase: Phase,
    pub score: u64,
    pub moves: u32,
    pub rng: GameRngState,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`SessionSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Session<GameRng> {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            config: self.config.clone(),
            board: self.board,
            phase: self.phase,
            score: self.score,
            moves: self.moves,
            rng: self.source.state(),
        }
    }

    /// Rebuild a session from a snapshot.
    ///
    /// The config and every board cell are validated, and the phase must
    /// agree with the board: `Ready` needs an empty board, `Playing` a board
    /// with a legal move and `GameOver` one without.
    pub fn restore(snapshot: SessionSnapshot) -> Result<Self> {
        let board = Board::try_from_rows(snapshot.board.into_rows())?;
        let mismatch = match snapshot.phase {
            Phase::Ready => board != Board::EMPTY,
            Phase::Playing => is_game_over(board),
            Phase::GameOver => !is_game_over(board),
        };
        if mismatch {
            return Err(EngineError::Snapshot(format!(
                "board does not match phase {}",
                snapshot.phase
            )));
        }

        let mut session = Session::with_source(snapshot.config, GameRng::from_state(&snapshot.rng))?;
        session.board = board;
        session.phase = snapshot.phase;
        session.score = snapshot.score;
        session.moves = snapshot.moves;
        Ok(session)
    }
}
