//! The session state machine.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::core::{Board, Direction, EngineConfig, EngineError, GameRng, Result, TileSource};
use crate::rules::{create_board_with, is_game_over, move_board_scored, spawn_tile_with, Spawn};

use super::phase::Phase;

/// What a single `play` call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// Direction requested.
    pub direction: Direction,

    /// False for a no-op: nothing slid or merged, nothing spawned.
    pub changed: bool,

    /// Score gained from merges in this move.
    pub gained: u64,

    /// The tile spawned after the move, if any.
    pub spawned: Option<Spawn>,

    /// True if this move ended the game.
    pub game_over: bool,
}

impl MoveOutcome {
    fn noop(direction: Direction) -> Self {
        Self {
            direction,
            changed: false,
            gained: 0,
            spawned: None,
            game_over: false,
        }
    }
}

/// A single game: board, phase, score and the random source for spawns.
///
/// ```
/// use rust_2048::core::{Direction, EngineConfig};
/// use rust_2048::session::{Phase, Session};
///
/// let mut session = Session::new(EngineConfig::new().with_seed(7)).unwrap();
/// assert_eq!(session.phase(), Phase::Ready);
///
/// session.start();
/// assert_eq!(session.phase(), Phase::Playing);
/// assert_eq!(session.board().count_empty(), 14);
///
/// let outcome = session.play(Direction::Left).unwrap();
/// if outcome.changed {
///     assert!(outcome.spawned.is_some());
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Session<S: TileSource = GameRng> {
    pub(super) config: EngineConfig,
    pub(super) source: S,
    pub(super) board: Board,
    pub(super) phase: Phase,
    pub(super) score: u64,
    pub(super) moves: u32,
}

impl Session<GameRng> {
    /// Create a session seeded from `config.seed`.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = GameRng::new(config.seed);
        Self::with_source(config, rng)
    }
}

impl<S: TileSource> Session<S> {
    /// Create a session drawing spawns from `source`.
    ///
    /// The session starts in `Ready` with an empty board.
    pub fn with_source(config: EngineConfig, source: S) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            source,
            board: Board::EMPTY,
            phase: Phase::Ready,
            score: 0,
            moves: 0,
        })
    }

    /// Current board.
    #[must_use]
    pub fn board(&self) -> Board {
        self.board
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Total merge score since the last (re)start.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    /// Moves that changed the board since the last (re)start.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Leave `Ready` with a freshly created board.
    ///
    /// Outside `Ready` this is the same as [`Session::restart`].
    pub fn start(&mut self) -> Board {
        if self.phase != Phase::Ready {
            return self.restart();
        }
        self.deal();
        info!(board = ?self.board.rows(), "session started");
        self.board
    }

    /// Discard the current game and begin a new one.
    pub fn restart(&mut self) -> Board {
        info!(score = self.score, moves = self.moves, "session restarted");
        self.deal();
        self.board
    }

    /// Apply one move.
    ///
    /// A no-op move leaves the session untouched and spawns nothing.
    /// Fails with `NotPlaying` unless the phase is `Playing`.
    pub fn play(&mut self, direction: Direction) -> Result<MoveOutcome> {
        if !self.phase.is_playing() {
            return Err(EngineError::NotPlaying(self.phase));
        }

        let (moved, gained) = move_board_scored(direction, self.board);
        if moved == self.board {
            trace!(%direction, "no-op move");
            return Ok(MoveOutcome::noop(direction));
        }

        let spawned = spawn_tile_with(moved, &mut self.source, self.config.four_probability);
        self.board = match spawned {
            Some(spawn) => moved.with_tile(spawn.row, spawn.col, spawn.value),
            None => moved,
        };
        self.score += gained;
        self.moves += 1;

        let game_over = is_game_over(self.board);
        debug!(%direction, gained, score = self.score, ?spawned, "move applied");
        if game_over {
            self.phase = Phase::GameOver;
            info!(
                score = self.score,
                moves = self.moves,
                max_tile = self.board.max_tile(),
                "game over"
            );
        }

        Ok(MoveOutcome {
            direction,
            changed: true,
            gained,
            spawned,
            game_over,
        })
    }

    /// Parse `name` as a direction and play it.
    ///
    /// Unrecognized names fail with `InvalidDirection` and leave the
    /// session untouched.
    pub fn play_named(&mut self, name: &str) -> Result<MoveOutcome> {
        let direction = name.parse::<Direction>()?;
        self.play(direction)
    }

    fn deal(&mut self) {
        self.board = create_board_with(&mut self.source, &self.config);
        self.score = 0;
        self.moves = 0;
        self.phase = if is_game_over(self.board) {
            Phase::GameOver
        } else {
            Phase::Playing
        };
    }
}
