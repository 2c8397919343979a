//! Move directions and their parsing.
//!
//! The typed `Direction` enum cannot hold an unrecognized value, so the
//! invalid-direction error surfaces where untyped input is converted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::EngineError;

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All four directions, in numeric-code order.
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Numeric code: 0=left, 1=right, 2=up, 3=down.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Parse `left`/`right`/`up`/`down` or `l`/`r`/`u`/`d`, case-insensitive.
    ///
    /// ```
    /// use rust_2048::core::{Direction, EngineError};
    ///
    /// assert_eq!("Up".parse::<Direction>(), Ok(Direction::Up));
    /// assert_eq!(" l ".parse::<Direction>(), Ok(Direction::Left));
    /// assert!(matches!(
    ///     "diagonal".parse::<Direction>(),
    ///     Err(EngineError::InvalidDirection(_))
    /// ));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            _ => Err(EngineError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(code as usize)
            .copied()
            .ok_or_else(|| EngineError::InvalidDirection(code.to_string()))
    }
}
