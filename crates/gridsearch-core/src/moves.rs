//! The four cardinal moves.

use std::fmt;
use std::str::FromStr;

use crate::geom::Point;

/// A single unit step on the grid.
///
/// [`Move::ALL`] fixes the enumeration order every search uses when
/// expanding a cell: up, left, down, right.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Move {
    Up,
    Left,
    Down,
    Right,
}

impl Move {
    /// Expansion order shared by all strategies.
    pub const ALL: [Move; 4] = [Move::Up, Move::Left, Move::Down, Move::Right];

    /// [`ALL`](Self::ALL) reversed, for pushing onto a LIFO frontier so
    /// that pops come out in `ALL` order.
    pub const REVERSED: [Move; 4] = [Move::Right, Move::Down, Move::Left, Move::Up];

    /// Coordinate delta of this move.
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Move::Up => Point::new(0, -1),
            Move::Left => Point::new(-1, 0),
            Move::Down => Point::new(0, 1),
            Move::Right => Point::new(1, 0),
        }
    }

    /// Position reached by taking this move from `p`.
    #[inline]
    pub fn apply(self, p: Point) -> Point {
        p + self.delta()
    }

    /// The move that undoes this one.
    #[inline]
    pub const fn opposite(self) -> Move {
        match self {
            Move::Up => Move::Down,
            Move::Left => Move::Right,
            Move::Down => Move::Up,
            Move::Right => Move::Left,
        }
    }

    /// Upper-case label, e.g. `"UP"`.
    pub const fn label(self) -> &'static str {
        match self {
            Move::Up => "UP",
            Move::Left => "LEFT",
            Move::Down => "DOWN",
            Move::Right => "RIGHT",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a move label is not one of up/left/down/right.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown move \u{201c}{0}\u{201d}")]
pub struct ParseMoveError(pub String);

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Move::Up),
            "left" => Ok(Move::Left),
            "down" => Ok(Move::Down),
            "right" => Ok(Move::Right),
            _ => Err(ParseMoveError(s.to_string())),
        }
    }
}
