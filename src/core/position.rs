//! Grid coordinates.
//!
//! A `Position` is a pair of signed integer coordinates. Coordinates are
//! signed so that pattern offsets can be applied before bounds checking;
//! whether a position lies on the board is decided by the `Board`, never by
//! the position itself.
//!
//! ## Usage
//!
//! ```
//! use rune_rift::core::Position;
//!
//! let knight = Position::new(1, 1);
//! let landing = knight.offset(2, 1);
//!
//! assert_eq!(landing, Position::new(3, 2));
//! assert_eq!(knight.chebyshev(landing), 2);
//! ```

use serde::{Deserialize, Serialize};

/// A cell coordinate, origin at (0, 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Translate by an offset.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Chebyshev (king-move) distance to another position.
    #[must_use]
    pub fn chebyshev(self, other: Position) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
