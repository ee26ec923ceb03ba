//! Read-only board views for renderers.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::grid::{AbilityMarker, Cell};
use crate::core::Position;
use crate::pieces::Piece;

/// An immutable copy of the grid at one moment.
///
/// Cloning shares structure with the live board, so taking one per frame
/// is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    width: u8,
    height: u8,
    cells: Vector<Cell>,
}

impl BoardSnapshot {
    pub(crate) fn new(width: u8, height: u8, cells: Vector<Cell>) -> Self {
        Self { width, height, cells }
    }

    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// The cell at a position, `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        if pos.x < 0 || pos.y < 0 || pos.x >= i32::from(self.width) || pos.y >= i32::from(self.height) {
            return None;
        }
        self.cells.get(pos.y as usize * usize::from(self.width) + pos.x as usize)
    }

    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cell(pos).and_then(|c| c.piece.as_ref())
    }

    #[must_use]
    pub fn marker_at(&self, pos: Position) -> Option<&AbilityMarker> {
        self.cell(pos).and_then(|c| c.marker.as_ref())
    }

    /// Every cell with its position, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        let width = usize::from(self.width);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, c)| (Position::new((i % width) as i32, (i / width) as i32), c))
    }
}
