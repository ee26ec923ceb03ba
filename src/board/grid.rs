//! The board grid.
//!
//! A fixed-size, row-major grid of `Cell`s. Each cell holds at most one
//! piece and at most one ability marker. The board knows nothing about
//! turns, elixir, or what a marker will do when its fuse runs out.
//!
//! Cells are stored in an `im::Vector`, so `snapshot()` is O(1) and a
//! renderer can hold a frame's view while the engine keeps mutating.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::snapshot::BoardSnapshot;
use crate::core::{BoardError, Position, Side};
use crate::effects::{AbilityId, AbilityKind};
use crate::pieces::{Piece, PieceId, PieceType};

/// Marker left on a cell by an ability waiting to resolve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AbilityMarker {
    pub id: AbilityId,
    pub kind: AbilityKind,
    pub owner: Side,
}

/// One grid cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub piece: Option<Piece>,
    pub marker: Option<AbilityMarker>,
}

impl Cell {
    /// Check if the cell has neither piece nor marker.
    #[must_use]
    pub fn is_vacant(&self) -> bool {
        self.piece.is_none() && self.marker.is_none()
    }
}

/// Fixed-size game board.
///
/// ## Usage
///
/// ```
/// use rune_rift::board::Board;
/// use rune_rift::core::{Position, Side};
/// use rune_rift::pieces::PieceType;
///
/// let mut board = Board::new(8, 8);
/// board.spawn(Side::White, PieceType::Knight, Position::new(1, 0)).unwrap();
///
/// let captured = board.move_piece(Position::new(1, 0), Position::new(2, 2)).unwrap();
/// assert!(captured.is_none());
/// assert_eq!(board.piece_at(Position::new(2, 2)).unwrap().piece_type, PieceType::Knight);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    cells: Vector<Cell>,
    next_piece_id: u32,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(width: u8, height: u8) -> Self {
        let count = usize::from(width) * usize::from(height);
        Self {
            width,
            height,
            cells: std::iter::repeat(Cell::default()).take(count).collect(),
            next_piece_id: 0,
        }
    }

    #[must_use]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Length of the longer side, the furthest any line can run.
    #[must_use]
    pub fn span(&self) -> i32 {
        i32::from(self.width.max(self.height))
    }

    /// Check if a position lies on the board.
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < i32::from(self.width) && pos.y < i32::from(self.height)
    }

    /// `InvalidPosition` unless the position lies on the board.
    pub fn check(&self, pos: Position) -> Result<(), BoardError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(BoardError::InvalidPosition {
                position: pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, pos: Position) -> Result<usize, BoardError> {
        self.check(pos)?;
        Ok(pos.y as usize * usize::from(self.width) + pos.x as usize)
    }

    fn position_of(&self, index: usize) -> Position {
        let width = usize::from(self.width);
        Position::new((index % width) as i32, (index / width) as i32)
    }

    /// The cell at a position, `None` off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        let index = self.index(pos).ok()?;
        self.cells.get(index)
    }

    fn cell_mut(&mut self, pos: Position) -> Result<&mut Cell, BoardError> {
        let index = self.index(pos)?;
        self.cells.get_mut(index).ok_or(BoardError::InvalidPosition {
            position: pos,
            width: self.width,
            height: self.height,
        })
    }

    // === Pieces ===

    /// The piece at a position, `None` if empty or off the board.
    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cell(pos).and_then(|c| c.piece.as_ref())
    }

    /// Allocate a new piece ID.
    pub fn alloc_piece_id(&mut self) -> PieceId {
        let id = PieceId::new(self.next_piece_id);
        self.next_piece_id += 1;
        id
    }

    /// Create a new piece and place it.
    pub fn spawn(&mut self, side: Side, piece_type: PieceType, pos: Position) -> Result<PieceId, BoardError> {
        self.check(pos)?;
        if self.piece_at(pos).is_some() {
            return Err(BoardError::Occupied(pos));
        }
        let id = self.alloc_piece_id();
        self.place(Piece::new(id, side, piece_type), pos)?;
        Ok(id)
    }

    /// Put a piece on an empty cell.
    pub fn place(&mut self, piece: Piece, pos: Position) -> Result<(), BoardError> {
        let cell = self.cell_mut(pos)?;
        if cell.piece.is_some() {
            return Err(BoardError::Occupied(pos));
        }
        cell.piece = Some(piece);
        Ok(())
    }

    /// Take the piece off a cell.
    pub fn remove(&mut self, pos: Position) -> Result<Option<Piece>, BoardError> {
        Ok(self.cell_mut(pos)?.piece.take())
    }

    /// Move a piece, removing and returning whatever occupied `dst`.
    ///
    /// The moved piece is marked as having moved. Legality is the
    /// resolver's concern; the board only enforces bounds and a non-empty
    /// source.
    pub fn move_piece(&mut self, src: Position, dst: Position) -> Result<Option<Piece>, BoardError> {
        self.check(src)?;
        self.check(dst)?;
        if self.piece_at(src).is_none() {
            return Err(BoardError::Empty(src));
        }
        if src == dst {
            return Ok(None);
        }

        let mut piece = self.remove(src)?.ok_or(BoardError::Empty(src))?;
        piece.mark_moved();
        let captured = self.remove(dst)?;
        self.place(piece, dst)?;
        Ok(captured)
    }

    /// Where a piece currently stands.
    #[must_use]
    pub fn find(&self, id: PieceId) -> Option<Position> {
        self.pieces().find(|(_, p)| p.id == id).map(|(pos, _)| pos)
    }

    /// All pieces in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(i, c)| c.piece.as_ref().map(|p| (self.position_of(i), p)))
    }

    /// One side's pieces in row-major order.
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.side == side)
    }

    /// Check if a side still has a piece of the given type.
    #[must_use]
    pub fn has_piece(&self, side: Side, piece_type: PieceType) -> bool {
        self.pieces_of(side).any(|(_, p)| p.piece_type == piece_type)
    }

    /// Number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces().count()
    }

    // === Markers ===

    /// The ability marker at a position.
    #[must_use]
    pub fn marker_at(&self, pos: Position) -> Option<&AbilityMarker> {
        self.cell(pos).and_then(|c| c.marker.as_ref())
    }

    /// Put a marker on a cell that has none.
    pub fn place_marker(&mut self, pos: Position, marker: AbilityMarker) -> Result<(), BoardError> {
        let cell = self.cell_mut(pos)?;
        if cell.marker.is_some() {
            return Err(BoardError::MarkerPresent(pos));
        }
        cell.marker = Some(marker);
        Ok(())
    }

    /// Remove and return a cell's marker.
    pub fn clear_marker(&mut self, pos: Position) -> Result<Option<AbilityMarker>, BoardError> {
        Ok(self.cell_mut(pos)?.marker.take())
    }

    /// Remove every marker, returning how many were cleared.
    pub fn clear_markers(&mut self) -> usize {
        let mut cleared = 0;
        for cell in self.cells.iter_mut() {
            if cell.marker.take().is_some() {
                cleared += 1;
            }
        }
        cleared
    }

    /// Check if some on-board cell can take a new marker.
    #[must_use]
    pub fn has_unmarked_cell(&self) -> bool {
        self.cells.iter().any(|c| c.marker.is_none())
    }

    // === Geometry ===

    /// Every position on the board in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.cells.len()).map(|i| self.position_of(i))
    }

    /// Positions within Chebyshev distance `radius` of `center`, clipped to
    /// the board, in row-major order.
    #[must_use]
    pub fn cells_in_radius(&self, center: Position, radius: u8) -> Vec<Position> {
        let r = i32::from(radius);
        let mut out = Vec::with_capacity(((2 * r + 1) * (2 * r + 1)) as usize);
        for dy in -r..=r {
            for dx in -r..=r {
                let pos = center.offset(dx, dy);
                if self.contains(pos) {
                    out.push(pos);
                }
            }
        }
        out
    }

    /// Immutable view of the current grid.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::new(self.width, self.height, self.cells.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_empty() {
        let board = Board::new(8, 8);

        assert_eq!(board.piece_count(), 0);
        assert_eq!(board.positions().count(), 64);
        assert!(board.piece_at(Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_contains() {
        let board = Board::new(8, 6);

        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(7, 5)));
        assert!(!board.contains(Position::new(8, 0)));
        assert!(!board.contains(Position::new(0, 6)));
        assert!(!board.contains(Position::new(-1, 2)));
    }

    #[test]
    fn test_spawn_allocates_ids() {
        let mut board = Board::new(8, 8);

        let a = board.spawn(Side::White, PieceType::Knight, Position::new(0, 0)).unwrap();
        let b = board.spawn(Side::Black, PieceType::Witch, Position::new(1, 0)).unwrap();

        assert_eq!(a, PieceId::new(0));
        assert_eq!(b, PieceId::new(1));
        assert_eq!(board.find(b), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_spawn_occupied() {
        let mut board = Board::new(8, 8);
        board.spawn(Side::White, PieceType::Knight, Position::new(0, 0)).unwrap();

        let err = board.spawn(Side::Black, PieceType::Knight, Position::new(0, 0)).unwrap_err();
        assert_eq!(err, BoardError::Occupied(Position::new(0, 0)));
    }

    #[test]
    fn test_out_of_bounds_operations() {
        let mut board = Board::new(8, 8);
        let off = Position::new(8, 8);

        assert!(matches!(board.remove(off), Err(BoardError::InvalidPosition { .. })));
        assert!(matches!(
            board.move_piece(Position::new(0, 0), off),
            Err(BoardError::InvalidPosition { .. })
        ));
        let piece = Piece::new(PieceId::new(0), Side::White, PieceType::Knight);
        assert!(matches!(board.place(piece, off), Err(BoardError::InvalidPosition { .. })));
    }

    #[test]
    fn test_move_captures_occupant() {
        let mut board = Board::new(8, 8);
        board.spawn(Side::White, PieceType::Knight, Position::new(0, 0)).unwrap();
        board.spawn(Side::Black, PieceType::Witch, Position::new(2, 1)).unwrap();

        let captured = board.move_piece(Position::new(0, 0), Position::new(2, 1)).unwrap();

        assert_eq!(captured.unwrap().piece_type, PieceType::Witch);
        let mover = board.piece_at(Position::new(2, 1)).unwrap();
        assert_eq!(mover.piece_type, PieceType::Knight);
        assert!(mover.status.has_moved);
        assert!(board.piece_at(Position::new(0, 0)).is_none());
    }

    #[test]
    fn test_move_from_empty() {
        let mut board = Board::new(8, 8);
        let err = board.move_piece(Position::new(3, 3), Position::new(3, 4)).unwrap_err();
        assert_eq!(err, BoardError::Empty(Position::new(3, 3)));
    }

    #[test]
    fn test_cells_in_radius_clipped() {
        let board = Board::new(8, 8);

        assert_eq!(board.cells_in_radius(Position::new(4, 4), 1).len(), 9);
        assert_eq!(
            board.cells_in_radius(Position::new(0, 0), 1),
            vec![
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(0, 1),
                Position::new(1, 1)
            ]
        );
        assert_eq!(board.cells_in_radius(Position::new(7, 3), 1).len(), 6);
        assert_eq!(board.cells_in_radius(Position::new(4, 4), 0), vec![Position::new(4, 4)]);
    }

    #[test]
    fn test_markers() {
        let mut board = Board::new(8, 8);
        let pos = Position::new(3, 3);
        let marker = AbilityMarker {
            id: AbilityId::new(0),
            kind: AbilityKind::Bomb,
            owner: Side::White,
        };

        board.place_marker(pos, marker).unwrap();
        assert_eq!(board.marker_at(pos), Some(&marker));
        assert_eq!(board.place_marker(pos, marker), Err(BoardError::MarkerPresent(pos)));

        assert_eq!(board.clear_marker(pos).unwrap(), Some(marker));
        assert!(board.marker_at(pos).is_none());
    }

    #[test]
    fn test_clear_markers() {
        let mut board = Board::new(4, 4);
        for x in 0..3 {
            let marker = AbilityMarker {
                id: AbilityId::new(x as u32),
                kind: AbilityKind::Bomb,
                owner: Side::Black,
            };
            board.place_marker(Position::new(x, 0), marker).unwrap();
        }

        assert_eq!(board.clear_markers(), 3);
        assert!(board.positions().all(|p| board.marker_at(p).is_none()));
    }

    #[test]
    fn test_pieces_of_and_has_piece() {
        let mut board = Board::new(8, 8);
        board.spawn(Side::White, PieceType::RoyalGiant, Position::new(4, 0)).unwrap();
        board.spawn(Side::Black, PieceType::RoyalGiant, Position::new(4, 7)).unwrap();
        board.spawn(Side::White, PieceType::Knight, Position::new(1, 0)).unwrap();

        assert_eq!(board.pieces_of(Side::White).count(), 2);
        assert!(board.has_piece(Side::Black, PieceType::RoyalGiant));
        assert!(!board.has_piece(Side::Black, PieceType::Knight));
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let mut board = Board::new(8, 8);
        board.spawn(Side::White, PieceType::Knight, Position::new(1, 0)).unwrap();

        let before = board.snapshot();
        board.move_piece(Position::new(1, 0), Position::new(2, 2)).unwrap();

        assert!(before.piece_at(Position::new(1, 0)).is_some());
        assert!(before.piece_at(Position::new(2, 2)).is_none());
    }
}
