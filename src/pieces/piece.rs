//! Piece instances.
//!
//! `PieceType` is the static kind; a `Piece` is one unit on one board with
//! its own identity and per-match status. Pieces are owned by the `Board`
//! and disappear from it when captured.

use serde::{Deserialize, Serialize};

use super::kind::PieceType;
use crate::core::Side;

/// Unique identifier for a piece within a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl PieceId {
    /// Create a new piece ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PieceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({})", self.0)
    }
}

/// Mutable per-match status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceStatus {
    /// Set after the piece's first move. Gates `initial_only` patterns.
    pub has_moved: bool,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub side: Side,
    pub piece_type: PieceType,
    pub status: PieceStatus,
}

impl Piece {
    /// Create a piece that has not moved yet.
    #[must_use]
    pub fn new(id: PieceId, side: Side, piece_type: PieceType) -> Self {
        Self {
            id,
            side,
            piece_type,
            status: PieceStatus::default(),
        }
    }

    /// Check if two pieces are on opposite sides.
    #[must_use]
    pub fn is_enemy_of(&self, other: &Piece) -> bool {
        self.side != other.side
    }

    /// Mark the piece as having moved.
    pub fn mark_moved(&mut self) {
        self.status.has_moved = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_piece_unmoved() {
        let piece = Piece::new(PieceId::new(1), Side::White, PieceType::Knight);
        assert!(!piece.status.has_moved);
    }

    #[test]
    fn test_mark_moved() {
        let mut piece = Piece::new(PieceId::new(1), Side::White, PieceType::Knight);
        piece.mark_moved();
        assert!(piece.status.has_moved);
    }

    #[test]
    fn test_is_enemy_of() {
        let a = Piece::new(PieceId::new(1), Side::White, PieceType::Knight);
        let b = Piece::new(PieceId::new(2), Side::Black, PieceType::Witch);
        let c = Piece::new(PieceId::new(3), Side::White, PieceType::Witch);

        assert!(a.is_enemy_of(&b));
        assert!(!a.is_enemy_of(&c));
    }

    #[test]
    fn test_piece_id_display() {
        assert_eq!(format!("{}", PieceId::new(12)), "Piece(12)");
    }
}
