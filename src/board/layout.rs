//! Starting layouts.

use serde::{Deserialize, Serialize};

use super::grid::Board;
use crate::core::{BoardError, ConfigError, Position, Side};
use crate::pieces::PieceType;

/// Starting position: a back rank and an optional front rank per side.
///
/// White fills rows 0 and 1 left to right; Black fills the last two rows
/// with the same column order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub back_rank: Vec<PieceType>,

    #[serde(default)]
    pub front_rank: Vec<PieceType>,
}

impl Layout {
    /// Check row lengths against the board width.
    pub fn validate(&self, width: u8) -> Result<(), ConfigError> {
        let width = usize::from(width);
        if self.back_rank.len() != width {
            return Err(ConfigError::InvalidLayout(format!(
                "back rank has {} pieces, board is {} wide",
                self.back_rank.len(),
                width
            )));
        }
        if !self.front_rank.is_empty() && self.front_rank.len() != width {
            return Err(ConfigError::InvalidLayout(format!(
                "front rank has {} pieces, board is {} wide",
                self.front_rank.len(),
                width
            )));
        }
        Ok(())
    }

    /// Every type the layout places.
    pub fn piece_types(&self) -> impl Iterator<Item = PieceType> + '_ {
        self.back_rank.iter().chain(self.front_rank.iter()).copied()
    }

    /// Spawn both sides onto an empty board, White first.
    pub fn apply(&self, board: &mut Board) -> Result<(), BoardError> {
        let top = i32::from(board.height()) - 1;
        for side in Side::ALL {
            let (back_y, front_y) = match side {
                Side::White => (0, 1),
                Side::Black => (top, top - 1),
            };
            for (x, &piece_type) in self.back_rank.iter().enumerate() {
                board.spawn(side, piece_type, Position::new(x as i32, back_y))?;
            }
            for (x, &piece_type) in self.front_rank.iter().enumerate() {
                board.spawn(side, piece_type, Position::new(x as i32, front_y))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_layout() -> Layout {
        Layout {
            back_rank: vec![PieceType::Knight, PieceType::RoyalGiant],
            front_rank: vec![PieceType::RoyalRecruits, PieceType::RoyalRecruits],
        }
    }

    #[test]
    fn test_apply_places_both_sides() {
        let mut board = Board::new(2, 4);
        small_layout().apply(&mut board).unwrap();

        assert_eq!(board.piece_count(), 8);
        let white_king = board.piece_at(Position::new(1, 0)).unwrap();
        assert_eq!((white_king.side, white_king.piece_type), (Side::White, PieceType::RoyalGiant));

        let black_king = board.piece_at(Position::new(1, 3)).unwrap();
        assert_eq!((black_king.side, black_king.piece_type), (Side::Black, PieceType::RoyalGiant));

        let black_pawn = board.piece_at(Position::new(0, 2)).unwrap();
        assert_eq!(black_pawn.piece_type, PieceType::RoyalRecruits);
    }

    #[test]
    fn test_validate() {
        assert!(small_layout().validate(2).is_ok());
        assert!(small_layout().validate(3).is_err());

        let back_only = Layout {
            back_rank: vec![PieceType::Knight; 3],
            front_rank: Vec::new(),
        };
        assert!(back_only.validate(3).is_ok());
    }

    #[test]
    fn test_piece_types() {
        let types: Vec<_> = small_layout().piece_types().collect();
        assert_eq!(types.len(), 4);
        assert_eq!(types[0], PieceType::Knight);
    }
}
