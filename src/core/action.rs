//! Action representation and match history records.
//!
//! An `Action` is a player's intent: move a piece, or activate an ability
//! on a target cell. Once the engine accepts and applies it, the outcome is
//! captured in an `ActionRecord` and appended to the match history.

use serde::{Deserialize, Serialize};

use super::position::Position;
use super::side::Side;
use crate::effects::AbilityKind;
use crate::pieces::{Piece, PieceId, PieceType};

/// A player intent.
///
/// ## Example
///
/// ```
/// use rune_rift::core::{Action, Position};
/// use rune_rift::effects::AbilityKind;
///
/// let advance = Action::movement(Position::new(4, 1), Position::new(4, 3));
/// let bomb = Action::ability(AbilityKind::Bomb, Position::new(3, 5));
///
/// assert!(advance.is_move());
/// assert!(!bomb.is_move());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move the piece at `from` to `to`, capturing any enemy there.
    Move { from: Position, to: Position },

    /// Activate an ability on `target`.
    Ability { kind: AbilityKind, target: Position },
}

impl Action {
    /// Create a move action.
    #[must_use]
    pub const fn movement(from: Position, to: Position) -> Self {
        Self::Move { from, to }
    }

    /// Create an ability action.
    #[must_use]
    pub const fn ability(kind: AbilityKind, target: Position) -> Self {
        Self::Ability { kind, target }
    }

    /// Check if this is a move.
    #[must_use]
    pub const fn is_move(&self) -> bool {
        matches!(self, Self::Move { .. })
    }
}

/// What kind of ply a history entry describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    /// Moved onto an empty cell.
    Move,
    /// Moved onto an enemy piece, removing it.
    Capture,
    /// Spent elixir on an ability.
    ActivateAbility,
}

/// The outcome of a successfully applied move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// The piece that moved.
    pub piece: PieceId,

    /// Its type.
    pub piece_type: PieceType,

    /// Its side.
    pub side: Side,

    pub from: Position,
    pub to: Position,

    /// The enemy piece removed by displacement, if any.
    pub captured: Option<Piece>,
}

impl AppliedMove {
    /// History kind for this move.
    #[must_use]
    pub fn kind(&self) -> ActionKind {
        if self.captured.is_some() {
            ActionKind::Capture
        } else {
            ActionKind::Move
        }
    }
}

/// A recorded ply.
///
/// The history is append-only. It answers questions such as "has this
/// piece moved" and rebuilds the captured-piece tally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// Ply number (first ply is 1).
    pub ply: u32,

    /// The side that acted.
    pub side: Side,

    pub kind: ActionKind,

    /// Source cell; `None` for ability activations.
    pub from: Option<Position>,

    /// Destination cell or ability target.
    pub to: Position,

    /// Piece that acted, for moves.
    pub piece: Option<PieceId>,

    /// Type of the piece removed by this ply's displacement.
    pub captured: Option<PieceType>,

    /// Ability activated, for `ActivateAbility` plies.
    pub ability: Option<AbilityKind>,
}

impl ActionRecord {
    /// Record a move or capture.
    #[must_use]
    pub fn from_move(ply: u32, applied: &AppliedMove) -> Self {
        Self {
            ply,
            side: applied.side,
            kind: applied.kind(),
            from: Some(applied.from),
            to: applied.to,
            piece: Some(applied.piece),
            captured: applied.captured.as_ref().map(|p| p.piece_type),
            ability: None,
        }
    }

    /// Record an ability activation.
    #[must_use]
    pub fn from_ability(ply: u32, side: Side, kind: AbilityKind, target: Position) -> Self {
        Self {
            ply,
            side,
            kind: ActionKind::ActivateAbility,
            from: None,
            to: target,
            piece: None,
            captured: None,
            ability: Some(kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(captured: Option<Piece>) -> AppliedMove {
        AppliedMove {
            piece: PieceId::new(3),
            piece_type: PieceType::Knight,
            side: Side::White,
            from: Position::new(1, 0),
            to: Position::new(2, 2),
            captured,
        }
    }

    #[test]
    fn test_action_constructors() {
        let m = Action::movement(Position::new(0, 1), Position::new(0, 2));
        assert_eq!(
            m,
            Action::Move {
                from: Position::new(0, 1),
                to: Position::new(0, 2)
            }
        );
        assert!(m.is_move());
        assert!(!Action::ability(AbilityKind::Bomb, Position::new(0, 0)).is_move());
    }

    #[test]
    fn test_applied_move_kind() {
        assert_eq!(applied(None).kind(), ActionKind::Move);

        let victim = Piece::new(PieceId::new(9), Side::Black, PieceType::Witch);
        assert_eq!(applied(Some(victim)).kind(), ActionKind::Capture);
    }

    #[test]
    fn test_record_from_move() {
        let victim = Piece::new(PieceId::new(9), Side::Black, PieceType::Witch);
        let record = ActionRecord::from_move(5, &applied(Some(victim)));

        assert_eq!(record.ply, 5);
        assert_eq!(record.kind, ActionKind::Capture);
        assert_eq!(record.from, Some(Position::new(1, 0)));
        assert_eq!(record.piece, Some(PieceId::new(3)));
        assert_eq!(record.captured, Some(PieceType::Witch));
        assert_eq!(record.ability, None);
    }

    #[test]
    fn test_record_from_ability() {
        let record = ActionRecord::from_ability(2, Side::Black, AbilityKind::Bomb, Position::new(4, 4));

        assert_eq!(record.kind, ActionKind::ActivateAbility);
        assert_eq!(record.from, None);
        assert_eq!(record.to, Position::new(4, 4));
        assert_eq!(record.ability, Some(AbilityKind::Bomb));
    }

    #[test]
    fn test_action_serialization() {
        let action = Action::ability(AbilityKind::Bomb, Position::new(3, 3));
        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }
}
