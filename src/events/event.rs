//! Events published by a match.

use serde::{Deserialize, Serialize};

use crate::core::{Position, Side};
use crate::effects::PendingAbility;
use crate::game::MatchResult;
use crate::pieces::PieceType;

/// How a piece was removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CaptureCause {
    /// Displaced by an enemy move.
    Move,
    /// Caught in a resolving ability.
    Ability,
}

/// Discriminant of a `MatchEvent`, used as the subscription key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EventKind {
    MatchStarted,
    PieceMoved,
    Capture,
    AbilityActivated,
    AbilityResolved,
    TurnChanged,
    MatchEnded,
}

/// Something that happened in a match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// Pieces are laid out and `first` is to move.
    MatchStarted { first: Side },

    PieceMoved {
        ply: u32,
        side: Side,
        piece_type: PieceType,
        from: Position,
        to: Position,
    },

    /// A piece left the board. `by` is the side credited with it.
    Capture {
        by: Side,
        piece_type: PieceType,
        position: Position,
        cause: CaptureCause,
    },

    AbilityActivated { ply: u32, ability: PendingAbility },

    /// An ability went off, removing `captured` pieces.
    AbilityResolved { ability: PendingAbility, captured: usize },

    /// `active` is now to move; `ply` plies have been played.
    TurnChanged { ply: u32, active: Side },

    /// Final result. Published once.
    MatchEnded(MatchResult),
}

impl MatchEvent {
    /// The event's kind.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::MatchStarted { .. } => EventKind::MatchStarted,
            Self::PieceMoved { .. } => EventKind::PieceMoved,
            Self::Capture { .. } => EventKind::Capture,
            Self::AbilityActivated { .. } => EventKind::AbilityActivated,
            Self::AbilityResolved { .. } => EventKind::AbilityResolved,
            Self::TurnChanged { .. } => EventKind::TurnChanged,
            Self::MatchEnded(_) => EventKind::MatchEnded,
        }
    }
}
