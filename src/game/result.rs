//! Final match outcome.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::clock::format_clock;
use crate::core::{Side, SideMap};
use crate::pieces::PieceType;

/// Who won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    White,
    Black,
    Draw,
}

impl Winner {
    #[must_use]
    pub const fn side(side: Side) -> Self {
        match side {
            Side::White => Winner::White,
            Side::Black => Winner::Black,
        }
    }

    /// The winning side, `None` for a draw.
    #[must_use]
    pub const fn winning_side(self) -> Option<Side> {
        match self {
            Winner::White => Some(Side::White),
            Winner::Black => Some(Side::Black),
            Winner::Draw => None,
        }
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Winner::White => "WHITE",
            Winner::Black => "BLACK",
            Winner::Draw => "DRAW",
        })
    }
}

/// Why the match ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    /// A royal piece left the board.
    Checkmate,
    /// A clock reached zero.
    Timeout,
    /// The side to move could do nothing.
    Draw,
    Resignation,
}

impl std::fmt::Display for EndReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            EndReason::Checkmate => "checkmate",
            EndReason::Timeout => "timeout",
            EndReason::Draw => "draw",
            EndReason::Resignation => "resignation",
        })
    }
}

/// Everything the results screen needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub winner: Winner,
    pub reason: EndReason,
    pub time_remaining: SideMap<Duration>,
    pub total_elapsed: Duration,
    pub plies: u32,

    /// Enemy pieces each side removed, in capture order.
    pub captured: SideMap<Vec<PieceType>>,
}

impl MatchResult {
    /// Check if a side won.
    #[must_use]
    pub fn is_winner(&self, side: Side) -> bool {
        self.winner.winning_side() == Some(side)
    }

    #[must_use]
    pub fn time_remaining(&self, side: Side) -> Duration {
        self.time_remaining[side]
    }

    #[must_use]
    pub fn captured(&self, side: Side) -> &[PieceType] {
        &self.captured[side]
    }

    /// A side's captures counted per type, in piece-type order, omitting
    /// types it never took.
    #[must_use]
    pub fn grouped_captures(&self, side: Side) -> Vec<(PieceType, usize)> {
        let captured = &self.captured[side];
        PieceType::ALL
            .into_iter()
            .map(|ty| (ty, captured.iter().filter(|&&c| c == ty).count()))
            .filter(|&(_, n)| n > 0)
            .collect()
    }
}

impl std::fmt::Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Winner::Draw => write!(f, "DRAW by {}", self.reason)?,
            winner => write!(f, "{winner} WINS by {}", self.reason)?,
        }
        write!(
            f,
            " after {} plies ({}), WHITE {} / BLACK {} remaining",
            self.plies,
            format_clock(self.total_elapsed),
            format_clock(self.time_remaining[Side::White]),
            format_clock(self.time_remaining[Side::Black]),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> MatchResult {
        MatchResult {
            winner: Winner::White,
            reason: EndReason::Checkmate,
            time_remaining: SideMap::new(|side| match side {
                Side::White => Duration::from_secs(412),
                Side::Black => Duration::from_secs(95),
            }),
            total_elapsed: Duration::from_secs(693),
            plies: 31,
            captured: SideMap::new(|side| match side {
                Side::White => vec![
                    PieceType::Knight,
                    PieceType::RoyalRecruits,
                    PieceType::Knight,
                    PieceType::RoyalGiant,
                ],
                Side::Black => vec![PieceType::Witch],
            }),
        }
    }

    #[test]
    fn test_grouped_captures() {
        let r = result();

        assert_eq!(
            r.grouped_captures(Side::White),
            vec![
                (PieceType::RoyalRecruits, 1),
                (PieceType::Knight, 2),
                (PieceType::RoyalGiant, 1)
            ]
        );
        assert_eq!(r.grouped_captures(Side::Black), vec![(PieceType::Witch, 1)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            result().to_string(),
            "WHITE WINS by checkmate after 31 plies (11:33), WHITE 6:52 / BLACK 1:35 remaining"
        );
    }

    #[test]
    fn test_winner() {
        let r = result();
        assert!(r.is_winner(Side::White));
        assert!(!r.is_winner(Side::Black));
        assert_eq!(Winner::Draw.winning_side(), None);
        assert_eq!(Winner::side(Side::Black), Winner::Black);
    }

    #[test]
    fn test_serialize() {
        let r = result();
        let json = serde_json::to_string(&r).unwrap();
        let restored: MatchResult = serde_json::from_str(&json).unwrap();
        assert_eq!(r, restored);
    }
}
