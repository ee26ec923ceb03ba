//! Move resolution: legal destinations and validated application.
//!
//! The resolver expands a piece's movement profile against a board. It is
//! the only place pattern semantics live; the board stores pieces and the
//! rule table stores data.
//!
//! ## Enumeration order
//!
//! Candidates come out in pattern declaration order, each pattern walking
//! outward one step at a time. A cell reachable through several patterns
//! is listed once, at its first occurrence.

use tracing::debug;

use crate::board::Board;
use crate::core::{AppliedMove, Position, RuleViolation, Side};
use crate::pieces::{MoveMode, MovementProfile, PatternKind, Piece, RuleTable};

/// Evaluates movement rules for one rule table.
#[derive(Clone, Copy, Debug)]
pub struct MoveResolver<'a> {
    table: &'a RuleTable,
}

impl<'a> MoveResolver<'a> {
    #[must_use]
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// The rule table this resolver reads.
    #[must_use]
    pub fn table(&self) -> &'a RuleTable {
        self.table
    }

    /// Legal destinations for the piece at `pos`.
    ///
    /// Empty when the cell is empty, off the board, or the piece's type has
    /// no profile. Never contains a friendly-occupied or off-board cell.
    #[must_use]
    pub fn legal_actions(&self, board: &Board, pos: Position) -> Vec<Position> {
        let Some(piece) = board.piece_at(pos) else {
            return Vec::new();
        };
        let Some(profile) = self.table.profile(piece.piece_type) else {
            return Vec::new();
        };
        Self::destinations(board, pos, piece, profile, true)
    }

    /// Check if a side can move anything at all.
    #[must_use]
    pub fn has_legal_action(&self, board: &Board, side: Side) -> bool {
        board
            .pieces_of(side)
            .any(|(pos, _)| !self.legal_actions(board, pos).is_empty())
    }

    /// Validate a move for `side` and apply it.
    ///
    /// Nothing on the board changes unless the move is legal.
    pub fn validate_and_apply(
        &self,
        board: &mut Board,
        side: Side,
        from: Position,
        to: Position,
    ) -> Result<AppliedMove, RuleViolation> {
        board.check(from)?;
        board.check(to)?;

        let piece = *board.piece_at(from).ok_or(RuleViolation::EmptySource(from))?;
        if piece.side != side {
            return Err(RuleViolation::WrongSide {
                position: from,
                owner: piece.side,
            });
        }
        let profile = self
            .table
            .profile(piece.piece_type)
            .ok_or(RuleViolation::MissingProfile(piece.piece_type))?;

        if !Self::destinations(board, from, &piece, profile, true).contains(&to) {
            if let Some(target) = board.piece_at(to) {
                let restricted = target.is_enemy_of(&piece)
                    && !profile.capture.permits(target.piece_type)
                    && Self::destinations(board, from, &piece, profile, false).contains(&to);
                if restricted {
                    return Err(RuleViolation::CaptureRestricted {
                        attacker: piece.piece_type,
                        target: target.piece_type,
                    });
                }
            }
            return Err(RuleViolation::IllegalDestination {
                piece_type: piece.piece_type,
                from,
                to,
            });
        }

        let captured = board.move_piece(from, to)?;
        debug!(
            side = %side,
            piece = %piece.piece_type,
            %from,
            %to,
            captured = ?captured.map(|p| p.piece_type),
            "applied move"
        );

        Ok(AppliedMove {
            piece: piece.id,
            piece_type: piece.piece_type,
            side,
            from,
            to,
            captured,
        })
    }

    /// Expand a profile from `origin`.
    ///
    /// With `enforce_capture_rule` off, enemy cells count as capturable
    /// regardless of the type's capture rule; used to tell a restricted
    /// capture apart from an unreachable cell.
    fn destinations(
        board: &Board,
        origin: Position,
        piece: &Piece,
        profile: &MovementProfile,
        enforce_capture_rule: bool,
    ) -> Vec<Position> {
        let mut out: Vec<Position> = Vec::new();
        let push = |pos: Position, out: &mut Vec<Position>| {
            if !out.contains(&pos) {
                out.push(pos);
            }
        };
        let can_take = |target: &Piece| {
            target.is_enemy_of(piece)
                && (!enforce_capture_rule || profile.capture.permits(target.piece_type))
        };

        for pattern in &profile.patterns {
            if pattern.initial_only && piece.status.has_moved {
                continue;
            }
            let dx = pattern.dx;
            let dy = pattern.dy * piece.side.forward();

            for step in 1..=pattern.max_steps(board.span()) {
                let pos = origin.offset(dx * step, dy * step);
                if !board.contains(pos) {
                    break;
                }

                match (pattern.kind, board.piece_at(pos)) {
                    (PatternKind::Ranged, None) => continue,
                    (PatternKind::Ranged, Some(target)) => {
                        if pattern.mode != MoveMode::MoveOnly && can_take(target) {
                            push(pos, &mut out);
                        }
                        break;
                    }
                    (_, None) => {
                        if pattern.mode != MoveMode::CaptureOnly {
                            push(pos, &mut out);
                        }
                    }
                    (_, Some(target)) => {
                        if pattern.mode != MoveMode::MoveOnly && can_take(target) {
                            push(pos, &mut out);
                        }
                        break;
                    }
                }
            }
        }

        out
    }
}
