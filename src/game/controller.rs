//! The match controller.
//!
//! `Match` owns the board, both elixir pools, the pending abilities and the
//! clocks, and is the only thing that mutates them. Every ply runs the same
//! sequence:
//!
//! 1. apply the move or activate the ability
//! 2. regenerate the mover's elixir
//! 3. tick ability fuses and resolve expired abilities
//! 4. check termination
//! 5. hand the turn to the other side
//!
//! A rejected submission returns its error and changes nothing. Once the
//! match is terminal every submission fails with `MatchOver`.

use std::time::Duration;

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::clock::MatchClock;
use super::result::{EndReason, MatchResult, Winner};
use crate::board::{Board, BoardSnapshot};
use crate::core::{
    AbilityError, Action, ActionRecord, AppliedMove, EngineError, MatchConfig, Position, RuleViolation, Side,
    SideMap,
};
use crate::effects::{AbilityKind, AbilityManager, AbilityResolution, ElixirPool, PendingAbility};
use crate::events::{CaptureCause, EventBus, MatchEvent};
use crate::pieces::{PieceType, RuleTable};
use crate::rules::MoveResolver;

/// Where the controller is in its cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Waiting for the active side to act.
    AwaitingMove,
    /// Fuses are being ticked at the end of a ply.
    AbilityTick,
    /// The match is over; state is frozen.
    Terminal,
}

/// A running match.
///
/// Built with [`MatchBuilder`](super::MatchBuilder).
#[derive(Debug)]
pub struct Match {
    config: MatchConfig,
    table: RuleTable,
    board: Board,
    elixir: SideMap<ElixirPool>,
    abilities: AbilityManager,
    clock: MatchClock,
    active: Side,
    phase: MatchPhase,

    /// Completed plies.
    ply: u32,

    history: Vector<ActionRecord>,
    captured: SideMap<Vec<PieceType>>,
    resigned: Option<Side>,
    result: Option<MatchResult>,
    events: EventBus,
}

impl Match {
    pub(crate) fn new(config: MatchConfig, table: RuleTable, board: Board) -> Self {
        let pool = ElixirPool::new(config.starting_elixir, config.max_elixir);
        let mut events = EventBus::new();
        events.publish(MatchEvent::MatchStarted { first: Side::White });
        info!(
            width = board.width(),
            height = board.height(),
            pieces = board.piece_count(),
            clock_seconds = config.clock_seconds,
            "match started"
        );

        Self {
            clock: MatchClock::new(config.starting_clock()),
            elixir: SideMap::with_value(pool),
            config,
            table,
            board,
            abilities: AbilityManager::new(),
            active: Side::White,
            phase: MatchPhase::AwaitingMove,
            ply: 0,
            history: Vector::new(),
            captured: SideMap::default(),
            resigned: None,
            result: None,
            events,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.table
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Immutable view of the grid for renderers.
    #[must_use]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == MatchPhase::Terminal
    }

    /// Number of completed plies.
    #[must_use]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The side to move.
    #[must_use]
    pub fn active_side(&self) -> Side {
        self.active
    }

    /// Legal destinations for the piece at `pos`.
    #[must_use]
    pub fn legal_actions(&self, pos: Position) -> Vec<Position> {
        MoveResolver::new(&self.table).legal_actions(&self.board, pos)
    }

    /// A side's elixir balance.
    #[must_use]
    pub fn elixir(&self, side: Side) -> u8 {
        self.elixir[side].balance()
    }

    #[must_use]
    pub fn elixir_pool(&self, side: Side) -> &ElixirPool {
        &self.elixir[side]
    }

    #[must_use]
    pub fn clock_remaining(&self, side: Side) -> Duration {
        self.clock.remaining(side)
    }

    #[must_use]
    pub fn clock(&self) -> &MatchClock {
        &self.clock
    }

    /// Abilities waiting on their fuse, in activation order.
    #[must_use]
    pub fn pending_abilities(&self) -> &[PendingAbility] {
        self.abilities.pending()
    }

    /// Every accepted ply, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    /// Enemy pieces a side has removed, in capture order.
    #[must_use]
    pub fn captured_by(&self, side: Side) -> &[PieceType] {
        &self.captured[side]
    }

    /// The final result, once the match is over.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    // === Events ===

    /// The event bus, for subscribing.
    pub fn events_mut(&mut self) -> &mut EventBus {
        &mut self.events
    }

    /// Take every event published since the last drain.
    pub fn drain_events(&mut self) -> Vec<MatchEvent> {
        self.events.drain()
    }

    // === Commands ===

    /// Submit either kind of action.
    pub fn submit(&mut self, side: Side, action: Action) -> Result<(), EngineError> {
        match action {
            Action::Move { from, to } => {
                self.submit_move(side, from, to)?;
            }
            Action::Ability { kind, target } => {
                self.submit_ability(side, kind, target)?;
            }
        }
        Ok(())
    }

    /// Move the piece at `from` to `to` for `side`.
    pub fn submit_move(&mut self, side: Side, from: Position, to: Position) -> Result<AppliedMove, RuleViolation> {
        let applied = self.try_move(side, from, to).inspect_err(|error| {
            debug!(side = %side, %from, %to, %error, "move rejected");
        })?;

        let ply = self.ply + 1;
        self.history.push_back(ActionRecord::from_move(ply, &applied));
        self.events.publish(MatchEvent::PieceMoved {
            ply,
            side,
            piece_type: applied.piece_type,
            from,
            to,
        });
        if let Some(piece) = applied.captured {
            self.credit_capture(side, piece.piece_type, to, CaptureCause::Move);
        }

        self.finish_ply(side);
        Ok(applied)
    }

    fn try_move(&mut self, side: Side, from: Position, to: Position) -> Result<AppliedMove, RuleViolation> {
        if self.is_over() {
            return Err(RuleViolation::MatchOver);
        }
        if side != self.active {
            return Err(RuleViolation::NotYourTurn {
                expected: self.active,
                actual: side,
            });
        }
        MoveResolver::new(&self.table).validate_and_apply(&mut self.board, side, from, to)
    }

    /// Activate an ability on `target` for `side`.
    pub fn submit_ability(
        &mut self,
        side: Side,
        kind: AbilityKind,
        target: Position,
    ) -> Result<PendingAbility, AbilityError> {
        let ability = self.try_ability(side, kind, target).inspect_err(|error| {
            debug!(side = %side, %kind, %target, %error, "ability rejected");
        })?;

        let ply = self.ply + 1;
        self.history
            .push_back(ActionRecord::from_ability(ply, side, kind, target));
        self.events.publish(MatchEvent::AbilityActivated { ply, ability });

        self.finish_ply(side);
        Ok(ability)
    }

    fn try_ability(&mut self, side: Side, kind: AbilityKind, target: Position) -> Result<PendingAbility, AbilityError> {
        if self.is_over() {
            return Err(AbilityError::MatchOver);
        }
        if side != self.active {
            return Err(AbilityError::NotYourTurn {
                expected: self.active,
                actual: side,
            });
        }
        let spec = *self.table.ability(kind).ok_or(AbilityError::Unavailable(kind))?;
        self.abilities.activate(
            &mut self.board,
            &mut self.elixir[side],
            side,
            kind,
            &spec,
            target,
            self.ply + 1,
        )
    }

    /// Concede. The opponent wins by resignation.
    pub fn resign(&mut self, side: Side) -> Result<(), RuleViolation> {
        if self.is_over() {
            return Err(RuleViolation::MatchOver);
        }
        self.resigned = Some(side);
        self.check_termination(self.active);
        Ok(())
    }

    /// Run the active side's clock for `elapsed` wall time.
    ///
    /// Ends the match by timeout as soon as the clock reaches zero.
    pub fn advance_clock(&mut self, elapsed: Duration) {
        if self.is_over() {
            return;
        }
        self.clock.debit(self.active, elapsed);
        if self.clock.is_flagged(self.active) {
            self.check_termination(self.active);
        }
    }

    // === Ply cycle ===

    fn finish_ply(&mut self, mover: Side) {
        self.ply += 1;
        self.elixir[mover].regenerate(self.config.elixir_per_ply);

        self.phase = MatchPhase::AbilityTick;
        for resolution in self.abilities.tick(self.ply, &mut self.board) {
            self.apply_resolution(resolution);
        }

        debug!(ply = self.ply, side = %mover, elixir = self.elixir[mover].balance(), "ply complete");

        let next = mover.opponent();
        if self.check_termination(next) {
            return;
        }
        self.active = next;
        self.phase = MatchPhase::AwaitingMove;
        self.events.publish(MatchEvent::TurnChanged {
            ply: self.ply,
            active: next,
        });
    }

    fn apply_resolution(&mut self, resolution: AbilityResolution) {
        let AbilityResolution { ability, captured } = resolution;
        for (position, piece) in &captured {
            self.credit_capture(ability.owner, piece.piece_type, *position, CaptureCause::Ability);
        }
        self.events.publish(MatchEvent::AbilityResolved {
            ability,
            captured: captured.len(),
        });
    }

    fn credit_capture(&mut self, by: Side, piece_type: PieceType, position: Position, cause: CaptureCause) {
        self.captured[by].push(piece_type);
        self.events.publish(MatchEvent::Capture {
            by,
            piece_type,
            position,
            cause,
        });
    }

    // === Termination ===

    /// Evaluate the end conditions with `to_move` about to act. Returns
    /// whether the match ended.
    fn check_termination(&mut self, to_move: Side) -> bool {
        if let Some((winner, reason)) = self.end_condition(to_move) {
            self.finish(winner, reason);
            return true;
        }
        false
    }

    pub(super) fn end_condition(&self, to_move: Side) -> Option<(Winner, EndReason)> {
        let order = [to_move, to_move.opponent()];

        if let Some(royal) = self.table.royal() {
            if let Some(&loser) = order.iter().find(|&&side| !self.board.has_piece(side, royal)) {
                return Some((Winner::side(loser.opponent()), EndReason::Checkmate));
            }
        }

        // The side that just moved flags first.
        let clock_order = [to_move.opponent(), to_move];
        if let Some(&loser) = clock_order.iter().find(|&&side| self.clock.is_flagged(side)) {
            return Some((Winner::side(loser.opponent()), EndReason::Timeout));
        }

        if self.is_stalemated(to_move) {
            return Some((Winner::Draw, EndReason::Draw));
        }

        self.resigned
            .map(|side| (Winner::side(side.opponent()), EndReason::Resignation))
    }

    fn is_stalemated(&self, side: Side) -> bool {
        let can_cast = self
            .table
            .cheapest_ability()
            .is_some_and(|(_, spec)| self.elixir[side].can_afford(spec.cost))
            && self.board.has_unmarked_cell();
        !can_cast && !MoveResolver::new(&self.table).has_legal_action(&self.board, side)
    }

    fn finish(&mut self, winner: Winner, reason: EndReason) {
        if self.result.is_some() {
            return;
        }
        let result = MatchResult {
            winner,
            reason,
            time_remaining: self.clock.remaining_all().clone(),
            total_elapsed: self.clock.elapsed(),
            plies: self.ply,
            captured: self.captured.clone(),
        };
        info!(winner = %winner, reason = %reason, plies = self.ply, "match ended");

        self.phase = MatchPhase::Terminal;
        self.events.publish(MatchEvent::MatchEnded(result.clone()));
        self.result = Some(result);
    }
}
