//! In-flight ability tracking.
//!
//! The `AbilityManager` owns every `PendingAbility` of a match. Activation
//! debits elixir and drops a marker on the target cell; each ply's `tick`
//! burns one unit of fuse and resolves whatever ran out.
//!
//! ## Ordering
//!
//! Pending abilities are kept in activation order. When several expire on
//! the same tick they resolve in that order, so an earlier bomb's captures
//! are already applied when a later one goes off.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::ability::{AbilityId, AbilityKind, AbilitySpec, PendingAbility};
use super::elixir::ElixirPool;
use crate::board::{AbilityMarker, Board};
use crate::core::{AbilityError, Position, Side};
use crate::pieces::Piece;

/// One ability going off.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityResolution {
    pub ability: PendingAbility,

    /// Enemy pieces removed, in row-major order.
    pub captured: Vec<(Position, Piece)>,
}

/// Registry of pending abilities.
#[derive(Clone, Debug, Default)]
pub struct AbilityManager {
    pending: Vec<PendingAbility>,
    next_id: u32,
    last_tick: Option<u32>,
}

impl AbilityManager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activate an ability for `owner` on `target`.
    ///
    /// Fails with `InvalidTarget` for an off-board or already marked cell
    /// and `InsufficientElixir` when the pool cannot pay. On failure neither
    /// the pool nor the board changes.
    #[allow(clippy::too_many_arguments)]
    pub fn activate(
        &mut self,
        board: &mut Board,
        pool: &mut ElixirPool,
        owner: Side,
        kind: AbilityKind,
        spec: &AbilitySpec,
        target: Position,
        ply: u32,
    ) -> Result<PendingAbility, AbilityError> {
        if !board.contains(target) || board.marker_at(target).is_some() {
            return Err(AbilityError::InvalidTarget(target));
        }
        pool.spend(spec.cost)?;

        let ability = PendingAbility {
            id: AbilityId::new(self.next_id),
            kind,
            owner,
            target,
            fuse: spec.fuse,
            radius: spec.radius,
            activated_ply: ply,
        };
        board
            .place_marker(
                target,
                AbilityMarker {
                    id: ability.id,
                    kind,
                    owner,
                },
            )
            .map_err(|_| AbilityError::InvalidTarget(target))?;

        self.next_id += 1;
        self.pending.push(ability);
        debug!(id = %ability.id, %kind, side = %owner, %target, fuse = ability.fuse, "ability registered");
        Ok(ability)
    }

    /// Burn one unit of fuse on every pending ability and resolve the
    /// expired ones.
    ///
    /// A second call with the same `ply` does nothing.
    pub fn tick(&mut self, ply: u32, board: &mut Board) -> Vec<AbilityResolution> {
        if self.last_tick == Some(ply) {
            return Vec::new();
        }
        self.last_tick = Some(ply);

        for ability in &mut self.pending {
            ability.fuse = ability.fuse.saturating_sub(1);
        }
        debug!(ply, pending = self.pending.len(), "fuse tick");

        let (expired, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(PendingAbility::is_expired);
        self.pending = waiting;

        expired
            .into_iter()
            .map(|ability| Self::resolve(ability, board))
            .collect()
    }

    fn resolve(ability: PendingAbility, board: &mut Board) -> AbilityResolution {
        let mut captured = Vec::new();
        for pos in board.cells_in_radius(ability.target, ability.radius) {
            let is_enemy = board.piece_at(pos).is_some_and(|p| p.side != ability.owner);
            if !is_enemy {
                continue;
            }
            if let Ok(Some(piece)) = board.remove(pos) {
                captured.push((pos, piece));
            }
        }
        // The target is on the board, so clearing cannot fail.
        let _ = board.clear_marker(ability.target);

        info!(
            id = %ability.id,
            kind = %ability.kind,
            side = %ability.owner,
            target = %ability.target,
            captured = captured.len(),
            "ability resolved"
        );
        AbilityResolution { ability, captured }
    }

    /// Pending abilities in activation order.
    #[must_use]
    pub fn pending(&self) -> &[PendingAbility] {
        &self.pending
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop every pending ability and its marker.
    pub fn clear(&mut self, board: &mut Board) {
        for ability in self.pending.drain(..) {
            let _ = board.clear_marker(ability.target);
        }
    }
}
