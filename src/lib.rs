//! # rune-rift
//!
//! The match engine for RuneRift, a two-sided grid tactics game where
//! pieces move by data-driven patterns and an elixir economy pays for
//! delayed area abilities.
//!
//! ## Design Principles
//!
//! 1. **Rules Are Data**: Piece movement, capture policy and ability costs
//!    come from a `RuleTable`, normally loaded from a TOML rules file. The
//!    resolver never matches on a piece type.
//!
//! 2. **Transactional Commands**: A submission is validated in full before
//!    anything changes. A rejected move leaves the board, pools and clocks
//!    exactly as they were.
//!
//! 3. **No Presentation**: The engine publishes events and hands out board
//!    snapshots. It never draws, plays sound or reads input.
//!
//! ## Architecture
//!
//! - **Two Clocks**: Side clocks run on wall time supplied through
//!   `Match::advance_clock`; ability fuses count plies. They are never
//!   mixed.
//!
//! - **Persistent Data Structures**: The board grid and match history use
//!   `im` vectors, so snapshots are O(1).
//!
//! ## Modules
//!
//! - `core`: Sides, positions, actions, configuration, errors
//! - `board`: The grid, markers, snapshots and starting layouts
//! - `pieces`: Piece types, movement profiles and the rule table
//! - `rules`: Legal move generation and validated application
//! - `effects`: Elixir pools and fused abilities
//! - `events`: Match events for renderers and the results screen
//! - `game`: The match controller and final result

pub mod core;
pub mod board;
pub mod pieces;
pub mod rules;
pub mod effects;
pub mod events;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap, Position, MatchConfig,
    Action, ActionKind, ActionRecord, AppliedMove,
    AbilityError, BoardError, ConfigError, ElixirError, EngineError, RuleViolation,
};

pub use crate::board::{AbilityMarker, Board, BoardSnapshot, Cell, Layout};

pub use crate::pieces::{
    Piece, PieceId, PieceType, MovePattern, MovementProfile, CaptureRule, RuleTable, RulesFile,
};

pub use crate::rules::MoveResolver;

pub use crate::effects::{
    AbilityKind, AbilitySpec, AbilityManager, AbilityResolution, ElixirPool, PendingAbility,
};

pub use crate::events::{CaptureCause, EventBus, EventKind, MatchEvent};

pub use crate::game::{
    format_clock, EndReason, Match, MatchBuilder, MatchPhase, MatchResult, Winner,
};
