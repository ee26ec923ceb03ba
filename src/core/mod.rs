//! Core engine types: sides, positions, actions, configuration, errors.
//!
//! These are the building blocks every other module shares. None of them
//! knows about piece movement or abilities; that lives in `pieces`, `rules`
//! and `effects`.

pub mod side;
pub mod position;
pub mod config;
pub mod action;
pub mod error;

pub use side::{Side, SideMap};
pub use position::Position;
pub use config::MatchConfig;
pub use action::{Action, ActionKind, ActionRecord, AppliedMove};
pub use error::{
    AbilityError, BoardError, ConfigError, ElixirError, EngineError, Result, RuleViolation,
};
