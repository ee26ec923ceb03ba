//! Piece types, instances and the data-driven rule table.
//!
//! - `PieceType`: the closed set of unit types
//! - `Piece`: one unit on a board, with identity and status
//! - `MovementProfile`: declarative movement patterns and capture policy
//! - `RuleTable`: profiles and ability specs, loaded from a rules file

mod kind;
mod piece;
mod profile;
mod table;
mod loader;

pub use kind::PieceType;
pub use piece::{Piece, PieceId, PieceStatus};
pub use profile::{
    CapturePolicy, CaptureRule, MoveMode, MovePattern, MovementProfile, PatternKind, Symmetry,
};
pub use table::RuleTable;
pub use loader::{RulesFile, STANDARD_RULES};
