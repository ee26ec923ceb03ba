//! Error taxonomy.
//!
//! Every failure the engine reports is local, synchronous and recoverable.
//! Each domain has its own enum; `EngineError` wraps them for callers that
//! want a single type.
//!
//! All operations that return one of these errors leave state untouched.

use thiserror::Error;

use super::position::Position;
use super::side::Side;
use crate::effects::AbilityKind;
use crate::game::EndReason;
use crate::pieces::PieceType;

/// Crate-wide result alias.
pub type Result<T, E = EngineError> = std::result::Result<T, E>;

/// Board-level failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("position {position} is outside the {width}x{height} board")]
    InvalidPosition {
        position: Position,
        width: u8,
        height: u8,
    },

    #[error("cell {0} is already occupied")]
    Occupied(Position),

    #[error("cell {0} is empty")]
    Empty(Position),

    #[error("cell {0} already holds an ability marker")]
    MarkerPresent(Position),
}

/// Illegal move submissions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("position {0} is off the board")]
    InvalidPosition(Position),

    #[error("not {actual}'s turn, {expected} to move")]
    NotYourTurn { expected: Side, actual: Side },

    #[error("no piece at {0}")]
    EmptySource(Position),

    #[error("piece at {position} belongs to {owner}")]
    WrongSide { position: Position, owner: Side },

    #[error("{piece_type} at {from} cannot reach {to}")]
    IllegalDestination {
        piece_type: PieceType,
        from: Position,
        to: Position,
    },

    #[error("{attacker} may not capture {target}")]
    CaptureRestricted {
        attacker: PieceType,
        target: PieceType,
    },

    #[error("no movement profile for {0}")]
    MissingProfile(PieceType),

    #[error("match is over")]
    MatchOver,

    #[error(transparent)]
    Board(BoardError),
}

impl From<BoardError> for RuleViolation {
    fn from(error: BoardError) -> Self {
        match error {
            BoardError::InvalidPosition { position, .. } => Self::InvalidPosition(position),
            BoardError::Empty(position) => Self::EmptySource(position),
            other @ (BoardError::Occupied(_) | BoardError::MarkerPresent(_)) => Self::Board(other),
        }
    }
}

/// Elixir pool failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ElixirError {
    #[error("insufficient elixir: need {needed}, have {available}")]
    InsufficientElixir { needed: u8, available: u8 },
}

/// Ability activation failures.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AbilityError {
    #[error("insufficient elixir: need {needed}, have {available}")]
    InsufficientElixir { needed: u8, available: u8 },

    #[error("invalid ability target {0}")]
    InvalidTarget(Position),

    #[error("not {actual}'s turn, {expected} to move")]
    NotYourTurn { expected: Side, actual: Side },

    #[error("ability {0} is not configured")]
    Unavailable(AbilityKind),

    #[error("match is over")]
    MatchOver,
}

impl From<ElixirError> for AbilityError {
    fn from(error: ElixirError) -> Self {
        match error {
            ElixirError::InsufficientElixir { needed, available } => {
                Self::InsufficientElixir { needed, available }
            }
        }
    }
}

/// Rules-file and match-construction failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules: {0}")]
    Parse(String),

    #[error("no movement profile for {0}")]
    MissingProfile(PieceType),

    #[error("invalid pattern for {piece_type}: {reason}")]
    InvalidPattern {
        piece_type: PieceType,
        reason: String,
    },

    #[error("invalid ability {kind}: {reason}")]
    InvalidAbility { kind: AbilityKind, reason: String },

    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    #[error("board {width}x{height} is too small")]
    InvalidBoard { width: u8, height: u8 },

    #[error("elixir start {starting} with capacity {max} is out of range")]
    InvalidElixir { starting: u8, max: u8 },

    #[error("clock must start above zero")]
    ZeroClock,

    #[error("starting position is already decided ({0})")]
    AlreadyDecided(EndReason),
}

impl From<toml::de::Error> for ConfigError {
    fn from(error: toml::de::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

/// Any engine error.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Board(#[from] BoardError),

    #[error(transparent)]
    Rule(#[from] RuleViolation),

    #[error(transparent)]
    Elixir(#[from] ElixirError),

    #[error(transparent)]
    Ability(#[from] AbilityError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::InvalidPosition {
            position: Position::new(9, 0),
            width: 8,
            height: 8,
        };
        assert_eq!(err.to_string(), "position (9, 0) is outside the 8x8 board");
    }

    #[test]
    fn test_board_error_into_violation() {
        let err: RuleViolation = BoardError::Empty(Position::new(2, 2)).into();
        assert_eq!(err, RuleViolation::EmptySource(Position::new(2, 2)));
    }

    #[test]
    fn test_occupied_keeps_its_meaning() {
        let err: RuleViolation = BoardError::Occupied(Position::new(3, 3)).into();
        assert_eq!(err, RuleViolation::Board(BoardError::Occupied(Position::new(3, 3))));
        assert_eq!(err.to_string(), "cell (3, 3) is already occupied");

        let err: RuleViolation = BoardError::MarkerPresent(Position::new(1, 4)).into();
        assert!(matches!(err, RuleViolation::Board(BoardError::MarkerPresent(_))));
    }

    #[test]
    fn test_elixir_error_into_ability_error() {
        let err: AbilityError = ElixirError::InsufficientElixir { needed: 4, available: 1 }.into();
        assert_eq!(err, AbilityError::InsufficientElixir { needed: 4, available: 1 });
    }

    #[test]
    fn test_engine_error_wraps() {
        let err: EngineError = RuleViolation::MatchOver.into();
        assert!(matches!(err, EngineError::Rule(RuleViolation::MatchOver)));
        assert_eq!(err.to_string(), "match is over");
    }
}
