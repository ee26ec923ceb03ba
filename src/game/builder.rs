//! Match construction.

use std::path::Path;

use super::controller::Match;
use crate::board::{Board, Layout};
use crate::core::{ConfigError, MatchConfig, Side};
use crate::effects::AbilityKind;
use crate::pieces::{RuleTable, RulesFile};

/// Builder for a [`Match`].
///
/// ## Example
///
/// ```
/// use rune_rift::core::{Position, Side};
/// use rune_rift::game::MatchBuilder;
///
/// let mut game = MatchBuilder::standard().unwrap().build().unwrap();
///
/// // Royal recruit two squares forward on its first move.
/// game.submit_move(Side::White, Position::new(4, 1), Position::new(4, 3)).unwrap();
/// assert_eq!(game.active_side(), Side::Black);
/// assert_eq!(game.elixir(Side::White), 1);
/// ```
#[derive(Clone, Debug)]
pub struct MatchBuilder {
    config: MatchConfig,
    table: RuleTable,
    layout: Option<Layout>,
    board: Option<Board>,
}

impl MatchBuilder {
    /// Start from a rule table with default settings and an empty board.
    #[must_use]
    pub fn new(table: RuleTable) -> Self {
        Self {
            config: MatchConfig::default(),
            table,
            layout: None,
            board: None,
        }
    }

    /// The bundled rules, settings and starting layout.
    pub fn standard() -> Result<Self, ConfigError> {
        Ok(Self::from_rules(RulesFile::standard()?))
    }

    /// Everything from a parsed rules file.
    #[must_use]
    pub fn from_rules(rules: RulesFile) -> Self {
        Self {
            config: rules.config,
            table: rules.table,
            layout: rules.layout,
            board: None,
        }
    }

    /// Load a rules file from disk.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Ok(Self::from_rules(RulesFile::load(path)?))
    }

    #[must_use]
    pub fn config(mut self, config: MatchConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Start from a prepared board instead of a layout.
    ///
    /// The board's size overrides the configured one.
    #[must_use]
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Validate everything and create the match.
    pub fn build(self) -> Result<Match, ConfigError> {
        let mut config = self.config;
        if let Some(board) = &self.board {
            config = config.with_board(board.width(), board.height());
        }
        config.validate()?;

        for kind in AbilityKind::ALL {
            if let Some(spec) = self.table.ability(kind) {
                spec.validate(kind, config.max_elixir)?;
            }
        }
        if let Some(royal) = self.table.royal() {
            self.table.require_profiles([royal])?;
        }

        let board = match self.board {
            Some(board) => board,
            None => {
                let mut board = Board::new(config.width, config.height);
                if let Some(layout) = &self.layout {
                    layout.validate(config.width)?;
                    layout
                        .apply(&mut board)
                        .map_err(|e| ConfigError::InvalidLayout(e.to_string()))?;
                }
                board
            }
        };
        self.table
            .require_profiles(board.pieces().map(|(_, p)| p.piece_type))?;

        let game = Match::new(config, self.table, board);
        if let Some((_, reason)) = game.end_condition(Side::White) {
            return Err(ConfigError::AlreadyDecided(reason));
        }
        Ok(game)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Position;
    use crate::game::EndReason;
    use crate::pieces::{MovePattern, MovementProfile, PieceType};

    #[test]
    fn test_standard_layout() {
        let game = MatchBuilder::standard().unwrap().build().unwrap();

        assert_eq!(game.board().piece_count(), 32);
        assert_eq!(game.active_side(), Side::White);
        assert_eq!(game.ply(), 0);
        assert_eq!(
            game.board().piece_at(Position::new(4, 0)).unwrap().piece_type,
            PieceType::RoyalGiant
        );
    }

    #[test]
    fn test_custom_board_needs_profiles() {
        let mut table = RuleTable::new();
        table
            .register(PieceType::Knight, MovementProfile::new().with_pattern(MovePattern::leap(2, 1)))
            .unwrap();
        let mut board = Board::new(4, 4);
        board.spawn(Side::White, PieceType::Witch, Position::new(0, 0)).unwrap();

        let err = MatchBuilder::new(table).board(board).build().unwrap_err();
        assert!(matches!(err, ConfigError::MissingProfile(PieceType::Witch)));
    }

    #[test]
    fn test_custom_board_sets_size() {
        let table = RuleTable::standard().unwrap();
        let mut board = Board::new(5, 6);
        board.spawn(Side::White, PieceType::RoyalGiant, Position::new(2, 0)).unwrap();
        board.spawn(Side::Black, PieceType::RoyalGiant, Position::new(2, 5)).unwrap();
        let game = MatchBuilder::new(table).board(board).build().unwrap();

        assert_eq!((game.config().width, game.config().height), (5, 6));
    }

    #[test]
    fn test_rejects_missing_royal() {
        let table = RuleTable::standard().unwrap();
        let mut board = Board::new(8, 8);
        board.spawn(Side::White, PieceType::RoyalGiant, Position::new(4, 0)).unwrap();

        let err = MatchBuilder::new(table).board(board).build().unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyDecided(EndReason::Checkmate)));
    }

    #[test]
    fn test_rejects_opening_stalemate() {
        let mut table = RuleTable::new().with_royal(PieceType::RoyalGiant);
        table
            .register(
                PieceType::RoyalGiant,
                MovementProfile::new().with_pattern(MovePattern::leap(0, 1).move_only()),
            )
            .unwrap();
        let mut board = Board::new(2, 4);
        board.spawn(Side::White, PieceType::RoyalGiant, Position::new(0, 0)).unwrap();
        board.spawn(Side::Black, PieceType::RoyalGiant, Position::new(0, 1)).unwrap();

        let err = MatchBuilder::new(table).board(board).build().unwrap_err();
        assert!(matches!(err, ConfigError::AlreadyDecided(EndReason::Draw)));
    }

    #[test]
    fn test_rejects_zero_clock() {
        let err = MatchBuilder::standard()
            .unwrap()
            .config(MatchConfig::default().with_clock_seconds(0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::ZeroClock));
    }

    #[test]
    fn test_rejects_ability_over_capacity() {
        let table = RuleTable::standard().unwrap();
        let config = MatchConfig::default().with_max_elixir(3);

        let err = MatchBuilder::new(table).config(config).build().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAbility { kind: AbilityKind::Bomb, .. }));
    }
}
