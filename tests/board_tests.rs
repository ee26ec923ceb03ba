//! Board, layout and rules-file integration tests.

use rune_rift::board::{AbilityMarker, Board, Layout};
use rune_rift::core::{BoardError, ConfigError, Position, Side};
use rune_rift::effects::{AbilityId, AbilityKind};
use rune_rift::pieces::{PieceType, RulesFile};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

/// The bundled layout mirrors across the board.
#[test]
fn test_standard_layout_mirrors() {
    let rules = RulesFile::standard().unwrap();
    let mut board = Board::new(8, 8);
    rules.layout.unwrap().apply(&mut board).unwrap();

    assert_eq!(board.piece_count(), 32);
    for x in 0..8 {
        let white = board.piece_at(p(x, 0)).unwrap();
        let black = board.piece_at(p(x, 7)).unwrap();
        assert_eq!(white.piece_type, black.piece_type);
        assert_eq!((white.side, black.side), (Side::White, Side::Black));
        assert_eq!(board.piece_at(p(x, 1)).unwrap().piece_type, PieceType::RoyalRecruits);
        assert_eq!(board.piece_at(p(x, 6)).unwrap().piece_type, PieceType::RoyalRecruits);
    }
    for y in 2..6 {
        for x in 0..8 {
            assert!(board.piece_at(p(x, y)).is_none());
        }
    }
    assert!(board.has_piece(Side::White, PieceType::RoyalGiant));
    assert!(board.has_piece(Side::Black, PieceType::RoyalGiant));
}

/// Piece IDs stay with their piece across moves.
#[test]
fn test_find_after_move() {
    let mut board = Board::new(8, 8);
    let id = board.spawn(Side::White, PieceType::Witch, p(3, 0)).unwrap();

    board.move_piece(p(3, 0), p(3, 3)).unwrap();

    assert_eq!(board.find(id), Some(p(3, 3)));
    assert!(board.piece_at(p(3, 0)).is_none());
}

/// Out-of-bounds coordinates are rejected everywhere.
#[test]
fn test_out_of_bounds() {
    let mut board = Board::new(8, 8);
    board.spawn(Side::White, PieceType::Knight, p(0, 0)).unwrap();

    assert!(matches!(
        board.spawn(Side::White, PieceType::Knight, p(8, 0)),
        Err(BoardError::InvalidPosition { width: 8, height: 8, .. })
    ));
    assert!(board.move_piece(p(0, 0), p(0, -1)).is_err());
    assert!(board.remove(p(-1, -1)).is_err());
    assert_eq!(board.piece_count(), 1);
    assert!(board.piece_at(p(0, 0)).is_some());
}

/// Snapshots do not see later mutations.
#[test]
fn test_snapshot_frozen() {
    let mut board = Board::new(8, 8);
    board.spawn(Side::Black, PieceType::Musketeer, p(0, 7)).unwrap();
    let snapshot = board.snapshot();

    board.move_piece(p(0, 7), p(0, 4)).unwrap();
    board
        .place_marker(
            p(2, 2),
            AbilityMarker {
                id: AbilityId::new(0),
                kind: AbilityKind::Bomb,
                owner: Side::White,
            },
        )
        .unwrap();

    assert!(snapshot.piece_at(p(0, 7)).is_some());
    assert!(snapshot.piece_at(p(0, 4)).is_none());
    assert!(snapshot.marker_at(p(2, 2)).is_none());
    assert_eq!(snapshot.iter().filter(|(_, c)| c.piece.is_some()).count(), 1);
}

/// The blast area is a clipped 3x3 square.
#[test]
fn test_blast_area() {
    let board = Board::new(8, 8);

    assert_eq!(board.cells_in_radius(p(4, 4), 1).len(), 9);
    assert_eq!(board.cells_in_radius(p(0, 4), 1).len(), 6);
    assert_eq!(board.cells_in_radius(p(7, 7), 1), vec![p(6, 6), p(7, 6), p(6, 7), p(7, 7)]);
}

/// A rules file can reshape the board and layout.
#[test]
fn test_custom_rules_file() {
    let text = r#"
        royal = "royal-giant"

        [match]
        width = 3
        height = 5
        clock_seconds = 120

        [pieces.royal-giant]
        patterns = [{ kind = "leap", dx = 1, dy = 0, symmetry = "rotate" }]

        [pieces.knight]
        patterns = [{ kind = "leap", dx = 2, dy = 1, symmetry = "all" }]

        [layout]
        back_rank = ["knight", "royal-giant", "knight"]
    "#;

    let rules = RulesFile::from_toml_str(text).unwrap();
    assert_eq!((rules.config.width, rules.config.height), (3, 5));
    assert_eq!(rules.config.clock_seconds, 120);
    assert!(rules.table.ability(AbilityKind::Bomb).is_none());

    let mut board = Board::new(3, 5);
    rules.layout.unwrap().apply(&mut board).unwrap();
    assert_eq!(board.piece_count(), 6);
    assert_eq!(board.piece_at(p(1, 4)).unwrap().piece_type, PieceType::RoyalGiant);
}

/// Layouts wider than the board are configuration errors.
#[test]
fn test_layout_width_checked() {
    let layout = Layout {
        back_rank: vec![PieceType::Knight; 4],
        front_rank: Vec::new(),
    };

    assert!(matches!(layout.validate(8), Err(ConfigError::InvalidLayout(_))));
    assert!(layout.validate(4).is_ok());
}

/// Boards below the minimum size are rejected at load.
#[test]
fn test_board_too_small() {
    let text = r#"
        [match]
        width = 1
        height = 8
    "#;

    assert!(matches!(
        RulesFile::from_toml_str(text),
        Err(ConfigError::InvalidBoard { width: 1, height: 8 })
    ));
}

/// Offsets wider than any board fail at load instead of on a query.
#[test]
fn test_oversized_offset_rejected() {
    let text = r#"
        [pieces.knight]
        patterns = [{ kind = "leap", dx = 2147483647, dy = 0 }]
    "#;

    assert!(matches!(
        RulesFile::from_toml_str(text),
        Err(ConfigError::InvalidPattern { piece_type: PieceType::Knight, .. })
    ));
}

/// Elixir capacity above ten is rejected at load.
#[test]
fn test_elixir_capacity_rejected() {
    let text = r#"
        [match]
        max_elixir = 11
    "#;

    assert!(matches!(
        RulesFile::from_toml_str(text),
        Err(ConfigError::InvalidElixir { max: 11, .. })
    ));
}
