//! Session integration tests.

use freecell_engine::core::{GameConfig, Location, LocationKind};
use freecell_engine::{Board, FreeCellGame, MoveError};

fn legal_moves(game: &FreeCellGame) -> Vec<(Location, Location)> {
    Location::all()
        .flat_map(|src| Location::all().map(move |dst| (src, dst)))
        .filter(|&(src, dst)| game.num_movable(src, dst) > 0)
        .collect()
}

#[test]
fn test_seeded_sessions_match() {
    let a = FreeCellGame::new(GameConfig::default().with_seed(2024));
    let b = FreeCellGame::new(GameConfig::default().with_seed(2024));
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_play_many_moves() {
    let mut game = FreeCellGame::new(GameConfig::default().with_seed(77));

    for turn in 0..40 {
        let moves = legal_moves(&game);
        let Some(&(src, dst)) = moves.get(turn % moves.len().max(1)) else {
            break;
        };
        let before = game.board().clone();
        let expected = game.num_movable(src, dst);

        let outcome = game.play(src, dst).unwrap();

        assert_eq!(outcome.moved, expected);
        assert_eq!(game.board().validate(), Ok(()));
        assert_ne!(game.board(), &before);
        assert!(outcome
            .promotions
            .iter()
            .all(|mv| mv.dst.kind() == LocationKind::Foundation));
        if game.is_won() {
            break;
        }
    }
}

#[test]
fn test_manual_auto_play() {
    let mut game = FreeCellGame::new(GameConfig::default().with_seed(5).with_auto_play(false));
    let promotions = game.auto_play();

    assert_eq!(game.history().len(), promotions.len());
    assert!(game.auto_play().is_empty());
    assert_eq!(game.board().validate(), Ok(()));
}

#[test]
fn test_illegal_move_leaves_board() {
    let mut game = FreeCellGame::new(GameConfig::default().with_seed(5));
    let before: Board = game.board().clone();

    let err = game.play(Location::cell(0), Location::stack(0)).unwrap_err();

    assert_eq!(
        err,
        MoveError::Illegal {
            src: Location::cell(0),
            dst: Location::stack(0)
        }
    );
    assert_eq!(game.board(), &before);
}

#[test]
fn test_entropy_seed_is_replayable() {
    let game = FreeCellGame::new(GameConfig::default());
    assert_eq!(game.board(), &Board::deal_seeded(game.seed()));
}
