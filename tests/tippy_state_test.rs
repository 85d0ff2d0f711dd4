//! Tests for the Tippy game state machine.

use tippy::{
    Board, GameState, GameStatus, Mark, Move, MoveError, Player, Square, TippyError,
    TurnBasedGame,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_three_by_three_moves_cover_board() {
    let game = GameState::new(3, Player::P1).expect("Valid size");
    let moves = game.possible_next_moves();
    let expected: Vec<Move> = (0..3)
        .flat_map(|i| (0..3).map(move |j| Move::new(i, j)))
        .collect();
    assert_eq!(moves, expected);
}

#[test]
fn test_first_move_example() {
    let game = GameState::new(3, Player::P1).expect("Valid size");
    let next = game.apply_move(Move::new(1, 1)).expect("Legal move");
    assert_eq!(next.to_string(), "_ _ _\n_ X _\n_ _ _\nnext player: p2");
}

#[test]
fn test_four_by_four_win() {
    init_tracing();
    let moves = [
        Move::new(1, 1),
        Move::new(3, 1),
        Move::new(1, 2),
        Move::new(3, 3),
        Move::new(2, 2),
        Move::new(3, 2),
        Move::new(2, 3),
    ];
    let game = GameState::replay(4, Player::P1, &moves).expect("Valid replay");
    assert!(game.is_over());
    assert!(game.winner(Player::P1));
    assert!(!game.winner(Player::P2));
    assert_eq!(game.status(), GameStatus::Won(Player::P1));
    assert!(game.possible_next_moves().is_empty());
}

#[test]
fn test_occupied_square_rejected() {
    init_tracing();
    let game = GameState::new(3, Player::P1)
        .expect("Valid size")
        .apply_move(Move::new(0, 0))
        .expect("Legal move");
    let snapshot = game.clone();

    let result = game.apply_move(Move::new(0, 0));
    assert_eq!(result, Err(MoveError::SquareOccupied(Move::new(0, 0))));
    assert_eq!(game, snapshot);
}

#[test]
fn test_out_of_range_rejected() {
    let game = GameState::new(3, Player::P1).expect("Valid size");
    assert!(matches!(
        game.apply_move(Move::new(3, 0)),
        Err(MoveError::OutOfBounds { row: 3, column: 0, size: 3 })
    ));
    assert!(matches!(
        game.apply_move(Move::new(0, usize::MAX)),
        Err(MoveError::OutOfBounds { .. })
    ));
}

#[test]
fn test_replay_stops_at_illegal_move() {
    let moves = [Move::new(0, 0), Move::new(0, 0)];
    let result = GameState::replay(3, Player::P1, &moves);
    assert!(matches!(
        result,
        Err(TippyError::Move(MoveError::SquareOccupied(_)))
    ));
}

#[test]
fn test_replay_rejects_small_board() {
    let result = GameState::replay(2, Player::P1, &[]);
    assert!(matches!(result, Err(TippyError::Config(_))));
}

#[test]
fn test_pre_populated_board_already_won() {
    let board: Board = "O O _\n_ O O\n_ _ _".parse().expect("Valid board");
    let game = GameState::from_board(Player::P1, board);
    assert!(game.is_over());
    assert!(game.winner(Player::P2));
    assert_eq!(game.apply_move(Move::new(2, 2)), Err(MoveError::GameOver));
}

#[test]
fn test_full_board_draw() {
    let board: Board = "XOX\nXOX\nOXO".parse().expect("Valid board");
    let game = GameState::from_board(Player::P2, board);
    assert!(!game.is_over());
    assert!(game.possible_next_moves().is_empty());
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(!game.winner(Player::P1));
    assert!(!game.winner(Player::P2));
}

#[test]
fn test_first_player_can_be_p2() {
    let game = GameState::new(3, Player::P2).expect("Valid size");
    let next = game.apply_move(Move::new(2, 2)).expect("Legal move");
    assert_eq!(next.board().get(2, 2), Some(Square::Occupied(Mark::O)));
    assert_eq!(next.next_player(), Player::P1);
}

/// Plays the first legal move until the game ends, through the trait only.
fn play_out<G: TurnBasedGame>(mut game: G) -> G
where
    G::Move: Copy,
{
    while let Some(action) = game.possible_next_moves().first().copied() {
        match game.apply_move(action) {
            Ok(next) => game = next,
            Err(e) => panic!("Listed move rejected: {}", e),
        }
    }
    game
}

#[test]
fn test_play_out_through_trait() {
    let game = play_out(GameState::new(4, Player::P1).expect("Valid size"));
    // Row-major play fills every row as X O X O, so no two neighbouring
    // columns share a mark and nobody can form a tippy.
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(TurnBasedGame::possible_next_moves(&game).is_empty());
}
