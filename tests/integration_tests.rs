//! Integration tests for othello-rust
//!
//! Whole games are played through the public API: seeded random games check
//! the board invariants after every move, and scripted console sessions check
//! the text dialogue end to end.

use std::io::Cursor;

use othello_rust::board::{Board, Cell, Color, Outcome, Scores};
use othello_rust::console::{Console, InputClosed};
use othello_rust::constants::NUM_CELLS;
use othello_rust::game::{Game, MoveSource, Transition, Turn};
use othello_rust::player::{GreedyPlayer, RandomPlayer};

// =============================================================================
// Helper functions
// =============================================================================

/// Count the cells holding `color` by scanning the grid.
fn grid_count(board: &Board, color: Color) -> usize {
    Cell::all().filter(|&c| board.get(c) == Some(color)).count()
}

/// Check the count invariants against the grid.
fn assert_consistent(board: &Board) {
    let scores = board.scores();
    assert_eq!(scores.black, grid_count(board, Color::Black));
    assert_eq!(scores.white, grid_count(board, Color::White));
    assert_eq!(scores.total() + board.empty_count(), NUM_CELLS);
}

/// Play a whole game between two sources, checking every step.
fn play_checked(black: &mut dyn MoveSource, white: &mut dyn MoveSource) -> Game {
    let mut game = Game::new();
    assert_consistent(game.board());

    while let Turn::ToMove(color) = game.turn() {
        assert!(game.board().can_move(color));
        let before: Scores = game.board().scores();
        let source: &mut dyn MoveSource = match color {
            Color::Black => &mut *black,
            Color::White => &mut *white,
        };

        let step = game.step(source).unwrap();
        let board = game.board();
        let n = step.flipped.len();

        assert!(n > 0);
        assert_eq!(board.get(step.cell), Some(color));
        for &f in &step.flipped {
            assert_eq!(board.get(f), Some(color));
        }
        assert_eq!(board.scores().get(color), before.get(color) + 1 + n);
        assert_eq!(board.scores().get(!color), before.get(!color) - n);
        assert_consistent(board);

        match step.transition {
            Transition::Next(next) => {
                assert_eq!(next, !color);
                assert!(board.can_move(next));
            }
            Transition::Pass { passed } => {
                assert_eq!(passed, !color);
                assert!(!board.can_move(passed));
                assert!(board.can_move(color));
                assert_eq!(game.turn(), Turn::ToMove(color));
            }
            Transition::Over => {
                assert!(!board.can_move(Color::Black));
                assert!(!board.can_move(Color::White));
            }
        }
    }
    game
}

/// Cells the human would enter if they played greedily as `human`.
fn greedy_script(human: Color) -> (Vec<String>, Outcome) {
    let mut game = Game::new();
    let mut moves = Vec::new();
    while let Turn::ToMove(color) = game.turn() {
        let step = game.step(&mut GreedyPlayer).unwrap();
        if color == human {
            moves.push(step.cell.to_string());
        }
    }
    (moves, game.outcome().unwrap())
}

// =============================================================================
// Engine properties
// =============================================================================

#[test]
fn test_random_games_keep_invariants() {
    for seed in 0..40 {
        let mut black = RandomPlayer::new(seed);
        let mut white = RandomPlayer::new(seed + 1000);
        let game = play_checked(&mut black, &mut white);
        assert!(game.is_over());
    }
}

#[test]
fn test_greedy_against_random() {
    for seed in 0..10 {
        let mut random = RandomPlayer::new(seed);
        let game = play_checked(&mut GreedyPlayer, &mut random);
        assert!(game.outcome().is_some());
    }
}

#[test]
fn test_valid_move_matches_flip_count() {
    for seed in 0..10 {
        let mut rng = RandomPlayer::new(seed);
        let mut game = Game::new();
        while let Turn::ToMove(_) = game.turn() {
            let board = game.board();
            for cell in Cell::all() {
                for color in [Color::Black, Color::White] {
                    let expected = board.get(cell).is_none() && board.count_flips(cell, color) > 0;
                    assert_eq!(board.valid_move(cell, color), expected, "{cell} {color}");
                }
            }
            for color in [Color::Black, Color::White] {
                assert_eq!(
                    board.can_move(color),
                    Cell::all().any(|c| board.valid_move(c, color))
                );
            }
            game.step(&mut rng).unwrap();
        }
    }
}

#[test]
fn test_only_double_block_ends_the_game() {
    // White is stuck but Black is not: the game goes on with Black.
    let board: Board = format!("xo......{}......ox", ".".repeat(48)).parse().unwrap();
    assert!(!board.can_move(Color::White));
    assert!(board.can_move(Color::Black));
    let game = Game::from_position(board, Color::White);
    assert_eq!(game.turn(), Turn::ToMove(Color::Black));

    // Nobody can move with one color gone.
    let board: Board = format!("xx{}", ".".repeat(62)).parse().unwrap();
    let game = Game::from_position(board, Color::Black);
    assert!(game.is_over());
    assert_eq!(game.outcome(), Some(Outcome::Winner(Color::Black)));
}

#[test]
fn test_scenario_3d() {
    let mut board = Board::othello();
    let cell: Cell = "3d".parse().unwrap();
    assert!(board.valid_move(cell, Color::Black));
    assert_eq!(board.count_flips(cell, Color::Black), 1);
    let flipped = board.make_move(cell, Color::Black).unwrap();
    assert_eq!(flipped, vec![Cell::new(3, 3)]);
    assert_eq!(board.scores(), Scores { black: 4, white: 1 });
}

// =============================================================================
// Console sessions
// =============================================================================

#[test]
fn test_console_full_session() {
    let (moves, expected) = greedy_script(Color::Black);
    let mut input = String::from("purple\nb\n");
    for mv in &moves {
        input.push_str(mv);
        input.push('\n');
    }
    input.push_str("maybe\nn\n");

    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new()).with_pause(false);
    console.run(None).unwrap();
    let text = String::from_utf8(console.into_output()).unwrap();

    assert!(text.contains("Invalid option. White or black? [w/b] "));
    assert!(text.contains("Computer place a piece on "));
    assert!(text.contains("Game over. Scores: "));
    assert!(text.contains("Invalid option. Yes or no [y/n]? "));
    let verdict = match expected {
        Outcome::Tie => "It is a tie.",
        Outcome::Winner(Color::Black) => "You win!",
        Outcome::Winner(Color::White) => "Computer win!",
    };
    assert!(text.contains(verdict));
}

#[test]
fn test_console_game_as_white() {
    let (moves, expected) = greedy_script(Color::White);
    let mut input = String::from("zz\n1a\n");
    for mv in &moves {
        input.push_str(mv);
        input.push('\n');
    }

    let mut console = Console::new(Cursor::new(input.into_bytes()), Vec::new()).with_pause(false);
    let outcome = console.play_game(Color::White).unwrap();
    assert_eq!(outcome, expected);

    let text = String::from_utf8(console.into_output()).unwrap();
    // Black opens, so the computer moves before the human is asked.
    let first_computer = text.find("Computer place a piece on 3d").unwrap();
    let first_prompt = text.find("Your turn [1h, 5a, etc]: ").unwrap();
    assert!(first_computer < first_prompt);
    assert!(text.contains("Wrong turn format."));
    assert!(text.contains("You can't place a piece on this cell."));
}

#[test]
fn test_console_input_closed_mid_game() {
    let mut console = Console::new(Cursor::new(b"3d\n".to_vec()), Vec::new()).with_pause(false);
    let err = console.play_game(Color::Black).unwrap_err();
    assert!(err.is::<InputClosed>());
}

#[test]
fn test_watch_game() {
    let mut console = Console::new(Cursor::new(Vec::new()), Vec::new());
    let outcome = console
        .watch_game(&mut GreedyPlayer, &mut RandomPlayer::new(3))
        .unwrap();
    let text = String::from_utf8(console.into_output()).unwrap();
    assert!(text.contains("black (x) plays 3d, flipping 1"));
    let verdict = match outcome {
        Outcome::Tie => "It is a tie.".to_string(),
        Outcome::Winner(c) => format!("{c} wins!"),
    };
    assert!(text.ends_with(&format!("{verdict}\n")));
}
