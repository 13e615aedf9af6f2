//! Othello-Rust: a two-player Othello (Reversi) engine.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, heuristic weights and glyphs
//! - [`board`] - Board state, legality and the flip rule
//! - [`game`] - Turn state machine (moves, passes, game over)
//! - [`player`] - Move sources: human prompt, greedy and random computers
//! - [`console`] - Text dialogue for playing against the computer
//!
//! ## Example
//!
//! ```
//! use othello_rust::board::{Cell, Color};
//! use othello_rust::game::{Game, Transition};
//! use othello_rust::player::GreedyPlayer;
//!
//! let mut game = Game::new();
//! let step = game.play("3d".parse::<Cell>().unwrap()).unwrap();
//! assert_eq!(step.transition, Transition::Next(Color::White));
//!
//! // Let the computer answer
//! let reply = game.step(&mut GreedyPlayer).unwrap();
//! println!("White plays {}", reply.cell);
//! println!("{}", game.board());
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod game;
pub mod player;
