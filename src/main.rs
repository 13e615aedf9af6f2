//! Othello-Rust: play Othello against a greedy computer opponent.
//!
//! ## Usage
//!
//! - `othello-rust` - Play against the computer
//! - `othello-rust play --color white --no-pause` - Skip the setup questions
//! - `othello-rust demo --white random --seed 42` - Watch two computers play

use std::io;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use othello_rust::board::Color;
use othello_rust::console::{Console, InputClosed};
use othello_rust::game::MoveSource;
use othello_rust::player::{GreedyPlayer, RandomPlayer};

/// Othello-Rust: a two-player Othello engine
#[derive(Parser)]
#[command(name = "othello-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer
    Play {
        /// Your color; asked interactively when omitted
        #[arg(long, value_enum)]
        color: Option<Side>,
        /// Do not wait for Enter before computer moves
        #[arg(long)]
        no_pause: bool,
    },
    /// Watch two computer players
    Demo {
        #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
        black: Strategy,
        #[arg(long, value_enum, default_value_t = Strategy::Greedy)]
        white: Strategy,
        /// Seed for random players
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    Greedy,
    Random,
}

fn make_player(strategy: Strategy, seed: u64) -> Box<dyn MoveSource> {
    match strategy {
        Strategy::Greedy => Box::new(GreedyPlayer),
        Strategy::Random => Box::new(RandomPlayer::new(seed)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play {
        color: None,
        no_pause: false,
    });

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    let result = match command {
        Commands::Play { color, no_pause } => {
            let mut console = console.with_pause(!no_pause);
            console.run(color.map(Color::from))
        }
        Commands::Demo { black, white, seed } => {
            let seed = seed.unwrap_or_else(|| fastrand::u64(..));
            let mut black = make_player(black, seed);
            let mut white = make_player(white, seed.wrapping_add(1));
            console.watch_game(black.as_mut(), white.as_mut()).map(|_| ())
        }
    };

    // Closing stdin ends the session.
    match result {
        Err(err) if err.is::<InputClosed>() => Ok(()),
        other => other,
    }
}
