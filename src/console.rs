//! Text console: color selection, a game against the computer, replay.
//!
//! The console is generic over its input and output so the whole dialogue
//! can be driven from memory in tests.

use std::collections::VecDeque;
use std::fmt;
use std::io::{BufRead, Write};

use anyhow::Result;

use crate::board::{Board, Color, Outcome};
use crate::game::{Game, MoveSource, Transition, Turn};
use crate::player::{GreedyPlayer, HumanPlayer};

/// The input stream ended while an answer was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputClosed;

impl fmt::Display for InputClosed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input closed")
    }
}

impl std::error::Error for InputClosed {}

/// Splits input into whitespace-delimited tokens.
///
/// Tokens left over on a line are kept for the next request, so `3d 4c`
/// answers two prompts.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. Blank lines are skipped.
    pub fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let line = self.next_line()?;
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Drop whatever is left of the current line.
    pub fn skip_line(&mut self) {
        self.pending.clear();
    }

    /// Drop the rest of the current line, then wait for a whole new one.
    pub fn wait_line(&mut self) -> Result<()> {
        self.skip_line();
        self.next_line().map(|_| ())
    }

    fn next_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputClosed.into());
        }
        Ok(line)
    }
}

/// Interactive session against [`GreedyPlayer`].
pub struct Console<R, W> {
    input: TokenReader<R>,
    output: W,
    /// Wait for Enter before each computer move
    pause: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
            pause: true,
        }
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Play games until the user declines another one.
    ///
    /// With `color` set the color question is skipped.
    pub fn run(&mut self, color: Option<Color>) -> Result<()> {
        loop {
            let human = match color {
                Some(c) => c,
                None => self.ask_color()?,
            };
            self.play_game(human)?;
            if !self.ask_play_again()? {
                return Ok(());
            }
        }
    }

    pub fn ask_color(&mut self) -> Result<Color> {
        write!(self.output, "White or black? [w/b] ")?;
        self.output.flush()?;
        loop {
            match self.input.next_token()?.to_lowercase().as_str() {
                "w" | "white" => return Ok(Color::White),
                "b" | "black" => return Ok(Color::Black),
                _ => {
                    self.input.skip_line();
                    write!(self.output, "Invalid option. White or black? [w/b] ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    pub fn ask_play_again(&mut self) -> Result<bool> {
        write!(self.output, "Do you want play again [y/n]? ")?;
        self.output.flush()?;
        loop {
            match self.input.next_token()?.to_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => {
                    self.input.skip_line();
                    write!(self.output, "Invalid option. Yes or no [y/n]? ")?;
                    self.output.flush()?;
                }
            }
        }
    }

    /// One full game, the human playing `human` and the computer the other color.
    pub fn play_game(&mut self, human: Color) -> Result<Outcome> {
        self.play_from(Game::new(), human)
    }

    /// Continue `game` to the end, the human playing `human`.
    pub fn play_from(&mut self, mut game: Game, human: Color) -> Result<Outcome> {
        let mut computer = GreedyPlayer;
        self.print_state(game.board(), human)?;

        while let Turn::ToMove(color) = game.turn() {
            let step = if color == human {
                game.step(&mut HumanPlayer::new(&mut self.input, &mut self.output))?
            } else {
                if self.pause {
                    self.wait_for_enter()?;
                }
                let step = game.step(&mut computer)?;
                writeln!(self.output, "Computer place a piece on {}", step.cell)?;
                step
            };

            self.print_state(game.board(), human)?;
            if let Transition::Pass { passed } = step.transition {
                writeln!(
                    self.output,
                    "No valid turns. Game passes to {}.",
                    passed.opponent().glyph()
                )?;
            }
        }

        self.print_state(game.board(), human)?;
        let scores = game.board().scores();
        let (you, them) = (scores.get(human), scores.get(human.opponent()));
        writeln!(self.output, "Game over. Scores: {you}:{them}")?;
        let outcome = scores.outcome();
        match outcome {
            Outcome::Tie => writeln!(self.output, "It is a tie.")?,
            Outcome::Winner(c) if c == human => writeln!(self.output, "You win!")?,
            Outcome::Winner(_) => writeln!(self.output, "Computer win!")?,
        }
        writeln!(self.output)?;
        Ok(outcome)
    }

    /// Let two move sources play each other, printing every move.
    pub fn watch_game(
        &mut self,
        black: &mut dyn MoveSource,
        white: &mut dyn MoveSource,
    ) -> Result<Outcome> {
        self.watch_from(Game::new(), black, white)
    }

    /// Continue `game` to the end between two move sources.
    pub fn watch_from(
        &mut self,
        mut game: Game,
        black: &mut dyn MoveSource,
        white: &mut dyn MoveSource,
    ) -> Result<Outcome> {
        write!(self.output, "{}", game.board())?;

        while let Turn::ToMove(color) = game.turn() {
            let source: &mut dyn MoveSource = match color {
                Color::Black => &mut *black,
                Color::White => &mut *white,
            };
            let step = game.step(source)?;
            writeln!(
                self.output,
                "\n{} ({}) plays {}, flipping {}",
                color,
                color.glyph(),
                step.cell,
                step.flipped.len()
            )?;
            write!(self.output, "{}", game.board())?;
            if let Transition::Pass { passed } = step.transition {
                writeln!(self.output, "{passed} has no valid move and passes.")?;
            }
        }

        let scores = game.board().scores();
        writeln!(
            self.output,
            "\nGame over. Scores: black {} white {}",
            scores.black, scores.white
        )?;
        let outcome = scores.outcome();
        match outcome {
            Outcome::Tie => writeln!(self.output, "It is a tie.")?,
            Outcome::Winner(c) => writeln!(self.output, "{c} wins!")?,
        }
        Ok(outcome)
    }

    fn print_state(&mut self, board: &Board, human: Color) -> Result<()> {
        let scores = board.scores();
        let computer = human.opponent();
        writeln!(self.output)?;
        writeln!(self.output, "************** Game state **************")?;
        writeln!(self.output, "You: {} {}", scores.get(human), human.glyph())?;
        writeln!(self.output, "Computer: {} {}", scores.get(computer), computer.glyph())?;
        write!(self.output, "{board}")?;
        writeln!(self.output, "****************************************")?;
        writeln!(self.output)?;
        Ok(())
    }

    fn wait_for_enter(&mut self) -> Result<()> {
        write!(self.output, "Press enter to continue")?;
        self.output.flush()?;
        self.input.wait_line()
    }
}
