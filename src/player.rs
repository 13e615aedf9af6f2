//! Move sources: the interactive prompt and the computer opponents.

use std::io::{BufRead, Write};

use anyhow::{Result, anyhow};

use crate::board::{Board, Cell, Color};
use crate::console::TokenReader;
use crate::constants::CORNER_BONUS;
use crate::game::MoveSource;

/// Reads moves typed as `<row><column>`, e.g. `3d`, one token at a time.
///
/// Malformed and illegal entries are reported on `output` and asked again.
pub struct HumanPlayer<'a, R, W> {
    input: &'a mut TokenReader<R>,
    output: &'a mut W,
}

impl<'a, R: BufRead, W: Write> HumanPlayer<'a, R, W> {
    pub fn new(input: &'a mut TokenReader<R>, output: &'a mut W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> MoveSource for HumanPlayer<'_, R, W> {
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Cell> {
        loop {
            write!(self.output, "Your turn [1h, 5a, etc]: ")?;
            self.output.flush()?;

            let token = self.input.next_token()?;
            let cell = match token.parse::<Cell>() {
                Ok(cell) => cell,
                Err(err) => {
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            if !board.valid_move(cell, color) {
                writeln!(self.output, "You can't place a piece on this cell.")?;
                continue;
            }
            return Ok(cell);
        }
    }
}

/// Takes the move that flips the most pieces, preferring corners.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPlayer;

impl GreedyPlayer {
    /// Flip count, plus [`CORNER_BONUS`] for a corner.
    pub fn priority(board: &Board, cell: Cell, color: Color) -> usize {
        let mut result = board.count_flips(cell, color);
        if cell.is_corner() {
            result += CORNER_BONUS;
        }
        result
    }
}

impl MoveSource for GreedyPlayer {
    /// Highest priority wins; ties go to the first cell in row-major order.
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Cell> {
        let mut best: Option<(Cell, usize)> = None;
        for cell in board.legal_moves(color) {
            let priority = Self::priority(board, cell, color);
            if best.is_none_or(|(_, top)| priority > top) {
                best = Some((cell, priority));
            }
        }
        best.map(|(cell, _)| cell)
            .ok_or_else(|| anyhow!("{color} has no legal move"))
    }
}

/// Picks uniformly among legal moves. Seeded, so games replay exactly.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: fastrand::Rng,
}

impl RandomPlayer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl MoveSource for RandomPlayer {
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Cell> {
        let moves = board.legal_moves(color);
        if moves.is_empty() {
            return Err(anyhow!("{color} has no legal move"));
        }
        Ok(moves[self.rng.usize(..moves.len())])
    }
}
