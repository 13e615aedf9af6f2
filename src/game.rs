//! Turn coordination: whose move it is, passes and the end of the game.
//!
//! A [`Game`] is a small state machine over [`Turn`]. Black always opens.
//! After every placement the opponent plays if it can; otherwise the side
//! that just moved goes again (the opponent passes); if neither side can
//! move the game is over.

use std::fmt;

use crate::board::{Board, Cell, Color, MoveError, Outcome};

/// Anything that can pick a cell for a color: a prompt, a heuristic, a script.
///
/// Implementations must return a cell for which `board.valid_move(cell, color)`
/// holds. They are only asked when such a cell exists.
pub trait MoveSource {
    fn choose_move(&mut self, board: &Board, color: Color) -> anyhow::Result<Cell>;
}

/// State of the game loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    ToMove(Color),
    Over,
}

/// What happened to the turn after a placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The opponent moves next
    Next(Color),
    /// `passed` has no move; the other side moves again
    Pass { passed: Color },
    /// Neither side can move
    Over,
}

impl Transition {
    /// Decide the transition once `mover` has played on `board`.
    fn after(board: &Board, mover: Color) -> Self {
        let next = mover.opponent();
        if board.can_move(next) {
            Transition::Next(next)
        } else if board.can_move(mover) {
            Transition::Pass { passed: next }
        } else {
            Transition::Over
        }
    }

    pub fn turn(self) -> Turn {
        match self {
            Transition::Next(color) => Turn::ToMove(color),
            Transition::Pass { passed } => Turn::ToMove(passed.opponent()),
            Transition::Over => Turn::Over,
        }
    }
}

/// A placement that was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub color: Color,
    pub cell: Cell,
    pub flipped: Vec<Cell>,
    pub transition: Transition,
}

/// A move the coordinator refused. The game is left as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The game has already ended
    Over,
    /// The cell is not a legal move for the side to move
    Illegal(MoveError),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Over => write!(f, "game is already over"),
            GameError::Illegal(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Over => None,
            GameError::Illegal(err) => Some(err),
        }
    }
}

impl From<MoveError> for GameError {
    fn from(err: MoveError) -> Self {
        GameError::Illegal(err)
    }
}

/// One game of Othello.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    turn: Turn,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Starting position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::othello(),
            turn: Turn::ToMove(Color::Black),
        }
    }

    /// Resume from an arbitrary position.
    ///
    /// If `to_move` has no move the other side plays; if neither can move
    /// the game starts out over.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        let turn = Transition::after(&board, to_move.opponent()).turn();
        Self { board, turn }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn is_over(&self) -> bool {
        self.turn == Turn::Over
    }

    /// Play `cell` for the side to move.
    pub fn play(&mut self, cell: Cell) -> Result<Step, GameError> {
        let Turn::ToMove(color) = self.turn else {
            return Err(GameError::Over);
        };

        let flipped = self.board.make_move(cell, color)?;
        let transition = Transition::after(&self.board, color);
        self.turn = transition.turn();

        Ok(Step {
            color,
            cell,
            flipped,
            transition,
        })
    }

    /// Ask `source` for a move for the side to move and play it.
    pub fn step(&mut self, source: &mut dyn MoveSource) -> anyhow::Result<Step> {
        let Turn::ToMove(color) = self.turn else {
            return Err(GameError::Over.into());
        };
        let cell = source.choose_move(&self.board, color)?;
        Ok(self.play(cell)?)
    }

    /// Final result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.turn {
            Turn::Over => Some(self.board.scores().outcome()),
            Turn::ToMove(_) => None,
        }
    }
}
