//! Othello board: cell colors, piece counts and the flip rule.
//!
//! The grid is a fixed 8x8 array of `Option<Color>`, with `None` marking an
//! empty cell. Piece counts are kept alongside the grid and are only ever
//! changed by [`Board::make_move`], which keeps them equal to the number of
//! cells holding each color.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DIRECTIONS, GLYPH_BLACK, GLYPH_EMPTY, GLYPH_WHITE, NUM_CELLS, SIZE};

/// Piece color. Each player is bound to exactly one of these.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// The other color.
    pub fn opponent(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Character used to draw this color on the board.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => GLYPH_BLACK,
            Color::White => GLYPH_WHITE,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A `(row, col)` coordinate. Coordinates may lie off the board; use
/// [`Cell::is_on_board`] before indexing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Check that the cell is in the square `[mn, mx] x [mn, mx]`.
    pub fn in_square(self, mn: i32, mx: i32) -> bool {
        self.row >= mn && self.row <= mx && self.col >= mn && self.col <= mx
    }

    pub fn is_on_board(self) -> bool {
        self.in_square(0, SIZE - 1)
    }

    pub fn is_corner(self) -> bool {
        (self.row == 0 || self.row == SIZE - 1) && (self.col == 0 || self.col == SIZE - 1)
    }

    fn offset(self, (dr, dc): (i32, i32)) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// Every board cell in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Cell::new(row, col)))
    }
}

/// Human notation: row digit then column letter, e.g. `3d`.
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.row, self.col);
        }
        let row = (b'1' + self.row as u8) as char;
        let col = (b'a' + self.col as u8) as char;
        write!(f, "{row}{col}")
    }
}

/// A move token that is not `<1-8><a-h>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCellError;

impl fmt::Display for ParseCellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Wrong turn format.")
    }
}

impl std::error::Error for ParseCellError {}

/// Parse a two-character token such as `3d` or `5A`.
impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row = chars.next().ok_or(ParseCellError)?;
        let col = chars.next().ok_or(ParseCellError)?.to_ascii_lowercase();
        if chars.next().is_some() || !('1'..='8').contains(&row) || !('a'..='h').contains(&col) {
            return Err(ParseCellError);
        }
        Ok(Cell::new(row as i32 - '1' as i32, col as i32 - 'a' as i32))
    }
}

/// Why a placement was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Cell lies outside the 8x8 grid
    OffBoard,
    /// Cell already holds a piece
    Occupied,
    /// Placement would not flip any opposing piece
    NoFlips,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OffBoard => write!(f, "illegal move: cell is off the board"),
            MoveError::Occupied => write!(f, "illegal move: cell is occupied"),
            MoveError::NoFlips => write!(f, "illegal move: nothing to flip"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Color),
    Tie,
}

/// Piece count per color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scores {
    pub black: usize,
    pub white: usize,
}

impl Scores {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    fn get_mut(&mut self, color: Color) -> &mut usize {
        match color {
            Color::Black => &mut self.black,
            Color::White => &mut self.white,
        }
    }

    /// Number of pieces on the board.
    pub fn total(&self) -> usize {
        self.black + self.white
    }

    /// Higher count wins; equal counts tie.
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.black.cmp(&self.white) {
            Ordering::Greater => Outcome::Winner(Color::Black),
            Ordering::Less => Outcome::Winner(Color::White),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// 8x8 Othello board with per-color piece counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Option<Color>; SIZE as usize]; SIZE as usize],
    scores: Scores,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board with zero counts.
    pub fn new() -> Self {
        Self {
            grid: [[None; SIZE as usize]; SIZE as usize],
            scores: Scores::default(),
        }
    }

    /// A board already set to the starting position.
    pub fn othello() -> Self {
        let mut board = Self::new();
        board.init_othello();
        board
    }

    /// Reset to the starting position:
    /// (3,3) and (4,4) white, (3,4) and (4,3) black.
    pub fn init_othello(&mut self) {
        self.grid = [[None; SIZE as usize]; SIZE as usize];
        self.grid[3][3] = Some(Color::White);
        self.grid[4][4] = Some(Color::White);
        self.grid[3][4] = Some(Color::Black);
        self.grid[4][3] = Some(Color::Black);
        self.scores = Scores { black: 2, white: 2 };
    }

    /// Color at `cell`. Off-board cells read as empty.
    pub fn get(&self, cell: Cell) -> Option<Color> {
        if !cell.is_on_board() {
            return None;
        }
        self.grid[cell.row as usize][cell.col as usize]
    }

    fn set(&mut self, cell: Cell, color: Color) {
        self.grid[cell.row as usize][cell.col as usize] = Some(color);
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Number of empty cells, counted from the grid.
    pub fn empty_count(&self) -> usize {
        self.grid.iter().flatten().filter(|c| c.is_none()).count()
    }

    /// Opposing pieces that placing `color` at `cell` would flip.
    ///
    /// Each direction walks over a run of opposing pieces; the run counts
    /// only if it ends on a `color` piece, not on an empty cell or the edge.
    /// Results are grouped by direction in [`DIRECTIONS`] order, nearest
    /// piece first. Occupancy of `cell` itself is not checked.
    pub fn flips(&self, cell: Cell, color: Color) -> Vec<Cell> {
        let mut result = Vec::new();
        if !cell.is_on_board() {
            return result;
        }

        let opp = color.opponent();
        for dir in DIRECTIONS {
            let mut run = Vec::new();
            let mut current = cell.offset(dir);
            while self.get(current) == Some(opp) {
                run.push(current);
                current = current.offset(dir);
            }
            if self.get(current) == Some(color) {
                result.extend(run);
            }
        }
        result
    }

    pub fn count_flips(&self, cell: Cell, color: Color) -> usize {
        self.flips(cell, color).len()
    }

    /// A move is valid on an empty on-board cell that flips at least one piece.
    pub fn valid_move(&self, cell: Cell, color: Color) -> bool {
        self.check_move(cell, color).is_ok()
    }

    fn check_move(&self, cell: Cell, color: Color) -> Result<Vec<Cell>, MoveError> {
        if !cell.is_on_board() {
            return Err(MoveError::OffBoard);
        }
        if self.get(cell).is_some() {
            return Err(MoveError::Occupied);
        }
        let flips = self.flips(cell, color);
        if flips.is_empty() {
            return Err(MoveError::NoFlips);
        }
        Ok(flips)
    }

    /// Place `color` at `cell` and flip the bracketed pieces.
    ///
    /// Returns the flipped cells. An invalid move leaves the board unchanged.
    pub fn make_move(&mut self, cell: Cell, color: Color) -> Result<Vec<Cell>, MoveError> {
        let flips = self.check_move(cell, color)?;

        self.set(cell, color);
        for &f in &flips {
            self.set(f, color);
        }
        *self.scores.get_mut(color) += 1 + flips.len();
        *self.scores.get_mut(color.opponent()) -= flips.len();

        Ok(flips)
    }

    /// Check that `color` has at least one valid move.
    pub fn can_move(&self, color: Color) -> bool {
        Cell::all().any(|cell| self.valid_move(cell, color))
    }

    /// Valid moves for `color` in row-major order.
    pub fn legal_moves(&self, color: Color) -> Vec<Cell> {
        Cell::all().filter(|&cell| self.valid_move(cell, color)).collect()
    }
}

fn glyph(cell: Option<Color>) -> char {
    cell.map_or(GLYPH_EMPTY, Color::glyph)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = SIZE as usize;
        writeln!(f, " {}", "_".repeat(2 * width + 1))?;
        for (i, row) in self.grid.iter().enumerate() {
            let cells: Vec<String> = row.iter().map(|&c| glyph(c).to_string()).collect();
            writeln!(f, "{}|{}|", i + 1, cells.join(" "))?;
        }
        writeln!(f, " |{}|", "_".repeat(2 * width - 1))?;
        write!(f, " ")?;
        for col in 0..width {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}

/// A board layout that does not read as 64 glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    BadGlyph(char),
    WrongLength(usize),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::BadGlyph(c) => write!(f, "unexpected board glyph {c:?}"),
            ParseBoardError::WrongLength(n) => {
                write!(f, "expected {NUM_CELLS} cells, found {n}")
            }
        }
    }
}

impl std::error::Error for ParseBoardError {}

/// Read a layout of `x`, `o` and `.` glyphs in row-major order. Whitespace
/// is ignored. Counts are taken from the grid.
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let glyphs: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if glyphs.len() != NUM_CELLS {
            return Err(ParseBoardError::WrongLength(glyphs.len()));
        }

        let mut board = Board::new();
        for (cell, &g) in Cell::all().zip(&glyphs) {
            let color = match g {
                GLYPH_BLACK => Color::Black,
                GLYPH_WHITE => Color::White,
                GLYPH_EMPTY => continue,
                other => return Err(ParseBoardError::BadGlyph(other)),
            };
            board.set(cell, color);
            *board.scores.get_mut(color) += 1;
        }
        Ok(board)
    }
}
