//! Board geometry, heuristic weights and display glyphs.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board edge length. Othello is always played on 8x8.
pub const SIZE: i32 = 8;

/// Number of cells on the board.
pub const NUM_CELLS: usize = (SIZE * SIZE) as usize;

/// The eight compass directions as `(row, col)` deltas.
/// Order: row delta outer, column delta inner, `(0, 0)` skipped.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

// =============================================================================
// Heuristic
// =============================================================================

/// Priority bonus for taking a corner.
pub const CORNER_BONUS: usize = 10;

// =============================================================================
// Glyphs
// =============================================================================

/// White piece.
pub const GLYPH_WHITE: char = 'o';

/// Black piece.
pub const GLYPH_BLACK: char = 'x';

/// Empty cell.
pub const GLYPH_EMPTY: char = '.';
