//! Square coordinates and algebraic notation.

use std::fmt;

/// Side length of the board.
pub const BOARD_SIZE: usize = 8;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A single board coordinate. Row 0 is the top rank, column 0 the left file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Creates a square from row and column. Both must be in `0..8`.
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Square { row, col }
    }

    /// Returns the flat cell index in row-major order.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Creates a square from a flat row-major cell index.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        Square {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        }
    }

    /// Parses algebraic notation: column letter `a`-`h`, then row digit `1`-`8`.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let mut chars = s.chars();
        let col_char = chars.next()?;
        let row_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        if !('a'..='h').contains(&col_char) || !('1'..='8').contains(&row_char) {
            return None;
        }
        let col = col_char as u8 - b'a';
        let row = row_char as u8 - b'1';
        Some(Square { row, col })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            (b'1' + self.row) as char
        )
    }
}
