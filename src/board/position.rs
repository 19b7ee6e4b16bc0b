//! Game position representation.
//!
//! Holds the complete snapshot of an Othello game at a given point in
//! time: the contents of all 64 cells and the side to move.

use std::fmt;

use super::square::{Square, BOARD_SIZE, CELL_COUNT};

/// One of the two token colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Dark,
    Light,
}

impl Side {
    /// Returns the other side.
    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Dark => Side::Light,
            Side::Light => Side::Dark,
        }
    }

    /// Returns the single-character OFEN abbreviation.
    pub const fn ofen_char(self) -> char {
        match self {
            Side::Dark => 'D',
            Side::Light => 'L',
        }
    }

    /// Parses a side from its single-character OFEN abbreviation.
    pub fn from_ofen_char(c: char) -> Option<Side> {
        match c {
            'D' => Some(Side::Dark),
            'L' => Some(Side::Light),
            _ => None,
        }
    }
}

/// Complete game position: cell contents plus side to move.
///
/// Uses a fixed-size array indexed by `Square::index()` for O(1) lookup.
/// Positions are treated as immutable values during search: applying a
/// move constructs a new position rather than mutating a shared one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub cells: [Option<Side>; CELL_COUNT],
    pub turn: Side,
}

impl Position {
    /// Creates an empty board with the given side to move.
    pub fn empty(turn: Side) -> Self {
        Position {
            cells: [None; CELL_COUNT],
            turn,
        }
    }

    /// Creates the standard opening position: four center tokens, dark to move.
    pub fn opening() -> Self {
        let mut pos = Position::empty(Side::Dark);
        pos.set(Square::new(3, 3), Some(Side::Light));
        pos.set(Square::new(3, 4), Some(Side::Dark));
        pos.set(Square::new(4, 3), Some(Side::Dark));
        pos.set(Square::new(4, 4), Some(Side::Light));
        pos
    }

    /// Returns the contents of a cell.
    #[inline]
    pub fn at(&self, sq: Square) -> Option<Side> {
        self.cells[sq.index()]
    }

    /// Sets the contents of a cell.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Option<Side>) {
        self.cells[sq.index()] = cell;
    }

    /// Counts the tokens of one side.
    pub fn count(&self, side: Side) -> i32 {
        self.cells.iter().filter(|c| **c == Some(side)).count() as i32
    }

    /// Returns (dark, light) token counts.
    pub fn token_counts(&self) -> (i32, i32) {
        (self.count(Side::Dark), self.count(Side::Light))
    }

    /// Returns a copy of this position with the two sides' tokens swapped
    /// and the turn handed to the other side.
    pub fn mirrored(&self) -> Position {
        let mut cells = [None; CELL_COUNT];
        for (i, c) in self.cells.iter().enumerate() {
            cells[i] = c.map(Side::opponent);
        }
        Position {
            cells,
            turn: self.turn.opponent(),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let c = match self.at(Square::new(row as u8, col as u8)) {
                    Some(side) => side.ofen_char(),
                    None => '-',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{} to move", self.turn.ofen_char())
    }
}
