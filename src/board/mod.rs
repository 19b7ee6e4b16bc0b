//! Board representation.
//!
//! Contains the core data structures for sides, squares, and the overall
//! game position.

pub mod position;
pub mod square;

pub use position::{Position, Side};
pub use square::{Square, BOARD_SIZE, CELL_COUNT};
