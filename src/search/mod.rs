//! Adversarial search.
//!
//! Depth-limited minimax with alpha-beta pruning over the legal-move tree,
//! scoring cutoff nodes with the static evaluator.

pub mod minimax;

pub use minimax::{decide_move, search_root, SearchError, SearchResult};

/// Depth limit for the search.
///
/// The depth counter advances once per move iterated within a node, not
/// once per tree level (see `minimax`), so this is not a plies-from-root
/// horizon.
pub const MAX_DEPTH: u32 = 15;
