//! Position evaluation.
//!
//! Scores a position from a fixed player's perspective using six
//! handcrafted features, each normalized to a percentage margin and
//! combined with fixed integer weights at depth-limit cutoffs. Terminal
//! cutoffs reached before the depth limit score by coin difference alone.

pub(crate) mod heuristic;

pub use heuristic::evaluate;
