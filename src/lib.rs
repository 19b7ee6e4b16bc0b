//! Iago engine library.
//!
//! Exposes the board representation, rules, evaluation, search, and
//! protocol modules for use by integration tests and the binary entry
//! points.

pub mod board;
pub mod engine;
pub mod eval;
pub mod protocol;
pub mod rules;
pub mod search;
pub mod selfplay;
