//! Minimax move selection with alpha-beta pruning.
//!
//! Two mutually recursive procedures alternate maximizing and minimizing
//! levels over the legal-move tree. Cutoff nodes (no legal move for the
//! side on turn, or the depth limit) are scored by the static evaluator
//! from the root player's perspective. Pruning is fail-soft: a pruned
//! branch may report a bound rather than an exact value.
//!
//! Two behaviors are deliberate contracts, not incidental details:
//!
//! - Tie-break: best-value tracking uses non-strict comparisons, so a
//!   later-explored move with an equal value replaces the recorded best
//!   (last-equal-wins over the row-major move order).
//! - Depth bookkeeping: the depth counter advances once per move iterated
//!   within a node, so the k-th child of a node entered at depth `d` is
//!   searched at depth `d + k`. The evaluator's regime switch keys off
//!   this counter; redefining it as plies-from-root would change play.

use thiserror::Error;

use crate::board::{Position, Side, Square};
use crate::eval::evaluate;
use crate::rules::{apply_move, legal_moves};

use super::MAX_DEPTH;

/// Errors from move selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The side to move has no legal move. The caller must not ask for a
    /// move in this situation; the game loop handles passes itself.
    #[error("no legal move for the side to move")]
    NoLegalMoves,
}

/// The minimax value of a subtree and the move that leads to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: i32,
    pub best: Option<Square>,
}

/// Immutable per-search state: the side whose move is being chosen.
///
/// Threading this through every call keeps the search re-entrant; nothing
/// is shared between concurrent searches of independent positions.
struct SearchContext {
    player: Side,
}

impl SearchContext {
    /// Maximizing level: picks the child with the greatest value.
    fn maximize(
        &self,
        node: &Position,
        origin: &Position,
        mut alpha: i32,
        beta: i32,
        arriving: Option<Square>,
        mut depth: u32,
    ) -> SearchResult {
        let moves = legal_moves(node);
        if depth >= MAX_DEPTH || moves.is_empty() {
            // An empty move list covers both game over and a forced pass;
            // either way this line ends here.
            return SearchResult {
                score: evaluate(self.player, node, origin, depth),
                best: arriving,
            };
        }

        let mut value = i32::MIN;
        let mut best = None;
        for mv in moves {
            let child = apply_move(node, mv);
            depth += 1;
            let reply = self.minimize(&child, node, alpha, beta, Some(mv), depth);
            if value <= reply.score {
                value = reply.score;
                best = Some(mv);
            }
            if value >= beta {
                return SearchResult { score: value, best };
            }
            alpha = alpha.max(value);
        }
        SearchResult { score: value, best }
    }

    /// Minimizing level: symmetric counterpart of `maximize`.
    fn minimize(
        &self,
        node: &Position,
        origin: &Position,
        alpha: i32,
        mut beta: i32,
        arriving: Option<Square>,
        mut depth: u32,
    ) -> SearchResult {
        let moves = legal_moves(node);
        if depth >= MAX_DEPTH || moves.is_empty() {
            return SearchResult {
                score: evaluate(self.player, node, origin, depth),
                best: arriving,
            };
        }

        let mut value = i32::MAX;
        let mut best = None;
        for mv in moves {
            let child = apply_move(node, mv);
            depth += 1;
            let reply = self.maximize(&child, node, alpha, beta, Some(mv), depth);
            if value >= reply.score {
                value = reply.score;
                best = Some(mv);
            }
            if value <= alpha {
                return SearchResult { score: value, best };
            }
            beta = beta.min(value);
        }
        SearchResult { score: value, best }
    }
}

/// Runs the full search from `position` for the side on turn and returns
/// the root value together with the chosen move.
///
/// The root is a maximizing level with the widest possible window; the
/// root position serves as its own origin, so root-adjacent evaluations
/// compare mobility against the root itself.
pub fn search_root(position: &Position) -> Result<SearchResult, SearchError> {
    if legal_moves(position).is_empty() {
        return Err(SearchError::NoLegalMoves);
    }
    let ctx = SearchContext {
        player: position.turn,
    };
    Ok(ctx.maximize(position, position, i32::MIN, i32::MAX, None, 0))
}

/// Selects the best legal move for the side on turn.
pub fn decide_move(position: &Position) -> Result<Square, SearchError> {
    let result = search_root(position)?;
    result.best.ok_or(SearchError::NoLegalMoves)
}
