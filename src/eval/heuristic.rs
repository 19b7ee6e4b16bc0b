//! Heuristic position evaluation.
//!
//! Six features, each reduced to a percentage margin in `[-100, 100]`:
//! coin difference, corner ownership, positional stability, mobility,
//! full-edge ownership, and frontier pieces. At a depth-limit cutoff all
//! six are combined with fixed weights; at a terminal cutoff below the
//! depth limit the coin difference stands alone, since actual token count
//! is all that matters in a finished line.
//!
//! Design: all evaluation is integer arithmetic on fixed-size arrays; no
//! heap allocation outside the mobility feature's move generation.

use crate::board::{Position, Side, Square, BOARD_SIZE};
use crate::rules::legal_moves;
use crate::search::MAX_DEPTH;

/// Static positional values. Corners are prized; the X- and C-squares
/// beside them are penalized because they hand the corner to the opponent.
const STABILITY_BOARD: [[i32; BOARD_SIZE]; BOARD_SIZE] = [
    [4, -3, 2, 2, 2, 2, -3, 4],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [2, -1, 2, 0, 0, 2, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 0, 1, 1, 0, -1, 2],
    [2, -1, 2, 0, 0, 2, -1, 2],
    [-3, -4, -1, -1, -1, -1, -4, -3],
    [4, -3, 2, 2, 2, 2, -3, 4],
];

const CORNER_WEIGHT: i32 = 20000;
const COIN_WEIGHT: i32 = 50;
const STABILITY_WEIGHT: i32 = 400;
const MOBILITY_WEIGHT: i32 = 80;
const BORDER_LINE_WEIGHT: i32 = 400;
const FRONTIER_WEIGHT: i32 = 75;

/// Percentage margin `100 * (own - other) / (own + other)`, defined as 0
/// when the denominator is 0.
#[inline]
fn percentage_margin(own: i32, other: i32) -> i32 {
    let total = own + other;
    if total == 0 {
        0
    } else {
        100 * (own - other) / total
    }
}

/// Margin of total token counts.
pub(crate) fn coin_diff(player: Side, pos: &Position) -> i32 {
    let own = pos.count(player);
    let other = pos.count(player.opponent());
    percentage_margin(own, other)
}

/// Margin of corner-cell ownership.
pub(crate) fn corners(player: Side, pos: &Position) -> i32 {
    const CORNERS: [Square; 4] = [
        Square::new(0, 0),
        Square::new(0, 7),
        Square::new(7, 0),
        Square::new(7, 7),
    ];

    let mut own = 0;
    let mut other = 0;
    for &sq in CORNERS.iter() {
        match pos.at(sq) {
            Some(s) if s == player => own += 1,
            Some(_) => other += 1,
            None => {}
        }
    }
    percentage_margin(own, other)
}

/// Margin of positional-value sums over the stability table.
pub(crate) fn stability(player: Side, pos: &Position) -> i32 {
    let mut own = 0;
    let mut other = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match pos.at(Square::new(row as u8, col as u8)) {
                Some(s) if s == player => own += STABILITY_BOARD[row][col],
                Some(_) => other += STABILITY_BOARD[row][col],
                None => {}
            }
        }
    }
    percentage_margin(own, other)
}

/// Margin of legal-move counts.
///
/// The side on turn in `node` contributes its live move count; the other
/// side's mobility was last computed one ply earlier, so its count comes
/// from `origin`, the parent position.
pub(crate) fn mobility(player: Side, node: &Position, origin: &Position) -> i32 {
    let own = if node.turn == player {
        legal_moves(node).len() as i32
    } else {
        legal_moves(origin).len() as i32
    };
    let other = if node.turn == player.opponent() {
        legal_moves(node).len() as i32
    } else {
        legal_moves(origin).len() as i32
    };
    percentage_margin(own, other)
}

/// Margin of fully-owned board edges.
///
/// An edge counts for a side only when all eight of its cells hold that
/// side's tokens.
pub(crate) fn border_lines(player: Side, pos: &Position) -> i32 {
    let mut own = 0;
    let mut other = 0;

    let edges: [[Square; BOARD_SIZE]; 4] = [
        std::array::from_fn(|i| Square::new(0, i as u8)),
        std::array::from_fn(|i| Square::new(7, i as u8)),
        std::array::from_fn(|i| Square::new(i as u8, 0)),
        std::array::from_fn(|i| Square::new(i as u8, 7)),
    ];

    for edge in edges.iter() {
        let first = pos.at(edge[0]);
        let Some(side) = first else { continue };
        if edge[1..].iter().all(|&sq| pos.at(sq) == first) {
            if side == player {
                own += 1;
            } else {
                other += 1;
            }
        }
    }

    percentage_margin(own, other)
}

/// Margin of frontier pieces: occupied cells with at least one empty
/// neighbor. Frontier pieces are credited positively to their owner.
pub(crate) fn frontier(player: Side, pos: &Position) -> i32 {
    let mut own = 0;
    let mut other = 0;

    for row in 0..BOARD_SIZE as i8 {
        for col in 0..BOARD_SIZE as i8 {
            let Some(side) = pos.at(Square::new(row as u8, col as u8)) else {
                continue;
            };
            let mut has_empty_neighbor = false;
            for dr in -1..=1i8 {
                for dc in -1..=1i8 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let (r, c) = (row + dr, col + dc);
                    if (0..BOARD_SIZE as i8).contains(&r)
                        && (0..BOARD_SIZE as i8).contains(&c)
                        && pos.at(Square::new(r as u8, c as u8)).is_none()
                    {
                        has_empty_neighbor = true;
                    }
                }
            }
            if has_empty_neighbor {
                if side == player {
                    own += 1;
                } else {
                    other += 1;
                }
            }
        }
    }

    percentage_margin(own, other)
}

/// Evaluates a cutoff node from `player`'s perspective.
///
/// Below `MAX_DEPTH` the cutoff was forced by a position with no moves, so
/// only the realized token margin counts. At `MAX_DEPTH` the position is
/// still live and all six features are combined.
pub fn evaluate(player: Side, node: &Position, origin: &Position, depth: u32) -> i32 {
    if depth < MAX_DEPTH {
        coin_diff(player, node)
    } else {
        corners(player, node) * CORNER_WEIGHT
            + coin_diff(player, node) * COIN_WEIGHT
            + stability(player, node) * STABILITY_WEIGHT
            + mobility(player, node, origin) * MOBILITY_WEIGHT
            + border_lines(player, node) * BORDER_LINE_WEIGHT
            + frontier(player, node) * FRONTIER_WEIGHT
    }
}
