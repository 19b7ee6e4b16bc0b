//! Legal move generation and move application.
//!
//! Implements the flipping rule of Othello: a move is legal when it
//! brackets at least one contiguous run of opposing tokens against one of
//! the mover's own tokens, along any of the eight directions. The search
//! core consumes this module only through `legal_moves`, `apply_move`, and
//! `is_terminal`.

use rand::Rng;

use crate::board::{Position, Side, Square, BOARD_SIZE};

/// The eight neighbor directions as (row, col) deltas.
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walks from `sq` in direction `(dr, dc)` and reports whether placing a
/// token for `side` at `sq` would flip tokens along that direction.
fn would_flip_in_direction(pos: &Position, side: Side, sq: Square, dr: i8, dc: i8) -> bool {
    let opponent = side.opponent();
    let mut r = sq.row as i8 + dr;
    let mut c = sq.col as i8 + dc;
    let mut found_opponent = false;

    while (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
        match pos.at(Square::new(r as u8, c as u8)) {
            None => return false,
            Some(s) if s == opponent => {
                found_opponent = true;
                r += dr;
                c += dc;
            }
            Some(_) => return found_opponent,
        }
    }

    false
}

/// Returns true if the side on turn may place a token at `sq`.
pub fn is_legal_move(pos: &Position, sq: Square) -> bool {
    if pos.at(sq).is_some() {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| would_flip_in_direction(pos, pos.turn, sq, dr, dc))
}

/// Enumerates all legal moves for the side on turn, in row-major order.
///
/// The ordering is part of the engine's contract: the search explores
/// children in this order and breaks score ties in favor of the
/// later-explored move.
pub fn legal_moves(pos: &Position) -> Vec<Square> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE as u8 {
        for col in 0..BOARD_SIZE as u8 {
            let sq = Square::new(row, col);
            if is_legal_move(pos, sq) {
                moves.push(sq);
            }
        }
    }
    moves
}

/// Flips the bracketed run of opposing tokens from `sq` along one direction.
fn flip_in_direction(pos: &mut Position, side: Side, sq: Square, dr: i8, dc: i8) {
    let opponent = side.opponent();
    let mut r = sq.row as i8 + dr;
    let mut c = sq.col as i8 + dc;

    while (0..BOARD_SIZE as i8).contains(&r) && (0..BOARD_SIZE as i8).contains(&c) {
        let here = Square::new(r as u8, c as u8);
        if pos.at(here) == Some(opponent) {
            pos.set(here, Some(side));
            r += dr;
            c += dc;
        } else {
            break;
        }
    }
}

/// Applies a legal move for the side on turn, returning the new position
/// with the turn handed to the opponent. The input is not mutated.
///
/// The move must be legal; applying an illegal move leaves tokens in an
/// inconsistent state.
pub fn apply_move(pos: &Position, sq: Square) -> Position {
    let side = pos.turn;
    let mut next = pos.clone();
    next.set(sq, Some(side));

    for &(dr, dc) in DIRECTIONS.iter() {
        if would_flip_in_direction(pos, side, sq, dr, dc) {
            flip_in_direction(&mut next, side, sq, dr, dc);
        }
    }

    next.turn = side.opponent();
    next
}

/// Hands the turn to the opponent without placing a token.
pub fn pass(pos: &Position) -> Position {
    let mut next = pos.clone();
    next.turn = next.turn.opponent();
    next
}

/// Returns true when neither side has a legal move.
pub fn is_terminal(pos: &Position) -> bool {
    legal_moves(pos).is_empty() && legal_moves(&pass(pos)).is_empty()
}

/// Picks a uniform-random legal move for the side on turn, or `None` when
/// the side must pass.
pub fn random_move(pos: &Position, rng: &mut impl Rng) -> Option<Square> {
    let moves = legal_moves(pos);
    if moves.is_empty() {
        return None;
    }
    Some(moves[rng.gen_range(0..moves.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn sq(alg: &str) -> Square {
        Square::from_algebraic(alg).unwrap()
    }

    #[test]
    fn opening_has_four_legal_moves() {
        let pos = Position::opening();
        let moves = legal_moves(&pos);
        assert_eq!(moves, vec![sq("d3"), sq("c4"), sq("f5"), sq("e6")]);
    }

    #[test]
    fn occupied_cell_is_illegal() {
        let pos = Position::opening();
        assert!(!is_legal_move(&pos, sq("d4")));
        assert!(!is_legal_move(&pos, sq("e4")));
    }

    #[test]
    fn cell_without_bracket_is_illegal() {
        let pos = Position::opening();
        assert!(!is_legal_move(&pos, sq("a1")));
        assert!(!is_legal_move(&pos, sq("c3")));
    }

    #[test]
    fn apply_move_flips_bracketed_run() {
        let pos = Position::opening();
        let next = apply_move(&pos, sq("d3"));

        // d3 placed, d4 flipped dark; d5 was already dark.
        assert_eq!(next.at(sq("d3")), Some(Side::Dark));
        assert_eq!(next.at(sq("d4")), Some(Side::Dark));
        assert_eq!(next.at(sq("d5")), Some(Side::Dark));
        assert_eq!(next.at(sq("e5")), Some(Side::Light));
        assert_eq!(next.token_counts(), (4, 1));
        assert_eq!(next.turn, Side::Light);
    }

    #[test]
    fn apply_move_does_not_mutate_input() {
        let pos = Position::opening();
        let before = pos.clone();
        let _ = apply_move(&pos, sq("d3"));
        assert_eq!(pos, before);
    }

    #[test]
    fn apply_move_flips_multiple_directions() {
        // Dark at d4 brackets light runs both east (e4) and south (d5).
        let mut pos = Position::empty(Side::Dark);
        pos.set(sq("e4"), Some(Side::Light));
        pos.set(sq("f4"), Some(Side::Dark));
        pos.set(sq("d5"), Some(Side::Light));
        pos.set(sq("d6"), Some(Side::Dark));

        assert!(is_legal_move(&pos, sq("d4")));
        let next = apply_move(&pos, sq("d4"));
        assert_eq!(next.at(sq("e4")), Some(Side::Dark));
        assert_eq!(next.at(sq("d5")), Some(Side::Dark));
        assert_eq!(next.count(Side::Light), 0);
    }

    #[test]
    fn pass_only_switches_turn() {
        let pos = Position::opening();
        let passed = pass(&pos);
        assert_eq!(passed.turn, Side::Light);
        assert_eq!(passed.cells, pos.cells);
    }

    #[test]
    fn opening_is_not_terminal() {
        assert!(!is_terminal(&Position::opening()));
    }

    #[test]
    fn full_board_is_terminal() {
        let mut pos = Position::empty(Side::Dark);
        for i in 0..crate::board::CELL_COUNT {
            let side = if i % 2 == 0 { Side::Dark } else { Side::Light };
            pos.cells[i] = Some(side);
        }
        assert!(is_terminal(&pos));
    }

    #[test]
    fn one_sided_board_is_terminal() {
        // Light has no tokens left, so neither side can bracket anything.
        let mut pos = Position::empty(Side::Dark);
        pos.set(sq("d4"), Some(Side::Dark));
        pos.set(sq("d5"), Some(Side::Dark));
        assert!(legal_moves(&pos).is_empty());
        assert!(is_terminal(&pos));
    }

    #[test]
    fn random_move_is_legal() {
        let pos = Position::opening();
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..20 {
            let mv = random_move(&pos, &mut rng).unwrap();
            assert!(is_legal_move(&pos, mv));
        }
    }

    #[test]
    fn random_move_none_when_blocked() {
        let pos = Position::empty(Side::Dark);
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(random_move(&pos, &mut rng), None);
    }

    #[test]
    fn mirrored_position_has_mirrored_moves() {
        let pos = Position::opening();
        let mirror = pos.mirrored();
        // Relabeling both tokens and turn leaves the legal-move set intact.
        assert_eq!(legal_moves(&pos), legal_moves(&mirror));
    }
}
