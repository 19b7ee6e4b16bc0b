//! OFEN (Othello FEN) encoding and decoding.
//!
//! OFEN is a compact single-line notation for a full Othello position,
//! inspired by chess FEN: eight ranks of eight cell characters separated
//! by `/`, a space, and the side to move.
//!
//! Cell characters: `D` dark, `L` light, `-` empty. The standard opening
//! position is
//! `--------/--------/--------/---LD---/---DL---/--------/--------/-------- D`.

use crate::board::{Position, Side, Square, BOARD_SIZE};

/// Errors that can occur during OFEN parsing.
#[derive(Debug, thiserror::Error)]
pub enum OfenError {
    #[error("expected '<board> <turn>', got '{0}'")]
    MissingTurnField(String),

    #[error("expected 8 ranks separated by '/', got {0}")]
    WrongRankCount(usize),

    #[error("rank {0} has {1} cells, expected 8")]
    WrongRankLength(usize, usize),

    #[error("invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("invalid turn character: '{0}'")]
    InvalidTurn(String),
}

/// Parses an OFEN string into a position.
pub fn parse_ofen(s: &str) -> Result<Position, OfenError> {
    let s = s.trim();
    let (board_part, turn_part) = s
        .split_once(' ')
        .ok_or_else(|| OfenError::MissingTurnField(s.to_string()))?;

    let mut turn_chars = turn_part.chars();
    let turn_char = turn_chars
        .next()
        .ok_or_else(|| OfenError::InvalidTurn(turn_part.to_string()))?;
    if turn_chars.next().is_some() {
        return Err(OfenError::InvalidTurn(turn_part.to_string()));
    }
    let turn =
        Side::from_ofen_char(turn_char).ok_or_else(|| OfenError::InvalidTurn(turn_part.to_string()))?;

    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err(OfenError::WrongRankCount(ranks.len()));
    }

    let mut pos = Position::empty(turn);
    for (row, rank) in ranks.iter().enumerate() {
        let cells: Vec<char> = rank.chars().collect();
        if cells.len() != BOARD_SIZE {
            return Err(OfenError::WrongRankLength(row, cells.len()));
        }
        for (col, &c) in cells.iter().enumerate() {
            let cell = match c {
                '-' => None,
                other => Some(Side::from_ofen_char(other).ok_or(OfenError::InvalidCell(other))?),
            };
            pos.set(Square::new(row as u8, col as u8), cell);
        }
    }

    Ok(pos)
}

/// Encodes a position as an OFEN string.
pub fn encode_ofen(pos: &Position) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * (BOARD_SIZE + 1) + 1);
    for row in 0..BOARD_SIZE as u8 {
        if row > 0 {
            out.push('/');
        }
        for col in 0..BOARD_SIZE as u8 {
            out.push(match pos.at(Square::new(row, col)) {
                Some(side) => side.ofen_char(),
                None => '-',
            });
        }
    }
    out.push(' ');
    out.push(pos.turn.ofen_char());
    out
}

/// The standard opening position in OFEN.
pub const OPENING_OFEN: &str =
    "--------/--------/--------/---LD---/---DL---/--------/--------/-------- D";
