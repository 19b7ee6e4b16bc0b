//! Engine state management.
//!
//! Holds the current board position and runs the search for the `go`
//! command. The side to move of the current position is the side the
//! engine chooses a move for.

use std::io::Write;

use crate::board::Position;
use crate::protocol::ofen::parse_ofen;
use crate::search::{search_root, SearchError};

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub position: Option<Position>,
}

impl Engine {
    /// Creates a new engine with no position.
    pub fn new() -> Self {
        Engine { position: None }
    }

    /// Resets all engine state for a new game.
    pub fn new_game(&mut self) {
        self.position = None;
    }

    /// Sets the current board position from an OFEN string.
    /// Returns an error message on failure.
    pub fn set_position(&mut self, ofen: &str) -> Result<(), String> {
        match parse_ofen(ofen) {
            Ok(pos) => {
                self.position = Some(pos);
                Ok(())
            }
            Err(e) => Err(format!("failed to parse OFEN: {}", e)),
        }
    }

    /// Handles the OUI handshake: writes id lines, protocol_version, and ouiok.
    pub fn handle_oui<W: Write>(&self, out: &mut W) {
        writeln!(out, "id name iago").unwrap();
        writeln!(out, "id author iago").unwrap();
        writeln!(out, "protocol_version 1").unwrap();
        writeln!(out, "ouiok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `isready` command.
    pub fn handle_isready<W: Write>(&self, out: &mut W) {
        writeln!(out, "readyok").unwrap();
        out.flush().unwrap();
    }

    /// Handles the `go` command: searches the current position and writes
    /// an `info` line followed by `bestmove`.
    ///
    /// When the side to move has no legal move, the reply is
    /// `bestmove pass` so an orchestrator that asks anyway gets a
    /// well-defined answer.
    pub fn handle_go<W: Write>(&mut self, out: &mut W) {
        let position = match &self.position {
            Some(p) => p,
            None => {
                eprintln!("go: no position set");
                return;
            }
        };

        match search_root(position) {
            Ok(result) => {
                writeln!(out, "info score {}", result.score).unwrap();
                match result.best {
                    Some(mv) => writeln!(out, "bestmove {}", mv).unwrap(),
                    None => writeln!(out, "bestmove pass").unwrap(),
                }
            }
            Err(SearchError::NoLegalMoves) => {
                writeln!(out, "bestmove pass").unwrap();
            }
        }
        out.flush().unwrap();
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}
