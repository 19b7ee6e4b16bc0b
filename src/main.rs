//! Iago -- an Othello engine implementing the OUI protocol.
//!
//! This binary reads commands from stdin and writes responses to stdout,
//! following the OUI (Othello Universal Interface) convention.

use std::io::{self, BufRead};

use iago::engine::Engine;
use iago::protocol::parser::{parse_command, Command};

/// Runs the main OUI protocol loop, reading commands from stdin
/// and writing responses to stdout.
fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => continue,
        };

        match cmd {
            Command::Oui => {
                engine.handle_oui(&mut out);
            }
            Command::IsReady => {
                engine.handle_isready(&mut out);
            }
            Command::NewGame => {
                engine.new_game();
            }
            Command::Position { ofen } => {
                if let Err(e) = engine.set_position(&ofen) {
                    eprintln!("{}", e);
                }
            }
            Command::Go => {
                engine.handle_go(&mut out);
            }
            Command::Stop => {
                // The search has no time budget to interrupt; no-op
            }
            Command::Quit => {
                break;
            }
        }
    }
}
