//! Integration tests for the iago engine binary.
//!
//! Tests the full OUI protocol session flow by spawning the engine process,
//! sending commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_iago");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start iago");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// The standard initial-position OFEN.
const OPENING_OFEN: &str = "--------/--------/--------/---LD---/---DL---/--------/--------/-------- D";

/// A position where dark has no legal move.
const BLOCKED_OFEN: &str = "DD------/--------/--------/--------/--------/--------/--------/-------- D";

#[test]
fn oui_handshake_with_protocol_version() {
    let lines = run_engine(&["oui", "quit"]);

    assert!(lines.iter().any(|l| l == "id name iago"));
    assert!(lines.iter().any(|l| l == "id author iago"));
    assert!(lines.iter().any(|l| l == "protocol_version 1"));
    assert!(lines.iter().any(|l| l == "ouiok"));

    // ouiok must close the handshake
    let ouiok_idx = lines.iter().position(|l| l == "ouiok").unwrap();
    let proto_idx = lines.iter().position(|l| l == "protocol_version 1").unwrap();
    assert!(proto_idx < ouiok_idx, "protocol_version must appear before ouiok");
}

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert!(lines.contains(&"readyok".to_string()));
}

#[test]
fn unknown_commands_are_ignored() {
    let lines = run_engine(&["foobar", "nonsense", "quit"]);
    assert!(lines.is_empty());
}

#[test]
fn empty_lines_are_ignored() {
    let lines = run_engine(&["", "  ", "isready", "quit"]);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], "readyok");
}

#[test]
fn full_handshake_then_isready() {
    let lines = run_engine(&["oui", "isready", "quit"]);

    assert!(lines.iter().any(|l| l == "id name iago"));
    assert!(lines.iter().any(|l| l == "ouiok"));
    assert!(lines.last() == Some(&"readyok".to_string()));
}

#[test]
fn position_go_produces_bestmove() {
    let lines = run_engine(&[
        "oui",
        "isready",
        "newgame",
        &format!("position {}", OPENING_OFEN),
        "go",
        "quit",
    ]);

    let bestmoves: Vec<&String> = lines.iter().filter(|l| l.starts_with("bestmove ")).collect();
    assert_eq!(bestmoves.len(), 1, "expected exactly one bestmove response");

    let mv = bestmoves[0].strip_prefix("bestmove ").unwrap();
    assert!(
        ["d3", "c4", "f5", "e6"].contains(&mv),
        "opening reply must be one of the four legal moves, got: {}",
        mv,
    );

    // The info line with the root score comes before the move
    let info_idx = lines
        .iter()
        .position(|l| l.starts_with("info score "))
        .expect("missing info score line");
    let best_idx = lines.iter().position(|l| l.starts_with("bestmove ")).unwrap();
    assert!(info_idx < best_idx);
}

#[test]
fn go_without_position_produces_no_output() {
    let lines = run_engine(&["oui", "isready", "go", "isready", "quit"]);

    assert!(!lines.iter().any(|l| l.starts_with("bestmove")));
    // Engine must still be responsive afterwards
    let readyok_count = lines.iter().filter(|l| *l == "readyok").count();
    assert_eq!(readyok_count, 2);
}

#[test]
fn newgame_resets_state() {
    // Set a position and search, then newgame and go again without a
    // position: the second go must produce nothing.
    let lines = run_engine(&[
        "oui",
        "isready",
        &format!("position {}", OPENING_OFEN),
        "go",
        "newgame",
        "go",
        "quit",
    ]);

    let bestmoves: Vec<&String> = lines.iter().filter(|l| l.starts_with("bestmove ")).collect();
    assert_eq!(bestmoves.len(), 1, "second go after newgame should produce no bestmove");
}

#[test]
fn blocked_side_gets_pass() {
    let lines = run_engine(&[
        "oui",
        "isready",
        &format!("position {}", BLOCKED_OFEN),
        "go",
        "quit",
    ]);

    assert!(lines.contains(&"bestmove pass".to_string()));
}

#[test]
fn sequential_positions_in_one_session() {
    let lines = run_engine(&[
        "oui",
        "isready",
        "newgame",
        &format!("position {}", OPENING_OFEN),
        "go",
        &format!("position {}", BLOCKED_OFEN),
        "go",
        "quit",
    ]);

    let bestmoves: Vec<&String> = lines.iter().filter(|l| l.starts_with("bestmove ")).collect();
    assert_eq!(bestmoves.len(), 2, "expected two bestmove responses");
    assert_eq!(bestmoves[1].as_str(), "bestmove pass");
}

#[test]
fn malformed_position_does_not_crash() {
    let lines = run_engine(&[
        "oui",
        "isready",
        "position garbage_ofen",
        "isready",
        "quit",
    ]);

    let readyok_count = lines.iter().filter(|l| *l == "readyok").count();
    assert_eq!(readyok_count, 2, "engine should respond to both isready commands");
}

#[test]
fn eof_exits_cleanly() {
    // No quit command; just close stdin
    let lines = run_engine(&["oui", "isready"]);

    assert!(lines.iter().any(|l| l == "ouiok"));
    assert!(lines.iter().any(|l| l == "readyok"));
}

#[test]
fn stop_does_not_crash() {
    let lines = run_engine(&["oui", "stop", "isready", "quit"]);
    assert!(lines.iter().any(|l| l == "readyok"));
}

#[test]
fn search_is_repeatable_within_a_session() {
    let lines = run_engine(&[
        "oui",
        &format!("position {}", OPENING_OFEN),
        "go",
        &format!("position {}", OPENING_OFEN),
        "go",
        "quit",
    ]);

    let bestmoves: Vec<&String> = lines.iter().filter(|l| l.starts_with("bestmove ")).collect();
    assert_eq!(bestmoves.len(), 2);
    assert_eq!(bestmoves[0], bestmoves[1]);

    let infos: Vec<&String> = lines.iter().filter(|l| l.starts_with("info score ")).collect();
    assert_eq!(infos.len(), 2);
    assert_eq!(infos[0], infos[1]);
}
