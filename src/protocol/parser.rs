//! OUI command parser.
//!
//! Parses incoming OUI protocol commands from raw text into structured
//! `Command` variants that the engine main loop can dispatch on.

/// A parsed server-to-engine OUI command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Initialize the OUI protocol handshake.
    Oui,

    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Reset engine state for a new game.
    NewGame,

    /// Set the board position from an OFEN string.
    Position { ofen: String },

    /// Begin calculating a move for the side on turn.
    Go,

    /// Interrupt the current search. The search has no time budget, so
    /// this is accepted for protocol compatibility and ignored.
    Stop,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "oui" => Some(Command::Oui),
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "go" => Some(Command::Go),
        "stop" => Some(Command::Stop),
        "quit" => Some(Command::Quit),

        "position" => {
            if tokens.len() < 2 {
                return None;
            }
            Some(Command::Position {
                ofen: tokens[1..].join(" "),
            })
        }

        _ => None,
    }
}
