//! Protocol surfaces.
//!
//! OFEN position notation and the OUI command parser used by the binary
//! entry point.

pub mod ofen;
pub mod parser;

pub use ofen::{encode_ofen, parse_ofen, OfenError, OPENING_OFEN};
pub use parser::{parse_command, Command};
