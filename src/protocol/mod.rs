//! Text protocol.
//!
//! Game notation for storing and exchanging positions, and the command
//! parser for the engine's line-based main loop.

pub mod notation;
pub mod parser;

pub use notation::{encode_notation, parse_notation, NotationError};
pub use parser::{parse_command, Command};
