//! Console protocol handling.
//!
//! Parses the commands typed at the game prompt.

pub mod parser;

pub use parser::{parse_command, parse_index, Command};
