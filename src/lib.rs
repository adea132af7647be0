//! Warlord game library.
//!
//! Exposes the board, combat resolution, missions, console protocol, and
//! session modules for use by integration tests and the binary entry point.

pub mod board;
pub mod config;
pub mod mission;
pub mod protocol;
pub mod resolve;
pub mod session;
