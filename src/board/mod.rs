//! Board representation.
//!
//! Contains the territory records, faction colors, and the world map that
//! owns them.

pub mod territory;
pub mod world;

pub use territory::{Color, Territory};
pub use world::{TerritoryEntry, World, WorldError, MAX_START_TROOPS, MIN_START_TROOPS};
