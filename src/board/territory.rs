//! Territory records and faction colors.
//!
//! A territory is the atomic unit of the map: it has a display name, exactly
//! one owning color, and a troop count that never goes below zero.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A faction identifier. One color belongs to the human player.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Creates a color from any string-like name.
    pub fn new(name: impl Into<String>) -> Self {
        Color(name.into())
    }

    /// Returns the color name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for Color {
    fn from(name: &str) -> Self {
        Color(name.to_string())
    }
}

impl From<String> for Color {
    fn from(name: String) -> Self {
        Color(name)
    }
}

/// A single territory on the map.
///
/// The name is fixed at creation. Owner and troops change only through
/// combat resolution, which is why the mutators are crate-private.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    name: String,
    owner: Color,
    troops: u32,
}

impl Territory {
    /// Creates a territory with the given name, owner, and troop count.
    pub fn new(name: impl Into<String>, owner: Color, troops: u32) -> Self {
        Territory {
            name: name.into(),
            owner,
            troops,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn owner(&self) -> &Color {
        &self.owner
    }

    pub fn troops(&self) -> u32 {
        self.troops
    }

    /// Returns true if the territory is held by `color`.
    pub fn is_owned_by(&self, color: &Color) -> bool {
        self.owner == *color
    }

    pub(crate) fn set_owner(&mut self, owner: Color) {
        self.owner = owner;
    }

    pub(crate) fn set_troops(&mut self, troops: u32) {
        self.troops = troops;
    }
}
