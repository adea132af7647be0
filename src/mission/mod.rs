//! Secret missions.
//!
//! Each game draws one mission for the player at setup. The mission's goal
//! is authoritative; its description is derived text for display.

pub mod check;
pub mod draw;

use serde::Serialize;

use crate::board::Color;

pub use check::check_victory;
pub use draw::{draw_mission, MAX_ELIMINATE_REDRAWS};

/// The win condition a mission asks for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "target")]
pub enum Goal {
    /// Hold at least this many territories.
    ConquerCount(usize),
    /// Leave no territory owned by this color.
    EliminateColor(Color),
    /// Station at least this many troops across owned territories.
    AccumulateTroops(u64),
}

impl Goal {
    /// Human-readable text for the goal.
    pub fn describe(&self) -> String {
        match self {
            Goal::ConquerCount(n) => format!("Conquer at least {} territories.", n),
            Goal::EliminateColor(color) => format!("Eliminate every {} army from the map.", color),
            Goal::AccumulateTroops(n) => {
                format!("Accumulate at least {} troops across your territories.", n)
            }
        }
    }
}

/// A drawn mission. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mission {
    goal: Goal,
    description: String,
}

impl Mission {
    pub fn new(goal: Goal) -> Self {
        let description = goal.describe();
        Mission { goal, description }
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Returns the mission's display text.
pub fn describe_mission(mission: &Mission) -> &str {
    mission.description()
}
