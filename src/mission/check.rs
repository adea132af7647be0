//! Mission evaluation.

use super::{Goal, Mission};
use crate::board::{Color, World};

/// Returns true if `player` has fulfilled `mission` on the current map.
///
/// An elimination goal is met as soon as the target color holds nothing,
/// including when it never appeared on the map.
pub fn check_victory(world: &World, mission: &Mission, player: &Color) -> bool {
    match mission.goal() {
        Goal::ConquerCount(target) => world.territories_owned_by(player) >= *target,
        Goal::EliminateColor(target) => world.territories_owned_by(target) == 0,
        Goal::AccumulateTroops(target) => world.troops_owned_by(player) >= *target,
    }
}
