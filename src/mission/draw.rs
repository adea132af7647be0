//! Mission drawing.

use rand::Rng;

use super::{Goal, Mission};
use crate::board::Color;

/// How many times an elimination target is redrawn while it equals the
/// player's own color. After that the last draw is kept.
pub const MAX_ELIMINATE_REDRAWS: usize = 10;

/// Draws a mission for `player`.
///
/// The kind is uniform over the three goals. Conquest targets are
/// `max(1, N/3 + U{0..=2})`, troop targets are `max(1, N + U{0..=N/2})`,
/// where `N` is the territory count.
pub fn draw_mission<R: Rng + ?Sized>(
    player: &Color,
    colors: &[Color],
    territory_count: usize,
    rng: &mut R,
) -> Mission {
    let goal = match rng.gen_range(0..3) {
        0 => conquer_goal(territory_count, rng),
        1 => match eliminate_target(player, colors, rng) {
            Some(color) => Goal::EliminateColor(color),
            // No rivals listed at all; fall back to a conquest goal.
            None => conquer_goal(territory_count, rng),
        },
        _ => troops_goal(territory_count, rng),
    };

    tracing::debug!(?goal, player = %player, "drew mission");
    Mission::new(goal)
}

fn conquer_goal<R: Rng + ?Sized>(territory_count: usize, rng: &mut R) -> Goal {
    let target = territory_count / 3 + rng.gen_range(0..=2);
    Goal::ConquerCount(target.max(1))
}

fn troops_goal<R: Rng + ?Sized>(territory_count: usize, rng: &mut R) -> Goal {
    let n = territory_count as u64;
    let target = n + rng.gen_range(0..=n / 2);
    Goal::AccumulateTroops(target.max(1))
}

/// Picks a color to eliminate, preferring one that is not the player's.
fn eliminate_target<R: Rng + ?Sized>(player: &Color, colors: &[Color], rng: &mut R) -> Option<Color> {
    if colors.is_empty() {
        return None;
    }
    let mut pick = &colors[rng.gen_range(0..colors.len())];
    let mut redraws = 0;
    while pick == player && redraws < MAX_ELIMINATE_REDRAWS {
        pick = &colors[rng.gen_range(0..colors.len())];
        redraws += 1;
    }
    if pick == player {
        tracing::warn!(player = %player, "elimination target is the player's own color");
    }
    Some(pick.clone())
}
