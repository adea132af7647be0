//! Attack validation.
//!
//! Sits between the console and combat resolution: checks the two raw
//! indices against the world and the acting player before any dice are
//! rolled. A rejected attack leaves the world untouched.

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use super::combat::{resolve_combat, CombatOutcome};
use crate::board::{Color, World};

/// Why an attack was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttackError {
    #[error("a territory cannot attack itself")]
    SelfTarget,

    #[error("territory index {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },

    #[error("{name} is held by {owner}, not by {player}")]
    NotOwner {
        name: String,
        owner: Color,
        player: Color,
    },

    #[error("{source_name} and {target_name} are both held by {owner}")]
    SameOwner {
        source_name: String,
        target_name: String,
        owner: Color,
    },

    #[error("{name} has {troops} troop(s); at least 2 are needed to attack")]
    InsufficientTroops { name: String, troops: u32 },
}

/// A resolved attack, with the indices it was fought between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AttackReport {
    pub source: usize,
    pub target: usize,
    pub outcome: CombatOutcome,
}

/// Checks whether `player` may attack `target` from `source`.
///
/// Reasons are checked in a fixed order, so attacking a territory from
/// itself is always reported as `SelfTarget`.
pub fn validate_attack(
    world: &World,
    source: usize,
    target: usize,
    player: &Color,
) -> Result<(), AttackError> {
    if source == target {
        return Err(AttackError::SelfTarget);
    }

    let len = world.len();
    let from = world
        .get(source)
        .ok_or(AttackError::OutOfRange { index: source, len })?;
    let to = world
        .get(target)
        .ok_or(AttackError::OutOfRange { index: target, len })?;

    if !from.is_owned_by(player) {
        return Err(AttackError::NotOwner {
            name: from.name().to_string(),
            owner: from.owner().clone(),
            player: player.clone(),
        });
    }
    if from.owner() == to.owner() {
        return Err(AttackError::SameOwner {
            source_name: from.name().to_string(),
            target_name: to.name().to_string(),
            owner: from.owner().clone(),
        });
    }
    if from.troops() < 2 {
        return Err(AttackError::InsufficientTroops {
            name: from.name().to_string(),
            troops: from.troops(),
        });
    }
    Ok(())
}

/// Validates an attack and, if allowed, resolves it with dice from `rng`.
pub fn validate_and_attack<R: Rng + ?Sized>(
    world: &mut World,
    source: usize,
    target: usize,
    player: &Color,
    rng: &mut R,
) -> Result<AttackReport, AttackError> {
    validate_attack(world, source, target, player)?;

    let len = world.len();
    let (attacker, defender) = world
        .pair_mut(source, target)
        .ok_or(AttackError::OutOfRange { index: target, len })?;
    let outcome = resolve_combat(attacker, defender, rng);

    Ok(AttackReport {
        source,
        target,
        outcome,
    })
}
