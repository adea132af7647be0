//! Battle resolution.
//!
//! Validates attacks issued by the player and resolves them with dice.

pub mod attack;
pub mod combat;

pub use attack::{validate_and_attack, validate_attack, AttackError, AttackReport};
pub use combat::{
    resolve_combat, resolve_with_rolls, roll_die, transfer_amount, CombatOutcome, Side, DIE_FACES,
};
