//! Dice combat between two territories.
//!
//! One die is rolled for each side. The attacker must roll strictly higher to
//! win; ties go to the defender. A winning attacker captures the defender and
//! moves half of its pre-battle troops (at least one) into it. A losing
//! attacker loses one troop.

use rand::Rng;
use serde::Serialize;

use crate::board::Territory;

/// Number of faces on a combat die.
pub const DIE_FACES: u8 = 6;

/// The side that won a battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Attacker,
    Defender,
}

/// The result of a single battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CombatOutcome {
    pub winner: Side,
    pub attack_roll: u8,
    pub defend_roll: u8,
    /// Troops moved into the captured territory; 0 when the defender held.
    pub troops_transferred: u32,
}

/// Rolls one die, uniform in `[1, 6]`.
pub fn roll_die<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(1..=DIE_FACES)
}

/// Troops a winning attacker moves into the captured territory.
pub const fn transfer_amount(attacker_troops: u32) -> u32 {
    let half = attacker_troops / 2;
    if half == 0 {
        1
    } else {
        half
    }
}

/// Resolves a battle with fresh dice from `rng`.
pub fn resolve_combat<R: Rng + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    rng: &mut R,
) -> CombatOutcome {
    let attack_roll = roll_die(rng);
    let defend_roll = roll_die(rng);
    resolve_with_rolls(attacker, defender, attack_roll, defend_roll)
}

/// Resolves a battle with the given dice, mutating both territories in place.
///
/// Callers are expected to have validated the attack; a violated precondition
/// is logged and the rule is applied anyway.
pub fn resolve_with_rolls(
    attacker: &mut Territory,
    defender: &mut Territory,
    attack_roll: u8,
    defend_roll: u8,
) -> CombatOutcome {
    if attacker.troops() < 2 || attacker.owner() == defender.owner() {
        tracing::warn!(
            attacker = attacker.name(),
            defender = defender.name(),
            troops = attacker.troops(),
            "resolving combat with unmet preconditions"
        );
    }

    let outcome = if attack_roll > defend_roll {
        let transferred = transfer_amount(attacker.troops());
        defender.set_owner(attacker.owner().clone());
        defender.set_troops(transferred);
        attacker.set_troops(attacker.troops().saturating_sub(transferred));
        CombatOutcome {
            winner: Side::Attacker,
            attack_roll,
            defend_roll,
            troops_transferred: transferred,
        }
    } else {
        attacker.set_troops(attacker.troops().saturating_sub(1));
        CombatOutcome {
            winner: Side::Defender,
            attack_roll,
            defend_roll,
            troops_transferred: 0,
        }
    };

    tracing::debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        attack_roll,
        defend_roll,
        winner = ?outcome.winner,
        "combat resolved"
    );
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Color;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pair(attacker_troops: u32, defender_troops: u32) -> (Territory, Territory) {
        (
            Territory::new("Territory_0", Color::from("Azul"), attacker_troops),
            Territory::new("Territory_1", Color::from("Vermelho"), defender_troops),
        )
    }

    #[test]
    fn attacker_win_transfers_half() {
        let (mut a, mut d) = pair(6, 2);
        let outcome = resolve_with_rolls(&mut a, &mut d, 5, 3);

        assert_eq!(outcome.winner, Side::Attacker);
        assert_eq!(outcome.troops_transferred, 3);
        assert_eq!(d.owner(), &Color::from("Azul"));
        assert_eq!(d.troops(), 3);
        assert_eq!(a.troops(), 3);
    }

    #[test]
    fn attacker_with_two_troops_moves_one() {
        let (mut a, mut d) = pair(2, 5);
        let outcome = resolve_with_rolls(&mut a, &mut d, 6, 1);

        assert_eq!(outcome.troops_transferred, 1);
        assert_eq!(a.troops(), 1);
        assert_eq!(d.troops(), 1);
        assert_eq!(d.owner(), &Color::from("Azul"));
    }

    #[test]
    fn odd_troops_round_down() {
        let (mut a, mut d) = pair(7, 1);
        let outcome = resolve_with_rolls(&mut a, &mut d, 4, 2);
        assert_eq!(outcome.troops_transferred, 3);
        assert_eq!(a.troops(), 4);
    }

    #[test]
    fn defender_win_costs_attacker_one() {
        let (mut a, mut d) = pair(2, 4);
        let outcome = resolve_with_rolls(&mut a, &mut d, 1, 6);

        assert_eq!(outcome.winner, Side::Defender);
        assert_eq!(outcome.troops_transferred, 0);
        assert_eq!(a.troops(), 1);
        assert_eq!(d.troops(), 4);
        assert_eq!(d.owner(), &Color::from("Vermelho"));
    }

    #[test]
    fn tie_goes_to_defender() {
        for roll in 1..=DIE_FACES {
            let (mut a, mut d) = pair(5, 3);
            let outcome = resolve_with_rolls(&mut a, &mut d, roll, roll);
            assert_eq!(outcome.winner, Side::Defender);
            assert_eq!(a.troops(), 4);
            assert_eq!(d.owner(), &Color::from("Vermelho"));
        }
    }

    #[test]
    fn empty_attacker_stays_at_zero() {
        let (mut a, mut d) = pair(0, 3);
        resolve_with_rolls(&mut a, &mut d, 1, 2);
        assert_eq!(a.troops(), 0);
    }

    #[test]
    fn transfer_amount_has_floor_of_one() {
        assert_eq!(transfer_amount(0), 1);
        assert_eq!(transfer_amount(1), 1);
        assert_eq!(transfer_amount(2), 1);
        assert_eq!(transfer_amount(3), 1);
        assert_eq!(transfer_amount(10), 5);
    }

    #[test]
    fn random_dice_stay_on_the_die() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let (mut a, mut d) = pair(4, 4);
            let outcome = resolve_combat(&mut a, &mut d, &mut rng);
            assert!((1..=DIE_FACES).contains(&outcome.attack_roll));
            assert!((1..=DIE_FACES).contains(&outcome.defend_roll));
            assert_eq!(
                outcome.winner == Side::Attacker,
                outcome.attack_roll > outcome.defend_roll
            );
        }
    }

    proptest! {
        #[test]
        fn exactly_one_transition_happens(
            attacker_troops in 2u32..1000,
            defender_troops in 0u32..1000,
            attack_roll in 1u8..=6,
            defend_roll in 1u8..=6,
        ) {
            let (mut a, mut d) = pair(attacker_troops, defender_troops);
            let outcome = resolve_with_rolls(&mut a, &mut d, attack_roll, defend_roll);

            match outcome.winner {
                Side::Attacker => {
                    let moved = std::cmp::max(1, attacker_troops / 2);
                    prop_assert_eq!(outcome.troops_transferred, moved);
                    prop_assert_eq!(d.owner(), &Color::from("Azul"));
                    prop_assert_eq!(d.troops(), moved);
                    prop_assert_eq!(a.troops(), attacker_troops - moved);
                }
                Side::Defender => {
                    prop_assert_eq!(outcome.troops_transferred, 0);
                    prop_assert_eq!(a.troops(), attacker_troops - 1);
                    prop_assert_eq!(d.owner(), &Color::from("Vermelho"));
                    prop_assert_eq!(d.troops(), defender_troops);
                }
            }
        }

        #[test]
        fn repeated_battles_never_add_troops(seed in any::<u64>(), start in 2u32..64) {
            let mut rng = StdRng::seed_from_u64(seed);
            let (mut a, mut d) = pair(start, start);
            let mut total = a.troops() + d.troops();
            while a.troops() >= 2 && a.owner() != d.owner() {
                resolve_combat(&mut a, &mut d, &mut rng);
                let now = a.troops() + d.troops();
                prop_assert!(now <= total);
                total = now;
            }
        }
    }
}
