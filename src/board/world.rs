//! The world map.
//!
//! Holds the fixed-size, ordered collection of territories for one game.
//! Territories are addressed by position `0..len()`; the collection is never
//! resized after construction.

use std::collections::TryReserveError;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use super::territory::{Color, Territory};

/// Lowest troop count a freshly generated territory can start with.
pub const MIN_START_TROOPS: u32 = 2;

/// Highest troop count a freshly generated territory can start with.
pub const MAX_START_TROOPS: u32 = 6;

/// Errors that can occur while building a world.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("a world needs at least one territory")]
    NoTerritories,

    #[error("a world needs at least one faction color")]
    NoColors,

    #[error("failed to allocate territories: {0}")]
    Allocation(#[from] TryReserveError),
}

/// A read-only view of one territory, as listed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TerritoryEntry<'a> {
    pub index: usize,
    pub name: &'a str,
    pub owner: &'a Color,
    pub troops: u32,
}

/// The complete map: every territory in the game, in index order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct World {
    territories: Vec<Territory>,
}

impl World {
    /// Generates a world of `count` territories.
    ///
    /// Slot `i` is named `Territory_<i>`, owned by `colors[i % colors.len()]`
    /// and starts with a uniform random troop count in `[2, 6]`.
    pub fn generate<R: Rng + ?Sized>(
        count: usize,
        colors: &[Color],
        rng: &mut R,
    ) -> Result<Self, WorldError> {
        if count == 0 {
            return Err(WorldError::NoTerritories);
        }
        if colors.is_empty() {
            return Err(WorldError::NoColors);
        }

        let mut territories = Vec::new();
        territories.try_reserve_exact(count)?;
        for i in 0..count {
            let owner = colors[i % colors.len()].clone();
            let troops = rng.gen_range(MIN_START_TROOPS..=MAX_START_TROOPS);
            territories.push(Territory::new(format!("Territory_{}", i), owner, troops));
        }

        tracing::debug!(count, colors = colors.len(), "generated world");
        Ok(World { territories })
    }

    /// Builds a world from explicit territory records.
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self, WorldError> {
        if territories.is_empty() {
            return Err(WorldError::NoTerritories);
        }
        Ok(World { territories })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    /// Always false for a constructed world; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    /// Lists every territory with its index, for display.
    pub fn list(&self) -> Vec<TerritoryEntry<'_>> {
        self.territories
            .iter()
            .enumerate()
            .map(|(index, t)| TerritoryEntry {
                index,
                name: t.name(),
                owner: t.owner(),
                troops: t.troops(),
            })
            .collect()
    }

    /// Number of territories currently held by `color`.
    pub fn territories_owned_by(&self, color: &Color) -> usize {
        self.territories.iter().filter(|t| t.is_owned_by(color)).count()
    }

    /// Total troops stationed on territories held by `color`.
    pub fn troops_owned_by(&self, color: &Color) -> u64 {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(color))
            .map(|t| u64::from(t.troops()))
            .sum()
    }

    /// Borrows two distinct territories mutably.
    ///
    /// Returns `None` if the indices are equal or either is out of range.
    pub fn pair_mut(&mut self, a: usize, b: usize) -> Option<(&mut Territory, &mut Territory)> {
        let len = self.territories.len();
        if a == b || a >= len || b >= len {
            return None;
        }
        if a < b {
            let (left, right) = self.territories.split_at_mut(b);
            Some((&mut left[a], &mut right[0]))
        } else {
            let (left, right) = self.territories.split_at_mut(a);
            Some((&mut right[0], &mut left[b]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn colors(names: &[&str]) -> Vec<Color> {
        names.iter().map(|&n| Color::from(n)).collect()
    }

    #[test]
    fn generate_assigns_owners_round_robin() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = World::generate(5, &colors(&["Azul", "Vermelho"]), &mut rng).unwrap();
        let azul = Color::from("Azul");
        let vermelho = Color::from("Vermelho");

        assert_eq!(world.len(), 5);
        for i in [0, 2, 4] {
            assert_eq!(world.get(i).unwrap().owner(), &azul);
        }
        for i in [1, 3] {
            assert_eq!(world.get(i).unwrap().owner(), &vermelho);
        }
    }

    #[test]
    fn generate_names_and_troop_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let world = World::generate(40, &colors(&["Azul", "Verde", "Amarelo"]), &mut rng).unwrap();
        for (i, t) in world.iter().enumerate() {
            assert_eq!(t.name(), format!("Territory_{}", i));
            assert!((MIN_START_TROOPS..=MAX_START_TROOPS).contains(&t.troops()));
        }
    }

    #[test]
    fn generate_rejects_empty_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            World::generate(0, &colors(&["Azul"]), &mut rng),
            Err(WorldError::NoTerritories)
        ));
        assert!(matches!(
            World::generate(3, &[], &mut rng),
            Err(WorldError::NoColors)
        ));
        assert!(matches!(
            World::from_territories(Vec::new()),
            Err(WorldError::NoTerritories)
        ));
    }

    #[test]
    fn ownership_counts() {
        let azul = Color::from("Azul");
        let verde = Color::from("Verde");
        let world = World::from_territories(vec![
            Territory::new("a", azul.clone(), 3),
            Territory::new("b", verde.clone(), 5),
            Territory::new("c", azul.clone(), 0),
            Territory::new("d", azul.clone(), 4),
        ])
        .unwrap();

        assert_eq!(world.territories_owned_by(&azul), 3);
        assert_eq!(world.troops_owned_by(&azul), 7);
        assert_eq!(world.territories_owned_by(&verde), 1);
        assert_eq!(world.troops_owned_by(&Color::from("Roxo")), 0);
    }

    #[test]
    fn list_matches_territories() {
        let mut rng = StdRng::seed_from_u64(3);
        let world = World::generate(4, &colors(&["Azul", "Verde"]), &mut rng).unwrap();
        let entries = world.list();
        assert_eq!(entries.len(), 4);
        for entry in &entries {
            let t = world.get(entry.index).unwrap();
            assert_eq!(entry.name, t.name());
            assert_eq!(entry.owner, t.owner());
            assert_eq!(entry.troops, t.troops());
        }
    }

    #[test]
    fn pair_mut_borrows_in_argument_order() {
        let azul = Color::from("Azul");
        let mut world = World::from_territories(vec![
            Territory::new("a", azul.clone(), 1),
            Territory::new("b", azul.clone(), 2),
            Territory::new("c", azul, 3),
        ])
        .unwrap();

        let (x, y) = world.pair_mut(2, 0).unwrap();
        assert_eq!(x.name(), "c");
        assert_eq!(y.name(), "a");

        let (x, y) = world.pair_mut(0, 1).unwrap();
        assert_eq!(x.name(), "a");
        assert_eq!(y.name(), "b");

        assert!(world.pair_mut(1, 1).is_none());
        assert!(world.pair_mut(0, 3).is_none());
    }
}
