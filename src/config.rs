//! Game setup options.

use thiserror::Error;

use crate::board::Color;

/// Territory count used when none is given.
pub const DEFAULT_TERRITORIES: usize = 5;

/// Faction colors used when none are given.
pub const DEFAULT_COLORS: [&str; 4] = ["Azul", "Vermelho", "Verde", "Amarelo"];

/// Problems with a game configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("territory count must be at least 1")]
    NoTerritories,

    #[error("at least one faction color is required")]
    NoColors,

    #[error("player color '{0}' is not one of the faction colors")]
    UnknownPlayerColor(Color),

    #[error("faction color '{0}' is listed more than once")]
    DuplicateColor(Color),
}

/// Everything needed to set up a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub territories: usize,
    pub colors: Vec<Color>,
    pub player: Color,
    /// RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        let colors: Vec<Color> = DEFAULT_COLORS.iter().map(|&c| Color::from(c)).collect();
        Self {
            territories: DEFAULT_TERRITORIES,
            player: colors[0].clone(),
            colors,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Checks that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.territories == 0 {
            return Err(ConfigError::NoTerritories);
        }
        if self.colors.is_empty() {
            return Err(ConfigError::NoColors);
        }
        for (i, color) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(color) {
                return Err(ConfigError::DuplicateColor(color.clone()));
            }
        }
        if !self.colors.contains(&self.player) {
            return Err(ConfigError::UnknownPlayerColor(self.player.clone()));
        }
        Ok(())
    }
}
