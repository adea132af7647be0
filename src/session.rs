//! Game session state.
//!
//! A session exclusively owns the world, the player's mission, and the RNG
//! for one game. The console loop drives it through the `handle_*` methods,
//! which write their responses to any `Write` sink.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;
use thiserror::Error;

use crate::board::{Color, World, WorldError};
use crate::config::{ConfigError, GameConfig};
use crate::mission::{check_victory, describe_mission, draw_mission, Mission};
use crate::resolve::{validate_and_attack, Side};

/// Errors that stop a session from starting or running.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to create world: {0}")]
    World(#[from] WorldError),

    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// One-line machine-readable view of the game.
#[derive(Serialize)]
struct Snapshot<'a> {
    player: &'a Color,
    mission: &'a Mission,
    territories: Vec<crate::board::TerritoryEntry<'a>>,
    over: bool,
}

/// Holds the mutable state of one game between commands.
pub struct Session {
    world: World,
    mission: Mission,
    player: Color,
    rng: SmallRng,
    over: bool,
}

impl Session {
    /// Sets up a new game: builds the world and draws the player's mission.
    pub fn new(config: &GameConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let world = World::generate(config.territories, &config.colors, &mut rng)?;
        let mission = draw_mission(&config.player, &config.colors, config.territories, &mut rng);

        tracing::info!(
            territories = config.territories,
            player = %config.player,
            seed = ?config.seed,
            "session started"
        );
        Ok(Self::with_parts(world, mission, config.player.clone(), rng))
    }

    /// Assembles a session from an existing world and mission.
    pub fn with_parts(world: World, mission: Mission, player: Color, rng: SmallRng) -> Self {
        Session {
            world,
            mission,
            player,
            rng,
            over: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn mission(&self) -> &Mission {
        &self.mission
    }

    pub fn player(&self) -> &Color {
        &self.player
    }

    /// True once the player has completed the mission.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Writes the territory table.
    pub fn handle_map<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "--- CURRENT MAP ---")?;
        for entry in self.world.list() {
            writeln!(
                out,
                "{}) {:<15} | Owner: {:<8} | Troops: {}",
                entry.index, entry.name, entry.owner, entry.troops
            )?;
        }
        out.flush()
    }

    /// Writes the player's color and mission.
    pub fn handle_mission<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "--- YOUR MISSION ({}) ---", self.player)?;
        writeln!(out, "{}", describe_mission(&self.mission))?;
        out.flush()
    }

    /// Writes the action menu.
    pub fn handle_menu<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "--- MENU ---")?;
        writeln!(out, "1 - Attack")?;
        writeln!(out, "2 - Check mission")?;
        writeln!(out, "0 - Quit")?;
        out.flush()
    }

    /// Attacks `target` from `source` and reports the battle.
    ///
    /// A refused attack is reported and changes nothing. A battle that
    /// completes the mission ends the game.
    pub fn handle_attack<W: Write>(
        &mut self,
        source: usize,
        target: usize,
        out: &mut W,
    ) -> io::Result<()> {
        let report =
            match validate_and_attack(&mut self.world, source, target, &self.player, &mut self.rng) {
                Ok(report) => report,
                Err(e) => {
                    tracing::warn!(source, target, error = %e, "attack refused");
                    writeln!(out, "Attack refused: {}", e)?;
                    return out.flush();
                }
            };

        let outcome = report.outcome;
        writeln!(
            out,
            "Attack rolled: {} | Defense rolled: {}",
            outcome.attack_roll, outcome.defend_roll
        )?;
        match outcome.winner {
            Side::Attacker => {
                let captured = self.territory_name(target);
                writeln!(
                    out,
                    "Attack wins! {} conquered by {}; {} troop(s) moved in.",
                    captured, self.player, outcome.troops_transferred
                )?;
            }
            Side::Defender => {
                let origin = self.territory_name(source);
                writeln!(out, "Defense holds! {} loses 1 troop.", origin)?;
            }
        }

        if check_victory(&self.world, &self.mission, &self.player) {
            self.finish(out)?;
        }
        out.flush()
    }

    /// Reports whether the mission is complete; a completed mission ends the game.
    pub fn handle_check<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        if check_victory(&self.world, &self.mission, &self.player) {
            self.finish(out)?;
        } else {
            writeln!(out, "Mission not completed yet.")?;
        }
        out.flush()
    }

    /// Writes a one-line JSON snapshot prefixed with `state `.
    pub fn handle_state<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let snapshot = Snapshot {
            player: &self.player,
            mission: &self.mission,
            territories: self.world.list(),
            over: self.over,
        };
        write!(out, "state ")?;
        serde_json::to_writer(&mut *out, &snapshot)?;
        writeln!(out)?;
        out.flush()
    }

    fn finish<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        self.over = true;
        tracing::info!(player = %self.player, "mission completed");
        writeln!(out, "You completed your mission! Victory for {}!", self.player)
    }

    fn territory_name(&self, index: usize) -> &str {
        self.world.get(index).map_or("?", |t| t.name())
    }
}
