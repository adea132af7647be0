//! Warlord -- a single-player territory-conquest game for the console.
//!
//! Reads commands from stdin and writes the game transcript to stdout.
//! Diagnostics go to stderr through `tracing`.

use std::io::{self, BufRead, BufWriter, Lines, StdinLock, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use warlord::board::Color;
use warlord::config::{GameConfig, DEFAULT_COLORS, DEFAULT_TERRITORIES};
use warlord::protocol::{parse_command, parse_index, Command};
use warlord::session::{Session, SessionError};

#[derive(Debug, Parser)]
#[command(name = "warlord", version, about = "Conquer territories, complete your secret mission")]
struct Args {
    /// Number of territories on the map.
    #[arg(short, long, default_value_t = DEFAULT_TERRITORIES)]
    territories: usize,

    /// Comma-separated faction colors.
    #[arg(short, long, value_delimiter = ',')]
    colors: Vec<String>,

    /// The color you play; defaults to the first faction color.
    #[arg(short, long)]
    player: Option<String>,

    /// Random seed for a reproducible game.
    #[arg(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn into_config(self) -> GameConfig {
        let colors: Vec<Color> = if self.colors.is_empty() {
            DEFAULT_COLORS.iter().map(|&c| Color::from(c)).collect()
        } else {
            self.colors.into_iter().map(Color::from).collect()
        };
        let player = match self.player {
            Some(p) => Color::from(p),
            None => colors.first().cloned().unwrap_or_else(|| Color::from("")),
        };
        GameConfig {
            territories: self.territories,
            colors,
            player,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warlord=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Args::parse().into_config();
    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "game aborted");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the game loop until the player quits, input ends, or the mission is done.
fn run(config: &GameConfig) -> Result<(), SessionError> {
    let mut session = Session::new(config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    loop {
        writeln!(out, "====================================")?;
        session.handle_map(&mut out)?;
        session.handle_mission(&mut out)?;
        session.handle_menu(&mut out)?;
        write!(out, "Choice: ")?;
        out.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let cmd = match parse_command(&line) {
            Some(c) => c,
            None => {
                if !line.trim().is_empty() {
                    writeln!(out, "Invalid option!")?;
                }
                continue;
            }
        };

        match cmd {
            Command::Attack { source, target } => {
                let source = match source {
                    Some(i) => Some(i),
                    None => prompt_index(&mut lines, &mut out, "Source territory index: ")?,
                };
                let target = match target {
                    Some(i) => Some(i),
                    None => prompt_index(&mut lines, &mut out, "Target territory index: ")?,
                };
                match (source, target) {
                    (Some(s), Some(t)) => session.handle_attack(s, t, &mut out)?,
                    _ => writeln!(out, "Invalid indices!")?,
                }
            }
            Command::Check => session.handle_check(&mut out)?,
            Command::Map => session.handle_map(&mut out)?,
            Command::Mission => session.handle_mission(&mut out)?,
            Command::Menu => session.handle_menu(&mut out)?,
            Command::State => session.handle_state(&mut out)?,
            Command::Quit => {
                writeln!(out, "Leaving the game...")?;
                break;
            }
        }

        if session.is_over() {
            break;
        }
    }

    out.flush()?;
    Ok(())
}

/// Prompts for one territory index. Returns `None` on bad input or end of input.
fn prompt_index<W: Write>(
    lines: &mut Lines<StdinLock<'_>>,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<usize>> {
    write!(out, "{}", prompt)?;
    out.flush()?;
    match lines.next() {
        Some(line) => Ok(parse_index(&line?)),
        None => Ok(None),
    }
}
