//! Console command parser.
//!
//! Parses lines typed at the game prompt into structured `Command` variants
//! that the main loop can dispatch on. Menu numbers and word aliases are
//! both accepted.

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Attack from one territory into another. Missing indices are prompted for.
    Attack {
        source: Option<usize>,
        target: Option<usize>,
    },

    /// Check whether the mission is complete.
    Check,

    /// Show the territory table.
    Map,

    /// Show the player's mission.
    Mission,

    /// Show the action menu.
    Menu,

    /// Print a JSON snapshot of the game.
    State,

    /// Leave the game.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines, unrecognized commands, and malformed
/// attack indices; the latter two are logged.
pub fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let (&first, args) = tokens.split_first()?;

    match first.to_ascii_lowercase().as_str() {
        "0" | "quit" | "exit" => Some(Command::Quit),
        "1" | "attack" => parse_attack(args),
        "2" | "check" => Some(Command::Check),
        "map" => Some(Command::Map),
        "mission" => Some(Command::Mission),
        "menu" | "help" => Some(Command::Menu),
        "state" => Some(Command::State),
        other => {
            tracing::warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses `attack [<source> [<target>]]`.
fn parse_attack(args: &[&str]) -> Option<Command> {
    if args.len() > 2 {
        tracing::warn!("malformed attack: expected 'attack [<source> <target>]'");
        return None;
    }

    let mut indices = [None, None];
    for (slot, token) in indices.iter_mut().zip(args) {
        match parse_index(token) {
            Some(i) => *slot = Some(i),
            None => {
                tracing::warn!(token = *token, "invalid territory index");
                return None;
            }
        }
    }

    Some(Command::Attack {
        source: indices[0],
        target: indices[1],
    })
}

/// Parses a territory index typed at a prompt.
pub fn parse_index(token: &str) -> Option<usize> {
    token.trim().parse::<usize>().ok()
}
