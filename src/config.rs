use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::Parser;

use crate::bots::{bot_ids, create_bot};

pub const DEFAULT_BOT: &str = "clear-forever";
// The engine kills a bot that takes longer than two seconds on a turn.
pub const DEFAULT_TURN_BUDGET_MS: u64 = 1_800;
pub const DEFAULT_LOG_DIR: &str = ".";

#[derive(Parser, Debug, Default)]
#[command(name = "halite-clear")]
#[command(about = "Greedy settle/hunt bots for the Halite-II engine")]
#[command(long_about = "Greedy settle/hunt bots for the Halite-II engine. \
    Speaks the engine protocol on stdin/stdout and logs to <log-dir>/<id>_<name>.log.")]
pub struct Cli {
    /// Bot to play (env HALITE_BOT)
    #[arg(long)]
    pub bot: Option<String>,
    /// Name announced to the engine; defaults to the bot's own name
    #[arg(long)]
    pub name: Option<String>,
    /// Soft per-turn time budget in milliseconds (env HALITE_TURN_BUDGET_MS)
    #[arg(long)]
    pub turn_budget_ms: Option<u64>,
    /// Directory for the per-game log file (env HALITE_LOG_DIR)
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
    /// List available bots and exit
    #[arg(long)]
    pub list_bots: bool,
    /// Print the bot manifest as JSON and exit
    #[arg(long)]
    pub manifest: bool,
}

/// Fully resolved settings for one game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub bot: String,
    pub name: Option<String>,
    pub turn_budget: Duration,
    pub log_dir: PathBuf,
}

impl Settings {
    /// Flags win over environment variables, which win over defaults.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let bot = cli
            .bot
            .clone()
            .or_else(|| read_env_string("HALITE_BOT"))
            .unwrap_or_else(|| DEFAULT_BOT.to_string());
        if create_bot(&bot).is_none() {
            let available = bot_ids().join(", ");
            return Err(anyhow!("unknown bot '{bot}'. available: {available}"));
        }

        let budget_ms = cli
            .turn_budget_ms
            .unwrap_or_else(|| read_env_u64("HALITE_TURN_BUDGET_MS", DEFAULT_TURN_BUDGET_MS));
        if budget_ms == 0 {
            return Err(anyhow!("turn budget must be > 0 ms"));
        }

        let log_dir = cli
            .log_dir
            .clone()
            .or_else(|| read_env_string("HALITE_LOG_DIR").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR));

        let name = cli
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Ok(Self {
            bot,
            name,
            turn_budget: Duration::from_millis(budget_ms),
            log_dir,
        })
    }
}

pub fn read_env_string(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

pub fn read_env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flags_resolve_without_env() {
        let cli = Cli {
            bot: Some("clear-settle".to_string()),
            name: Some("  Tester ".to_string()),
            turn_budget_ms: Some(900),
            log_dir: Some(PathBuf::from("logs")),
            ..Cli::default()
        };
        let settings = Settings::resolve(&cli).expect("valid settings");
        assert_eq!(
            settings,
            Settings {
                bot: "clear-settle".to_string(),
                name: Some("Tester".to_string()),
                turn_budget: Duration::from_millis(900),
                log_dir: PathBuf::from("logs"),
            }
        );
    }

    #[test]
    fn unknown_bot_is_rejected() {
        let cli = Cli {
            bot: Some("clear-nothing".to_string()),
            ..Cli::default()
        };
        let err = Settings::resolve(&cli).expect_err("unknown bot");
        assert!(err.to_string().contains("clear-forever"));
    }

    #[test]
    fn zero_budget_is_rejected() {
        let cli = Cli {
            bot: Some("clear-forever".to_string()),
            turn_budget_ms: Some(0),
            ..Cli::default()
        };
        assert!(Settings::resolve(&cli).is_err());
    }

    #[test]
    fn cli_parses_long_flags() {
        let cli = Cli::try_parse_from([
            "halite-clear",
            "--bot",
            "clear-settle",
            "--turn-budget-ms",
            "1500",
            "--list-bots",
        ])
        .expect("parses");
        assert_eq!(cli.bot.as_deref(), Some("clear-settle"));
        assert_eq!(cli.turn_budget_ms, Some(1500));
        assert!(cli.list_bots);
        assert!(!cli.manifest);
    }
}
