use std::io;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use halite_clear::bots::{bot_manifest_entries, create_bot, describe_bots};
use halite_clear::config::{Cli, Settings};
use halite_clear::hlt::Handshake;
use halite_clear::logging;
use halite_clear::runner::run_game;

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_bots {
        for (id, description) in describe_bots() {
            println!("{id:16} {description}");
        }
        return Ok(());
    }
    if cli.manifest {
        println!("{}", serde_json::to_string_pretty(&bot_manifest_entries())?);
        return Ok(());
    }

    let settings = Settings::resolve(&cli)?;
    let mut bot = create_bot(&settings.bot)
        .ok_or_else(|| anyhow!("unknown bot '{}'", settings.bot))?;
    let name = settings
        .name
        .clone()
        .unwrap_or_else(|| bot.engine_name().to_string());

    let handshake = Handshake::begin(io::stdin().lock(), io::stdout().lock())
        .context("engine did not send a player id")?;
    let log_path = logging::init(&settings.log_dir, handshake.my_id(), &name)?;
    let mut game = match handshake.finish(&name) {
        Ok(game) => game,
        Err(err) => {
            tracing::error!(error = %err, "engine handshake failed");
            return Err(err).context("engine handshake failed");
        }
    };
    let budget_ms = settings.turn_budget.as_millis() as u64;
    tracing::info!(
        bot = bot.id(),
        player = game.my_id(),
        budget_ms,
        log = %log_path.display(),
        "Starting my {name} game!"
    );

    let turns = run_game(bot.as_mut(), &mut game, settings.turn_budget)?;
    tracing::info!(turns, "game finished");
    Ok(())
}
