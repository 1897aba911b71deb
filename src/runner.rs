use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use crate::bots::HaliteBot;
use crate::hlt::{Command, EngineError, Game, GameMap};

/// Soft per-turn cutoff. Checked between ships, never interrupts one.
#[derive(Clone, Copy, Debug)]
pub struct Deadline {
    cutoff: Option<Instant>,
}

impl Deadline {
    pub fn after(budget: Duration) -> Self {
        Self::at(Instant::now() + budget)
    }

    pub fn at(cutoff: Instant) -> Self {
        Self {
            cutoff: Some(cutoff),
        }
    }

    pub fn unbounded() -> Self {
        Self { cutoff: None }
    }

    pub fn expired(&self) -> bool {
        self.cutoff.is_some_and(|cutoff| Instant::now() >= cutoff)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    pub commands: Vec<Command>,
    /// Owned ships that were undocked when examined.
    pub eligible: usize,
    /// Owned ships never examined because the deadline passed.
    pub skipped: usize,
}

/// Decides one turn: at most one command per owned, undocked ship, in engine order.
pub fn play_turn(bot: &mut dyn HaliteBot, map: &GameMap, deadline: &Deadline) -> TurnOutcome {
    let mut outcome = TurnOutcome::default();
    let ships = map.my_ships();

    for (index, ship) in ships.iter().enumerate() {
        if bot.honours_deadline() && deadline.expired() {
            outcome.skipped = ships.len() - index;
            tracing::warn!(
                skipped = outcome.skipped,
                "turn budget spent; remaining ships hold"
            );
            break;
        }

        if !ship.is_undocked() {
            continue;
        }
        outcome.eligible += 1;

        if let Some(command) = bot.command_for(map, ship) {
            outcome.commands.push(command);
        }
    }

    outcome
}

/// Plays until the engine closes the stream. Returns the number of turns played.
pub fn run_game<R: BufRead, W: Write>(
    bot: &mut dyn HaliteBot,
    game: &mut Game<R, W>,
    turn_budget: Duration,
) -> Result<u32> {
    loop {
        let map = match game.update_map() {
            Ok(map) => map,
            Err(EngineError::Closed) => {
                tracing::info!(turns = game.turn(), "engine closed the game");
                return Ok(game.turn());
            }
            Err(err) => {
                let turn = game.turn() + 1;
                return Err(err).context(format!("failed reading turn {turn}"));
            }
        };

        let deadline = Deadline::after(turn_budget);
        let outcome = play_turn(bot, &map, &deadline);
        tracing::debug!(
            turn = game.turn(),
            ships = map.my_ships().len(),
            eligible = outcome.eligible,
            commands = outcome.commands.len(),
            skipped = outcome.skipped,
            "turn decided"
        );

        game.send_command_queue(&outcome.commands)
            .with_context(|| format!("failed sending commands for turn {}", game.turn()))?;
    }
}
