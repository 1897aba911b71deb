pub mod forever;
pub mod policy;
pub mod settle;

use serde::Serialize;

use crate::hlt::{Command, GameMap, Ship};

/// A per-game decision maker. One instance lives for the whole match, so any
/// state it keeps carries across turns.
pub trait HaliteBot {
    fn id(&self) -> &'static str;
    /// Name announced to the engine during the handshake.
    fn engine_name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    /// Whether the turn loop should stop handing out ships once the turn budget is spent.
    fn honours_deadline(&self) -> bool {
        false
    }
    /// Zero or one command for an undocked ship this turn.
    fn command_for(&mut self, map: &GameMap, ship: &Ship) -> Option<Command>;
}

#[derive(Clone, Debug, Serialize)]
pub struct BotManifestEntry {
    pub id: String,
    pub engine_name: String,
    pub description: String,
    pub honours_deadline: bool,
}

pub fn bot_ids() -> Vec<&'static str> {
    vec!["clear-settle", "clear-forever"]
}

pub fn create_bot(id: &str) -> Option<Box<dyn HaliteBot>> {
    match id {
        "clear-settle" => Some(Box::new(settle::SettleBot::new())),
        "clear-forever" => Some(Box::new(forever::ForeverBot::new())),
        _ => None,
    }
}

pub fn describe_bots() -> Vec<(&'static str, &'static str)> {
    bot_ids()
        .into_iter()
        .filter_map(create_bot)
        .map(|bot| (bot.id(), bot.description()))
        .collect()
}

pub fn bot_manifest_entries() -> Vec<BotManifestEntry> {
    bot_ids()
        .into_iter()
        .filter_map(create_bot)
        .map(|bot| BotManifestEntry {
            id: bot.id().to_string(),
            engine_name: bot.engine_name().to_string(),
            description: bot.description().to_string(),
            honours_deadline: bot.honours_deadline(),
        })
        .collect()
}
