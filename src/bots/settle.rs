//! clear-settle: greedy planet settler.

use crate::bots::policy::settle;
use crate::bots::HaliteBot;
use crate::hlt::{Command, GameMap, Ship};

pub struct SettleBot;

impl SettleBot {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SettleBot {
    fn default() -> Self {
        Self::new()
    }
}

impl HaliteBot for SettleBot {
    fn id(&self) -> &'static str {
        "clear-settle"
    }

    fn engine_name(&self) -> &'static str {
        "ClearSettleBot"
    }

    fn description(&self) -> &'static str {
        "Docks at, attacks, or flies toward the nearest planet worth taking."
    }

    fn command_for(&mut self, map: &GameMap, ship: &Ship) -> Option<Command> {
        settle(map, ship, &map.nearby_entities_by_distance(ship))
    }
}
