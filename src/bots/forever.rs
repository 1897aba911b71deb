//! clear-forever: the settler, plus ships that turn into permanent hunters
//! once an enemy ship is the closest thing they don't own.

use std::collections::BTreeSet;

use crate::bots::policy::{check_to_hunt, hunt, settle};
use crate::bots::HaliteBot;
use crate::hlt::{Command, GameMap, Ship, ShipId};

/// Ships that left settle mode for good. Insert-only for the whole game.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HuntSet {
    ships: BTreeSet<ShipId>,
}

impl HuntSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time `ship` is enlisted.
    pub fn enlist(&mut self, ship: ShipId) -> bool {
        self.ships.insert(ship)
    }

    pub fn contains(&self, ship: ShipId) -> bool {
        self.ships.contains(&ship)
    }

    pub fn len(&self) -> usize {
        self.ships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ships.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ShipId> + '_ {
        self.ships.iter().copied()
    }
}

pub struct ForeverBot {
    hunters: HuntSet,
}

impl ForeverBot {
    pub fn new() -> Self {
        Self {
            hunters: HuntSet::new(),
        }
    }

    pub fn hunters(&self) -> &HuntSet {
        &self.hunters
    }
}

impl Default for ForeverBot {
    fn default() -> Self {
        Self::new()
    }
}

impl HaliteBot for ForeverBot {
    fn id(&self) -> &'static str {
        "clear-forever"
    }

    fn engine_name(&self) -> &'static str {
        "ClearForever"
    }

    fn description(&self) -> &'static str {
        "Settler whose ships permanently hunt once an enemy ship is their nearest foreign entity."
    }

    fn honours_deadline(&self) -> bool {
        true
    }

    fn command_for(&mut self, map: &GameMap, ship: &Ship) -> Option<Command> {
        let nearby = map.nearby_entities_by_distance(ship);

        if self.hunters.contains(ship.id) {
            return hunt(map, ship, &nearby);
        }

        if check_to_hunt(map, &nearby) {
            if self.hunters.enlist(ship.id) {
                tracing::info!(
                    ship = ship.id,
                    hunters = self.hunters.len(),
                    "ship entered hunt mode"
                );
            }
            return hunt(map, ship, &nearby);
        }

        settle(map, ship, &nearby)
    }
}
