//! Greedy nearest-entity decisions shared by both bots.
//!
//! Every function walks a [`NearbyEntities`] index from the closest bucket
//! outward and returns at most one command for the ship.

use crate::hlt::constants::APPROACH_DISTANCE;
use crate::hlt::{Command, EntityRef, GameMap, NavigateOptions, NearbyEntities, Planet, Ship};

/// Dock at, attack, or fly toward the nearest planet worth taking.
pub fn settle(map: &GameMap, ship: &Ship, nearby: &NearbyEntities<'_>) -> Option<Command> {
    for bucket in nearby.buckets() {
        let Some(planet) = bucket.first_of::<Planet>(|_| true) else {
            continue;
        };

        // Our own planet with every spot taken has nothing to offer.
        if planet.is_owned_by(map.my_id) && planet.is_full() {
            continue;
        }

        if ship.can_dock(planet) {
            return match planet.owner {
                Some(owner) if owner != map.my_id => attack_docked(map, ship, planet),
                _ => Some(ship.dock(planet)),
            };
        }

        let approach = ship.closest_point_to(planet, APPROACH_DISTANCE);
        return ship.navigate(approach, map, NavigateOptions::default());
    }

    None
}

/// Fly at a ship docked on an enemy planet.
///
/// The target is the lowest-id docked ship present in the snapshot. A planet
/// with no such ship yields no command.
pub fn attack_docked(map: &GameMap, ship: &Ship, planet: &Planet) -> Option<Command> {
    let Some(target) = map.docked_ships(planet).into_iter().next() else {
        tracing::warn!(
            ship = ship.id,
            planet = planet.id,
            "enemy planet reports no docked ships; holding position"
        );
        return None;
    };

    tracing::debug!(
        ship = ship.id,
        planet = planet.id,
        target = target.id,
        "attacking docked ship"
    );
    let approach = ship.closest_point_to(target, APPROACH_DISTANCE);
    ship.navigate(approach, map, NavigateOptions::default())
}

/// Whether the closest entity we don't own is a ship.
///
/// Unowned planets count as not ours. An index with nothing foreign in it
/// classifies as `false`.
pub fn check_to_hunt(map: &GameMap, nearby: &NearbyEntities<'_>) -> bool {
    let foreign = nearby.nearest_matching(|e| e.owner() != Some(map.my_id));
    let Some((distance, entity)) = foreign else {
        return false;
    };

    let hunt = matches!(entity, EntityRef::Ship(_));
    tracing::info!(
        entity = %entity.id(),
        owner = ?entity.owner(),
        me = map.my_id,
        distance,
        hunt,
        "check to hunt"
    );
    hunt
}

/// Chase the nearest enemy ship with the wider hunting search.
pub fn hunt(map: &GameMap, ship: &Ship, nearby: &NearbyEntities<'_>) -> Option<Command> {
    let (_, enemy) = nearby.nearest::<Ship>(|s| s.owner != map.my_id)?;
    let approach = ship.closest_point_to(enemy, APPROACH_DISTANCE);
    ship.navigate(approach, map, NavigateOptions::hunting())
}
