use std::str::FromStr;

use crate::hlt::collision::intersect_segment_circle;
use crate::hlt::constants::OBSTACLE_FUDGE;
use crate::hlt::entity::{
    Circle, DockingStatus, EntityRef, Planet, PlanetId, PlayerId, Position, Ship, ShipId,
};
use crate::hlt::error::ParseError;
use crate::hlt::nearby::NearbyEntities;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub ships: Vec<Ship>,
}

/// Which entity kinds an obstacle query should look through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ignore {
    pub ships: bool,
    pub planets: bool,
}

/// One turn's immutable view of the game.
#[derive(Clone, Debug, PartialEq)]
pub struct GameMap {
    pub my_id: PlayerId,
    pub width: u32,
    pub height: u32,
    players: Vec<Player>,
    planets: Vec<Planet>,
}

impl GameMap {
    pub fn new(
        my_id: PlayerId,
        width: u32,
        height: u32,
        players: Vec<Player>,
        planets: Vec<Planet>,
    ) -> Self {
        Self {
            my_id,
            width,
            height,
            players,
            planets,
        }
    }

    /// Parses one engine map line.
    pub fn parse(my_id: PlayerId, width: u32, height: u32, line: &str) -> Result<Self, ParseError> {
        let mut tokens = Tokens::new(line);

        let num_players: usize = tokens.next("player count")?;
        let mut players = Vec::with_capacity(num_players);
        for _ in 0..num_players {
            players.push(parse_player(&mut tokens)?);
        }

        let num_planets: usize = tokens.next("planet count")?;
        let mut planets = Vec::with_capacity(num_planets);
        for _ in 0..num_planets {
            planets.push(parse_planet(&mut tokens)?);
        }

        let remaining = tokens.remaining();
        if remaining > 0 {
            return Err(ParseError::TrailingTokens { count: remaining });
        }

        Ok(Self::new(my_id, width, height, players, planets))
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Ships owned by this bot, in engine order.
    pub fn my_ships(&self) -> &[Ship] {
        self.player(self.my_id)
            .map(|player| player.ships.as_slice())
            .unwrap_or(&[])
    }

    pub fn all_ships(&self) -> impl Iterator<Item = &Ship> {
        self.players.iter().flat_map(|player| player.ships.iter())
    }

    pub fn all_planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.all_ships().find(|ship| ship.id == id)
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|planet| planet.id == id)
    }

    /// Ships docked at `planet` that are present in this snapshot, lowest id first.
    pub fn docked_ships(&self, planet: &Planet) -> Vec<&Ship> {
        let mut ships: Vec<&Ship> = planet
            .docked_ships
            .iter()
            .filter_map(|id| self.ship(*id))
            .collect();
        ships.sort_by_key(|ship| ship.id);
        ships
    }

    pub fn entities(&self) -> impl Iterator<Item = EntityRef<'_>> {
        self.all_ships()
            .map(EntityRef::Ship)
            .chain(self.planets.iter().map(EntityRef::Planet))
    }

    /// Every other ship and planet grouped by distance from `ship`.
    pub fn nearby_entities_by_distance(&self, ship: &Ship) -> NearbyEntities<'_> {
        NearbyEntities::around(ship, self.entities())
    }

    /// Entities whose footprint the straight path `ship -> target` would clip.
    pub fn obstacles_between(
        &self,
        ship: &Ship,
        target: Position,
        ignore: Ignore,
    ) -> Vec<EntityRef<'_>> {
        let fudge = ship.radius() + OBSTACLE_FUDGE;
        let planets = self
            .planets
            .iter()
            .filter(|_| !ignore.planets)
            .map(EntityRef::Planet);
        let ships = self
            .all_ships()
            .filter(|_| !ignore.ships)
            .filter(|other| other.id != ship.id)
            .map(EntityRef::Ship);

        planets
            .chain(ships)
            .filter(|entity| {
                intersect_segment_circle(
                    ship.position,
                    target,
                    entity.center(),
                    Circle::radius(entity),
                    fudge,
                )
            })
            .collect()
    }
}

struct Tokens<'a> {
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            inner: line.split_whitespace(),
        }
    }

    fn next<T: FromStr>(&mut self, field: &'static str) -> Result<T, ParseError> {
        let Some(token) = self.inner.next() else {
            return Err(ParseError::MissingToken { field });
        };
        token.parse::<T>().map_err(|_| ParseError::InvalidToken {
            field,
            token: token.to_string(),
        })
    }

    fn remaining(&mut self) -> usize {
        self.inner.by_ref().count()
    }
}

fn parse_player(tokens: &mut Tokens<'_>) -> Result<Player, ParseError> {
    let id: PlayerId = tokens.next("player id")?;
    let num_ships: usize = tokens.next("ship count")?;
    let mut ships = Vec::with_capacity(num_ships);
    for _ in 0..num_ships {
        ships.push(parse_ship(id, tokens)?);
    }
    Ok(Player { id, ships })
}

fn parse_ship(owner: PlayerId, tokens: &mut Tokens<'_>) -> Result<Ship, ParseError> {
    let id: ShipId = tokens.next("ship id")?;
    let x: f64 = tokens.next("ship x")?;
    let y: f64 = tokens.next("ship y")?;
    let health: i32 = tokens.next("ship health")?;
    let vx: f64 = tokens.next("ship velocity x")?;
    let vy: f64 = tokens.next("ship velocity y")?;
    let docking_status = DockingStatus::from_wire(tokens.next("docking status")?)?;
    let docked_planet: i64 = tokens.next("docked planet")?;
    let docking_progress: i32 = tokens.next("docking progress")?;
    let weapon_cooldown: i32 = tokens.next("weapon cooldown")?;

    let docked_planet = match docking_status {
        DockingStatus::Undocked => None,
        _ => PlanetId::try_from(docked_planet).ok(),
    };

    Ok(Ship {
        id,
        owner,
        position: Position::new(x, y),
        health,
        velocity: Position::new(vx, vy),
        docking_status,
        docked_planet,
        docking_progress,
        weapon_cooldown,
    })
}

fn parse_planet(tokens: &mut Tokens<'_>) -> Result<Planet, ParseError> {
    let id: PlanetId = tokens.next("planet id")?;
    let x: f64 = tokens.next("planet x")?;
    let y: f64 = tokens.next("planet y")?;
    let health: i32 = tokens.next("planet health")?;
    let radius: f64 = tokens.next("planet radius")?;
    let docking_spots: u32 = tokens.next("docking spots")?;
    let current_production: i32 = tokens.next("current production")?;
    let remaining_resources: i32 = tokens.next("remaining resources")?;
    let owned: u8 = tokens.next("owned flag")?;
    let owner: i64 = tokens.next("planet owner")?;
    let num_docked: usize = tokens.next("docked ship count")?;
    let mut docked_ships = Vec::with_capacity(num_docked);
    for _ in 0..num_docked {
        docked_ships.push(tokens.next::<ShipId>("docked ship id")?);
    }

    let owner = if owned == 1 {
        Some(
            PlayerId::try_from(owner).map_err(|_| ParseError::InvalidToken {
                field: "planet owner",
                token: owner.to_string(),
            })?,
        )
    } else {
        None
    };

    Ok(Planet {
        id,
        position: Position::new(x, y),
        health,
        radius,
        docking_spots,
        current_production,
        remaining_resources,
        owner,
        docked_ships,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // Two players; player 0 has one ship docked at planet 0, player 1 one undocked ship.
    const LINE: &str = "2 \
        0 1 3 12.5 20.0 255 0.0 0.0 2 0 5 0 \
        1 1 8 40.0 40.0 200 1.5 -1.5 0 0 0 1 \
        2 \
        0 12.0 15.0 2000 4.5 3 0 1200 1 0 1 3 \
        1 60.0 60.0 1500 6.0 2 0 900 0 0 0";

    #[test]
    fn parses_players_ships_and_planets() {
        let map = GameMap::parse(0, 240, 160, LINE).expect("map parses");

        assert_eq!(map.players().len(), 2);
        assert_eq!(map.all_planets().len(), 2);
        assert_eq!(map.my_ships().len(), 1);

        let docked = map.ship(3).expect("ship 3");
        assert_eq!(docked.owner, 0);
        assert_eq!(docked.docking_status, DockingStatus::Docked);
        assert_eq!(docked.docked_planet, Some(0));
        assert_eq!(docked.docking_progress, 5);

        let enemy = map.ship(8).expect("ship 8");
        assert_eq!(enemy.owner, 1);
        assert_eq!(enemy.health, 200);
        assert_eq!(enemy.velocity, Position::new(1.5, -1.5));
        assert_eq!(enemy.docked_planet, None);
        assert_eq!(enemy.weapon_cooldown, 1);

        let home = map.planet(0).expect("planet 0");
        assert_eq!(home.owner, Some(0));
        assert_eq!(home.docked_ships, vec![3]);
        assert_eq!(home.docking_spots, 3);
        assert!(!home.is_full());

        let free = map.planet(1).expect("planet 1");
        assert_eq!(free.owner, None);
        assert!(free.docked_ships.is_empty());
    }

    #[test]
    fn rejects_trailing_tokens() {
        let line = format!("{LINE} 99");
        assert_eq!(
            GameMap::parse(0, 240, 160, &line),
            Err(ParseError::TrailingTokens { count: 1 })
        );
    }

    #[test]
    fn rejects_truncated_lines() {
        assert_eq!(
            GameMap::parse(0, 240, 160, "1 0 1 3 12.5"),
            Err(ParseError::MissingToken { field: "ship y" })
        );
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert_eq!(
            GameMap::parse(0, 240, 160, "x"),
            Err(ParseError::InvalidToken {
                field: "player count",
                token: "x".to_string(),
            })
        );
    }

    #[test]
    fn obstacles_skip_the_moving_ship_and_respect_ignore() {
        let map = GameMap::parse(1, 240, 160, LINE).expect("map parses");
        let ship = map.ship(8).expect("ship 8").clone();

        // Straight through planet 1 at (60, 60).
        let target = Position::new(70.0, 70.0);
        let hits: Vec<_> = map
            .obstacles_between(&ship, target, Ignore::default())
            .iter()
            .map(|entity| entity.id())
            .collect();
        assert_eq!(hits, vec![crate::hlt::entity::EntityId::Planet(1)]);

        let ignored = map.obstacles_between(
            &ship,
            target,
            Ignore {
                ships: false,
                planets: true,
            },
        );
        assert!(ignored.is_empty());
    }

    #[test]
    fn docked_ships_resolve_against_the_snapshot() {
        let map = GameMap::parse(0, 240, 160, LINE).expect("map parses");
        let home = map.planet(0).expect("planet 0");
        let docked: Vec<ShipId> = map.docked_ships(home).iter().map(|ship| ship.id).collect();
        assert_eq!(docked, vec![3]);
    }
}
