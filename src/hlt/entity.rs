use std::fmt;

use crate::hlt::constants::SHIP_RADIUS;
use crate::hlt::error::ParseError;

pub type PlayerId = u32;
pub type ShipId = u32;
pub type PlanetId = u32;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Heading from `self` to `other` in degrees, normalized to `[0, 360)`.
    pub fn angle_to(&self, other: &Position) -> f64 {
        (other.y - self.y)
            .atan2(other.x - self.x)
            .to_degrees()
            .rem_euclid(360.0)
    }

    /// Point `distance` away from `self` along `angle_deg`.
    pub fn offset(&self, angle_deg: f64, distance: f64) -> Position {
        let radians = angle_deg.to_radians();
        Position::new(
            self.x + radians.cos() * distance,
            self.y + radians.sin() * distance,
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DockingStatus {
    Undocked,
    Docking,
    Docked,
    Undocking,
}

impl DockingStatus {
    pub fn from_wire(code: i64) -> Result<Self, ParseError> {
        match code {
            0 => Ok(Self::Undocked),
            1 => Ok(Self::Docking),
            2 => Ok(Self::Docked),
            3 => Ok(Self::Undocking),
            found => Err(ParseError::UnknownDockingStatus { found }),
        }
    }
}

impl fmt::Display for DockingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undocked => write!(f, "undocked"),
            Self::Docking => write!(f, "docking"),
            Self::Docked => write!(f, "docked"),
            Self::Undocking => write!(f, "undocking"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub id: ShipId,
    pub owner: PlayerId,
    pub position: Position,
    pub health: i32,
    pub velocity: Position,
    pub docking_status: DockingStatus,
    pub docked_planet: Option<PlanetId>,
    pub docking_progress: i32,
    pub weapon_cooldown: i32,
}

impl Ship {
    pub fn radius(&self) -> f64 {
        SHIP_RADIUS
    }

    pub fn is_undocked(&self) -> bool {
        self.docking_status == DockingStatus::Undocked
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub position: Position,
    pub health: i32,
    pub radius: f64,
    pub docking_spots: u32,
    pub current_production: i32,
    pub remaining_resources: i32,
    pub owner: Option<PlayerId>,
    pub docked_ships: Vec<ShipId>,
}

impl Planet {
    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    pub fn is_full(&self) -> bool {
        self.docked_ships.len() >= self.docking_spots as usize
    }
}

/// Identity of any entity on the map. Orders ships before planets, then by id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityId {
    Ship(ShipId),
    Planet(PlanetId),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ship(id) => write!(f, "ship#{id}"),
            Self::Planet(id) => write!(f, "planet#{id}"),
        }
    }
}

/// Borrowed view over either kind of map entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EntityRef<'a> {
    Ship(&'a Ship),
    Planet(&'a Planet),
}

impl<'a> EntityRef<'a> {
    pub fn id(&self) -> EntityId {
        match self {
            Self::Ship(ship) => EntityId::Ship(ship.id),
            Self::Planet(planet) => EntityId::Planet(planet.id),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Self::Ship(ship) => ship.position,
            Self::Planet(planet) => planet.position,
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Self::Ship(ship) => ship.radius(),
            Self::Planet(planet) => planet.radius,
        }
    }

    pub fn owner(&self) -> Option<PlayerId> {
        match self {
            Self::Ship(ship) => Some(ship.owner),
            Self::Planet(planet) => planet.owner,
        }
    }
}

/// Narrows an [`EntityRef`] to one concrete entity type.
pub trait Kind: Sized {
    fn narrow<'a>(entity: EntityRef<'a>) -> Option<&'a Self>;
}

impl Kind for Ship {
    fn narrow<'a>(entity: EntityRef<'a>) -> Option<&'a Self> {
        match entity {
            EntityRef::Ship(ship) => Some(ship),
            EntityRef::Planet(_) => None,
        }
    }
}

impl Kind for Planet {
    fn narrow<'a>(entity: EntityRef<'a>) -> Option<&'a Self> {
        match entity {
            EntityRef::Planet(planet) => Some(planet),
            EntityRef::Ship(_) => None,
        }
    }
}

/// Anything with a circular footprint the navigation code can aim at or avoid.
pub trait Circle {
    fn center(&self) -> Position;
    fn radius(&self) -> f64;
}

impl Circle for Ship {
    fn center(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f64 {
        SHIP_RADIUS
    }
}

impl Circle for Planet {
    fn center(&self) -> Position {
        self.position
    }

    fn radius(&self) -> f64 {
        self.radius
    }
}

impl Circle for EntityRef<'_> {
    fn center(&self) -> Position {
        self.position()
    }

    fn radius(&self) -> f64 {
        EntityRef::radius(self)
    }
}
