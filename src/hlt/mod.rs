//! Halite-II starter kit: world model, geometry, navigation and the engine
//! line protocol.

pub mod collision;
pub mod command;
pub mod constants;
pub mod entity;
pub mod error;
pub mod game;
pub mod map;
pub mod navigation;
pub mod nearby;

pub use command::Command;
pub use entity::{
    DockingStatus, EntityId, EntityRef, Planet, PlanetId, PlayerId, Position, Ship, ShipId,
};
pub use error::{EngineError, ParseError};
pub use game::{Game, Handshake};
pub use map::{GameMap, Ignore, Player};
pub use navigation::NavigateOptions;
pub use nearby::{DistanceBucket, NearbyEntities};
