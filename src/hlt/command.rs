use std::fmt;

use crate::hlt::entity::{PlanetId, ShipId};

/// A single engine directive. `Display` produces the wire encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Dock { ship: ShipId, planet: PlanetId },
    Undock { ship: ShipId },
    Thrust {
        ship: ShipId,
        magnitude: i32,
        angle: i32,
    },
}

impl Command {
    pub fn ship(&self) -> ShipId {
        match *self {
            Self::Dock { ship, .. } | Self::Undock { ship } | Self::Thrust { ship, .. } => ship,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dock { ship, planet } => write!(f, "d {ship} {planet}"),
            Self::Undock { ship } => write!(f, "u {ship}"),
            Self::Thrust {
                ship,
                magnitude,
                angle,
            } => write!(f, "t {ship} {magnitude} {angle}"),
        }
    }
}

/// Encodes a turn's commands as one engine line (without the trailing newline).
pub fn encode_queue(commands: &[Command]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
