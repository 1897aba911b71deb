//! Halite-II game constants, as published with the official starter kits.

// Max number of units of distance a ship can travel in a turn
pub const MAX_SPEED: i32 = 7;
pub const SHIP_RADIUS: f64 = 0.5;
// Distance from the edge of the planet at which ships can try to dock
pub const DOCK_RADIUS: f64 = 4.0;

// Navigation defaults
pub const DEFAULT_MAX_CORRECTIONS: u32 = 90;
pub const DEFAULT_ANGULAR_STEP: f64 = 1.0;
pub const HUNT_ANGULAR_STEP: f64 = 2.0;
// Extra clearance added to the ship radius when looking for obstacles
pub const OBSTACLE_FUDGE: f64 = 0.1;
// Gap kept between an approach point and the target's surface
pub const APPROACH_DISTANCE: f64 = 3.0;
