use crate::hlt::collision::closest_point_to;
use crate::hlt::command::Command;
use crate::hlt::constants::{
    DEFAULT_ANGULAR_STEP, DEFAULT_MAX_CORRECTIONS, DOCK_RADIUS, HUNT_ANGULAR_STEP, MAX_SPEED,
    SHIP_RADIUS,
};
use crate::hlt::entity::{Circle, Planet, Position, Ship};
use crate::hlt::map::{GameMap, Ignore};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigateOptions {
    pub speed: i32,
    pub avoid_obstacles: bool,
    pub max_corrections: u32,
    /// Degrees the target is rotated around the ship per correction.
    pub angular_step: f64,
    pub ignore: Ignore,
}

impl Default for NavigateOptions {
    fn default() -> Self {
        Self {
            speed: MAX_SPEED,
            avoid_obstacles: true,
            max_corrections: DEFAULT_MAX_CORRECTIONS,
            angular_step: DEFAULT_ANGULAR_STEP,
            ignore: Ignore::default(),
        }
    }
}

impl NavigateOptions {
    /// Wider search for chasing ships, which move and are harder to path around.
    pub fn hunting() -> Self {
        Self {
            angular_step: HUNT_ANGULAR_STEP,
            ..Self::default()
        }
    }
}

impl Ship {
    pub fn can_dock(&self, planet: &Planet) -> bool {
        self.position.distance_to(&planet.position) <= planet.radius + DOCK_RADIUS + SHIP_RADIUS
    }

    pub fn dock(&self, planet: &Planet) -> Command {
        Command::Dock {
            ship: self.id,
            planet: planet.id,
        }
    }

    pub fn undock(&self) -> Command {
        Command::Undock { ship: self.id }
    }

    pub fn thrust(&self, magnitude: i32, angle: i32) -> Command {
        Command::Thrust {
            ship: self.id,
            magnitude,
            angle,
        }
    }

    pub fn closest_point_to(&self, target: &impl Circle, min_distance: f64) -> Position {
        closest_point_to(self.position, target, min_distance)
    }

    /// Thrust toward `target`, rotating the heading by `angular_step` while the
    /// straight path is blocked. `None` once `max_corrections` run out.
    pub fn navigate(
        &self,
        target: Position,
        map: &GameMap,
        options: NavigateOptions,
    ) -> Option<Command> {
        let distance = self.position.distance_to(&target);
        let mut angle = self.position.angle_to(&target);
        let mut destination = target;
        let mut corrections_left = options.max_corrections;

        loop {
            if corrections_left == 0 {
                return None;
            }
            if !options.avoid_obstacles {
                break;
            }
            let obstacles = map.obstacles_between(self, destination, options.ignore);
            if obstacles.is_empty() {
                break;
            }
            angle += options.angular_step;
            destination = self.position.offset(angle, distance);
            corrections_left -= 1;
        }

        let magnitude = distance.min(f64::from(options.speed)) as i32;
        let heading = (angle.rem_euclid(360.0).round() as i32) % 360;
        Some(self.thrust(magnitude, heading))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hlt::entity::DockingStatus;
    use crate::hlt::map::Player;

    fn ship(id: u32, x: f64, y: f64) -> Ship {
        Ship {
            id,
            owner: 0,
            position: Position::new(x, y),
            health: 255,
            velocity: Position::new(0.0, 0.0),
            docking_status: DockingStatus::Undocked,
            docked_planet: None,
            docking_progress: 0,
            weapon_cooldown: 0,
        }
    }

    fn planet(id: u32, x: f64, y: f64, radius: f64) -> Planet {
        Planet {
            id,
            position: Position::new(x, y),
            health: 1000,
            radius,
            docking_spots: 2,
            current_production: 0,
            remaining_resources: 1000,
            owner: None,
            docked_ships: Vec::new(),
        }
    }

    fn map_with(ships: Vec<Ship>, planets: Vec<Planet>) -> GameMap {
        GameMap::new(0, 100, 100, vec![Player { id: 0, ships }], planets)
    }

    #[test]
    fn clear_path_thrusts_straight_at_capped_speed() {
        let me = ship(0, 0.0, 0.0);
        let map = map_with(vec![me.clone()], Vec::new());
        let target = Position::new(0.0, 20.0);
        let command = me.navigate(target, &map, NavigateOptions::default());
        assert_eq!(command, Some(me.thrust(7, 90)));
    }

    #[test]
    fn short_hops_truncate_the_remaining_distance() {
        let me = ship(0, 0.0, 0.0);
        let map = map_with(vec![me.clone()], Vec::new());
        let target = Position::new(-4.8, 0.0);
        let command = me.navigate(target, &map, NavigateOptions::default());
        assert_eq!(command, Some(me.thrust(4, 180)));
    }

    #[test]
    fn blocked_path_rotates_until_clear() {
        let me = ship(0, 0.0, 0.0);
        let map = map_with(vec![me.clone()], vec![planet(0, 10.0, 0.0, 3.0)]);
        let target = Position::new(20.0, 0.0);
        let command = me.navigate(target, &map, NavigateOptions::default());
        // The planet stops clipping the path once 10 * sin(angle) > 3.6.
        assert_eq!(command, Some(me.thrust(7, 22)));
    }

    #[test]
    fn exhausted_corrections_yield_no_command() {
        let me = ship(0, 0.0, 0.0);
        let map = map_with(vec![me.clone()], vec![planet(0, 10.0, 0.0, 3.0)]);
        let options = NavigateOptions {
            max_corrections: 10,
            ..NavigateOptions::default()
        };
        let target = Position::new(20.0, 0.0);
        assert_eq!(me.navigate(target, &map, options), None);
    }

    #[test]
    fn ignoring_obstacles_goes_straight_through() {
        let me = ship(0, 0.0, 0.0);
        let map = map_with(vec![me.clone()], vec![planet(0, 10.0, 0.0, 3.0)]);
        let options = NavigateOptions {
            avoid_obstacles: false,
            ..NavigateOptions::default()
        };
        let target = Position::new(20.0, 0.0);
        assert_eq!(me.navigate(target, &map, options), Some(me.thrust(7, 0)));
    }

    #[test]
    fn hunting_searches_in_two_degree_steps() {
        let options = NavigateOptions::hunting();
        assert_eq!(options.max_corrections, 90);
        assert_eq!(options.angular_step, 2.0);
        assert_eq!(options.speed, MAX_SPEED);
        assert!(options.avoid_obstacles);
        assert_eq!(NavigateOptions::default().angular_step, 1.0);
    }

    #[test]
    fn hunting_rotation_lands_on_even_headings() {
        let me = ship(0, 0.0, 0.0);
        let map = map_with(vec![me.clone()], vec![planet(0, 5.0, 0.0, 3.0)]);
        let target = Position::new(16.5, 0.0);
        // Clear once 5 * sin(angle) > 3.6, i.e. past 46 degrees.
        let settling = me.navigate(target, &map, NavigateOptions::default());
        let hunting = me.navigate(target, &map, NavigateOptions::hunting());
        assert_eq!(settling, Some(me.thrust(7, 47)));
        assert_eq!(hunting, Some(me.thrust(7, 48)));
    }

    #[test]
    fn docking_range_includes_planet_and_ship_radii() {
        let me = ship(0, 0.0, 0.0);
        assert!(me.can_dock(&planet(0, 7.5, 0.0, 3.0)));
        assert!(!me.can_dock(&planet(0, 7.6, 0.0, 3.0)));
    }

    #[test]
    fn approach_point_stops_short_of_the_surface() {
        let me = ship(0, 0.0, 0.0);
        let point = me.closest_point_to(&planet(0, 20.0, 0.0, 4.0), 3.0);
        assert!((point.x - 13.0).abs() < 1e-9);
        assert!(point.y.abs() < 1e-9);
    }
}
