use crate::hlt::entity::{Circle, Position};

/// Whether the segment `start -> end` passes within `radius + fudge` of `center`.
///
/// Circles that sit behind `start` (projection parameter below zero) never count.
pub fn intersect_segment_circle(
    start: Position,
    end: Position,
    center: Position,
    radius: f64,
    fudge: f64,
) -> bool {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let length_sq = dx * dx + dy * dy;

    if length_sq == 0.0 {
        return start.distance_to(&center) <= radius + fudge;
    }

    let projection = (center.x - start.x) * dx + (center.y - start.y) * dy;
    let t = (projection / length_sq).min(1.0);
    if t < 0.0 {
        return false;
    }

    let closest = Position::new(start.x + dx * t, start.y + dy * t);
    closest.distance_to(&center) <= radius + fudge
}

/// Point outside `target`, `min_distance` from its surface, on the side facing `from`.
pub fn closest_point_to(from: Position, target: &impl Circle, min_distance: f64) -> Position {
    let center = target.center();
    let angle = center.angle_to(&from);
    center.offset(angle, target.radius() + min_distance)
}
