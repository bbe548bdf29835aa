// arena_bot_engine/src/systems/physics/collision.rs

use crate::core::constants::{BOT_COLLISION_RADIUS, WORLD_EDGE_MARGIN};
use crate::core::types::{Vec2, Wall, WorldBounds};

/// True when `point` lies within `margin` of any playfield edge (or outside it).
pub fn is_near_world_edge(point: Vec2, bounds: &WorldBounds, margin: f32) -> bool {
    point.x < margin
        || point.y < margin
        || point.x > bounds.width - margin
        || point.y > bounds.height - margin
}

/// First wall whose center is closer than `wall.radius + body_radius` to `point`.
pub fn find_wall_collision(point: Vec2, walls: &[Wall], body_radius: f32) -> Option<&Wall> {
    walls
        .iter()
        .find(|wall| point.distance(wall.center()) < wall.radius + body_radius)
}

/// Whether a bot body centered at `point` may occupy it.
pub fn is_position_blocked(point: Vec2, bounds: &WorldBounds, walls: &[Wall]) -> bool {
    is_near_world_edge(point, bounds, WORLD_EDGE_MARGIN)
        || find_wall_collision(point, walls, BOT_COLLISION_RADIUS).is_some()
}
