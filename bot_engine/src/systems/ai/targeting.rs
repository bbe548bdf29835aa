// arena_bot_engine/src/systems/ai/targeting.rs

use crate::core::types::{PlayerSnapshot, Vec2};

/// Nearest living entity other than `self_id` strictly inside `vision_range`.
///
/// Ties keep the entity that appears first in `players`, so repeated calls
/// over the same snapshot always agree.
pub fn select_target<'a>(
    self_id: &str,
    position: Vec2,
    vision_range: f32,
    players: &'a [PlayerSnapshot],
) -> Option<(&'a PlayerSnapshot, f32)> {
    let mut closest: Option<(&PlayerSnapshot, f32)> = None;

    for player in players {
        if player.id.as_str() == self_id || !player.is_alive() {
            continue;
        }
        let dist = position.distance(player.position);
        if dist >= vision_range {
            continue;
        }
        match closest {
            Some((_, best)) if dist >= best => {}
            _ => closest = Some((player, dist)),
        }
    }

    closest
}
