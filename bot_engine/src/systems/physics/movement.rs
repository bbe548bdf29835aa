// arena_bot_engine/src/systems/physics/movement.rs

use super::collision::is_position_blocked;
use crate::core::constants::{STUCK_DISPLACEMENT_EPSILON, STUCK_TIMEOUT_MS, UNSTICK_JUMP_DISTANCE};
use crate::core::types::{Vec2, WorldSnapshot};
use crate::entities::bot::Bot;
use rand::Rng;
use std::f32::consts::TAU;
use tracing::debug;

/// Moves `bot` by `speed` along `angle` unless the destination is blocked by
/// the world edge margin or a wall. A rejected move leaves position and facing
/// untouched; bots never slide along obstacles.
pub fn try_move(bot: &mut Bot, angle: f32, speed: f32, world: &WorldSnapshot) -> bool {
    let candidate = bot.position + Vec2::from_angle(angle) * speed;
    if is_position_blocked(candidate, &world.bounds, &world.walls) {
        return false;
    }
    bot.position = candidate;
    bot.facing_angle = angle;
    true
}

/// Stuck bookkeeping, run once per tick after movement. When the bot has
/// barely moved for longer than the timeout it is shoved a fixed distance in
/// a random direction, ignoring walls and edges. Returns whether a jump happened.
pub fn update_stuck_recovery(bot: &mut Bot, dt_ms: f32, rng: &mut impl Rng) -> bool {
    let displacement = bot.position.distance(bot.last_position);
    let mut jumped = false;

    if displacement < STUCK_DISPLACEMENT_EPSILON {
        bot.stuck_timer_ms += dt_ms;
        if bot.stuck_timer_ms > STUCK_TIMEOUT_MS {
            let direction = rng.gen_range(0.0..TAU);
            bot.position = bot.position + Vec2::from_angle(direction) * UNSTICK_JUMP_DISTANCE;
            bot.stuck_timer_ms = 0.0;
            jumped = true;
            debug!(
                "[Bot {} ({})]: Stuck, jumped to ({:.1}, {:.1})",
                bot.label(), bot.id(), bot.position.x, bot.position.y
            );
        }
    } else {
        bot.stuck_timer_ms = 0.0;
    }

    bot.last_position = bot.position;
    jumped
}
