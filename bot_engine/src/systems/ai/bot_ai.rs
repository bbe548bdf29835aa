// arena_bot_engine/src/systems/ai/bot_ai.rs

use super::targeting::select_target;
use crate::core::config::BotEngineConfig;
use crate::core::constants::*;
use crate::core::types::{Pickup, PlayerSnapshot, ShootAction, Vec2, WorldBounds, WorldSnapshot};
use crate::entities::bot::{Bot, BotState, Waypoints};
use crate::operational::monitoring::metrics::BotMetrics;
use crate::systems::physics::movement::{try_move, update_stuck_recovery};

use rand::Rng;
use std::f32::consts::FRAC_PI_2;
use tracing::{debug, trace};

/// Where a fleeing bot heads this tick. A reachable pickup wins over running away.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FleeDirective {
    SeekPickup(Vec2),
    Retreat(f32),
}

pub struct BotAISystem;

impl BotAISystem {
    /// One state-machine tick for a single bot: perceive, transition, run the
    /// state routine, then stuck recovery. `now_ms` is the roster clock used for
    /// shooting cooldowns.
    pub fn update_bot(
        bot: &mut Bot,
        dt_ms: f32,
        now_ms: f64,
        world: &WorldSnapshot,
        config: &BotEngineConfig,
        rng: &mut impl Rng,
    ) -> Option<ShootAction> {
        bot.state_timer_ms += dt_ms;

        let target = select_target(bot.id(), bot.position, bot.profile().vision_range, &world.players);
        bot.target_id = target.map(|(t, _)| t.id.clone());

        let next = Self::next_state(bot, target.map(|(_, dist)| dist));
        if next != bot.state {
            debug!(
                "[Bot {} ({})]: {} -> {}",
                bot.label(), bot.id(), bot.state.as_str(), next.as_str()
            );
            BotMetrics::record_state_transition(next);
            bot.state = next;
        }

        let speed = config.move_speed_per_tick;
        let shot = match (bot.state, target) {
            (BotState::Chase, Some((t, _))) => Self::chase(bot, t, speed, now_ms, world, rng),
            (BotState::Flee, Some((t, _))) => {
                Self::flee(bot, t, speed, world);
                None
            }
            (BotState::Attack, Some((t, _))) => Self::attack(bot, t, speed, now_ms, world, rng),
            // Every state other than patrol implies a perceived target.
            _ => {
                Self::patrol(bot, speed, world, rng);
                None
            }
        };

        if update_stuck_recovery(bot, dt_ms, rng) {
            BotMetrics::record_unstick();
        }

        shot
    }

    /// Transition rule, first match wins.
    pub fn next_state(bot: &Bot, target_distance: Option<f32>) -> BotState {
        let Some(dist) = target_distance else {
            return BotState::Patrol;
        };
        let personality = bot.personality();

        if bot.health() / MAX_HEALTH < FLEE_HEALTH_FRACTION && personality.caution > FLEE_MIN_CAUTION {
            BotState::Flee
        } else if dist < ATTACK_RANGE && personality.aggression > ATTACK_MIN_AGGRESSION {
            BotState::Attack
        } else if dist < bot.profile().vision_range {
            BotState::Chase
        } else {
            BotState::Patrol
        }
    }

    fn patrol(bot: &mut Bot, speed: f32, world: &WorldSnapshot, rng: &mut impl Rng) {
        let current = bot.waypoints.get(bot.current_waypoint).copied();
        let waypoint = match current {
            Some(wp) if bot.state_timer_ms <= PATROL_REGENERATE_AFTER_MS => wp,
            _ => {
                Self::regenerate_waypoints(bot, &world.bounds, rng);
                return;
            }
        };

        let angle = bot.position.angle_to(waypoint);
        try_move(bot, angle, speed, world);

        if bot.position.distance(waypoint) < WAYPOINT_REACHED_DISTANCE {
            bot.current_waypoint = (bot.current_waypoint + 1) % bot.waypoints.len();
        }
    }

    fn regenerate_waypoints(bot: &mut Bot, bounds: &WorldBounds, rng: &mut impl Rng) {
        let count = rng.gen_range(PATROL_MIN_WAYPOINTS..=PATROL_MAX_WAYPOINTS);
        bot.waypoints = (0..count)
            .map(|_| bounds.random_point(WAYPOINT_EDGE_INSET, rng))
            .collect::<Waypoints>();
        bot.state_timer_ms = 0.0;
        bot.current_waypoint = 0;
        trace!("[Bot {} ({})]: New patrol route with {} waypoints", bot.label(), bot.id(), count);
    }

    fn chase(
        bot: &mut Bot,
        target: &PlayerSnapshot,
        speed: f32,
        now_ms: f64,
        world: &WorldSnapshot,
        rng: &mut impl Rng,
    ) -> Option<ShootAction> {
        let angle = bot.position.angle_to(target.position);
        try_move(bot, angle, speed, world);

        let jitter = (1.0 - bot.accuracy()) * rng.gen_range(-CHASE_AIM_JITTER..CHASE_AIM_JITTER);
        bot.turret_angle = bot.position.angle_to(target.position) + jitter;

        if bot.position.distance(target.position) < CHASE_FIRE_RANGE {
            return Self::fire(bot, now_ms);
        }
        None
    }

    fn flee(bot: &mut Bot, threat: &PlayerSnapshot, speed: f32, world: &WorldSnapshot) {
        let retreat_angle = threat.position.angle_to(bot.position);
        match Self::flee_directive(bot.position, threat.position, &world.pickups) {
            FleeDirective::SeekPickup(pickup) => {
                let angle = bot.position.angle_to(pickup);
                // Pickup route blocked: still put distance between us and the threat.
                if !try_move(bot, angle, speed, world) {
                    try_move(bot, retreat_angle, speed, world);
                }
            }
            FleeDirective::Retreat(angle) => {
                try_move(bot, angle, speed, world);
            }
        }
    }

    /// Nearest pickup strictly inside the seek range, else straight away from the threat.
    pub fn flee_directive(position: Vec2, threat: Vec2, pickups: &[Pickup]) -> FleeDirective {
        let mut nearest: Option<(Vec2, f32)> = None;
        for pickup in pickups {
            let dist = position.distance(pickup.position());
            if dist >= PICKUP_SEEK_RANGE {
                continue;
            }
            if nearest.map_or(true, |(_, best)| dist < best) {
                nearest = Some((pickup.position(), dist));
            }
        }

        match nearest {
            Some((pickup, _)) => FleeDirective::SeekPickup(pickup),
            None => FleeDirective::Retreat(threat.angle_to(position)),
        }
    }

    fn attack(
        bot: &mut Bot,
        target: &PlayerSnapshot,
        speed: f32,
        now_ms: f64,
        world: &WorldSnapshot,
        rng: &mut impl Rng,
    ) -> Option<ShootAction> {
        let angle_to_target = bot.position.angle_to(target.position);
        let strafe_angle = angle_to_target + FRAC_PI_2;
        let circling = ATTACK_TARGET_WEIGHT * angle_to_target + ATTACK_STRAFE_WEIGHT * strafe_angle;
        try_move(bot, circling, speed, world);

        let lead_point = Self::predict_target_position(bot.position, target, bot.profile().prediction_skill);
        let jitter = (1.0 - bot.accuracy()) * rng.gen_range(-ATTACK_AIM_JITTER..ATTACK_AIM_JITTER);
        bot.turret_angle = bot.position.angle_to(lead_point) + jitter;

        Self::fire(bot, now_ms)
    }

    /// Where the target will be when a bullet fired now arrives, damped by
    /// `prediction_skill`. Targets without a known velocity are aimed at directly.
    pub fn predict_target_position(shooter: Vec2, target: &PlayerSnapshot, prediction_skill: f32) -> Vec2 {
        let velocity = target.velocity.unwrap_or(Vec2::ZERO);
        let ticks_to_target = shooter.distance(target.position) / BULLET_SPEED_PER_TICK;
        target.position + velocity * (ticks_to_target * prediction_skill)
    }

    fn fire(bot: &mut Bot, now_ms: f64) -> Option<ShootAction> {
        let shot = bot.attempt_shoot(now_ms)?;
        trace!(
            "[Bot {} ({})]: Fired at angle {:.3} from ({:.1}, {:.1})",
            bot.label(), bot.id(), shot.angle, shot.x, shot.y
        );
        Some(shot)
    }
}
