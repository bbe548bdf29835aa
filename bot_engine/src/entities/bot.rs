// arena_bot_engine/src/entities/bot.rs
use crate::core::constants::*;
use crate::core::types::{BotData, BotId, PlayerID, ShootAction, Vec2};
use crate::systems::difficulty::{DifficultyProfile, DifficultyTier};
use rand::Rng;
use smallvec::SmallVec;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BotState {
    Patrol,
    Chase,
    Flee,
    Attack,
}

impl BotState {
    pub fn as_str(self) -> &'static str {
        match self {
            BotState::Patrol => "patrol",
            BotState::Chase => "chase",
            BotState::Flee => "flee",
            BotState::Attack => "attack",
        }
    }
}

/// Traits drawn once per bot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Personality {
    /// Willingness to close in and strafe, in `[0.5, 1.0)`.
    pub aggression: f32,
    /// Willingness to break off when hurt, in `[0.3, 0.7)`.
    pub caution: f32,
}

impl Personality {
    pub fn random(rng: &mut impl Rng) -> Self {
        Personality {
            aggression: rng.gen_range(AGGRESSION_RANGE),
            caution: rng.gen_range(CAUTION_RANGE),
        }
    }
}

pub type Waypoints = SmallVec<[Vec2; PATROL_MAX_WAYPOINTS]>;

#[derive(Clone, Debug)]
pub struct Bot {
    id: BotId,
    label: String,
    pub(crate) position: Vec2,
    pub(crate) facing_angle: f32,
    pub(crate) turret_angle: f32,
    health: f32,
    shield: f32,
    tier: DifficultyTier,
    profile: DifficultyProfile,
    accuracy: f32,
    personality: Personality,
    pub(crate) state: BotState,
    pub(crate) state_timer_ms: f32,
    pub(crate) target_id: Option<PlayerID>,
    pub(crate) waypoints: Waypoints,
    pub(crate) current_waypoint: usize,
    // Stuck detection fields
    pub(crate) stuck_timer_ms: f32,
    pub(crate) last_position: Vec2,
    last_shot_time_ms: Option<f64>,
    pub score: i32,
}

impl Bot {
    pub fn new(
        id: BotId,
        label: String,
        position: Vec2,
        tier: DifficultyTier,
        personality: Personality,
    ) -> Self {
        let profile = tier.profile();
        Bot {
            id,
            label,
            position,
            facing_angle: 0.0,
            turret_angle: 0.0,
            health: MAX_HEALTH,
            shield: 0.0,
            tier,
            profile,
            accuracy: profile.base_accuracy,
            personality,
            state: BotState::Patrol,
            state_timer_ms: 0.0,
            target_id: None,
            waypoints: Waypoints::new(),
            current_waypoint: 0,
            stuck_timer_ms: 0.0,
            last_position: position,
            last_shot_time_ms: None,
            score: 0,
        }
    }

    /// Starts the bot with the given vitals, clamped to `0..=100`.
    pub fn with_vitals(mut self, health: f32, shield: f32) -> Self {
        self.health = health.clamp(0.0, MAX_HEALTH);
        self.shield = shield.clamp(0.0, MAX_SHIELD);
        self
    }

    pub fn id(&self) -> &BotId { &self.id }
    pub fn label(&self) -> &str { &self.label }
    pub fn position(&self) -> Vec2 { self.position }
    pub fn facing_angle(&self) -> f32 { self.facing_angle }
    pub fn turret_angle(&self) -> f32 { self.turret_angle }
    pub fn health(&self) -> f32 { self.health }
    pub fn shield(&self) -> f32 { self.shield }
    pub fn tier(&self) -> DifficultyTier { self.tier }
    pub fn profile(&self) -> &DifficultyProfile { &self.profile }
    pub fn accuracy(&self) -> f32 { self.accuracy }
    pub fn personality(&self) -> Personality { self.personality }
    pub fn state(&self) -> BotState { self.state }
    pub fn state_timer_ms(&self) -> f32 { self.state_timer_ms }
    pub fn target_id(&self) -> Option<&PlayerID> { self.target_id.as_ref() }
    pub fn waypoints(&self) -> &[Vec2] { &self.waypoints }
    pub fn current_waypoint_index(&self) -> usize { self.current_waypoint }
    pub fn stuck_timer_ms(&self) -> f32 { self.stuck_timer_ms }
    pub fn last_shot_time_ms(&self) -> Option<f64> { self.last_shot_time_ms }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }

    /// Shield soaks damage first; whatever it cannot absorb comes off health.
    /// Returns whether the bot is dead afterwards.
    pub fn take_damage(&mut self, amount: f32) -> bool {
        let mut remaining = amount.max(0.0);
        if self.shield > 0.0 {
            let absorbed = remaining.min(self.shield);
            self.shield -= absorbed;
            remaining -= absorbed;
        }
        if remaining > 0.0 {
            self.health = (self.health - remaining).max(0.0);
        }
        trace!(
            "[Bot {} ({})]: took {:.1} damage, health {:.1} shield {:.1}",
            self.label, self.id, amount, self.health, self.shield
        );
        self.health <= 0.0
    }

    pub fn can_shoot(&self, now_ms: f64) -> bool {
        match self.last_shot_time_ms {
            None => true,
            Some(last) => now_ms - last > self.profile.shoot_cooldown_ms as f64,
        }
    }

    /// Fires along the current turret angle if the cooldown has elapsed.
    /// A call during cooldown does nothing.
    pub fn attempt_shoot(&mut self, now_ms: f64) -> Option<ShootAction> {
        if !self.can_shoot(now_ms) {
            return None;
        }
        self.last_shot_time_ms = Some(now_ms);
        Some(ShootAction {
            bot_id: self.id.clone(),
            x: self.position.x,
            y: self.position.y,
            angle: self.turret_angle,
        })
    }

    pub fn to_bot_data(&self) -> BotData {
        BotData {
            id: self.id.clone(),
            x: self.position.x,
            y: self.position.y,
            angle: self.turret_angle,
            facing_angle: self.facing_angle,
            health: self.health,
            shield: self.shield,
            label: self.label.clone(),
            score: self.score,
        }
    }
}
