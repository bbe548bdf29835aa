// arena_bot_engine/src/core/constants.rs

// Roster
pub const DEFAULT_MAX_BOTS: usize = 10;
pub const SPAWN_EDGE_INSET: f32 = 100.0;
pub const SPAWN_MAX_ATTEMPTS: usize = 20;

// Movement & collision
pub const BOT_MOVE_SPEED_PER_TICK: f32 = 3.0; // Fixed step, not scaled by frame delta
pub const BOT_COLLISION_RADIUS: f32 = 45.0;
pub const WORLD_EDGE_MARGIN: f32 = 50.0;

// Stuck recovery
pub const STUCK_DISPLACEMENT_EPSILON: f32 = 1.0;
pub const STUCK_TIMEOUT_MS: f32 = 1000.0;
pub const UNSTICK_JUMP_DISTANCE: f32 = 50.0;

// Patrol
pub const PATROL_REGENERATE_AFTER_MS: f32 = 2000.0;
pub const PATROL_MIN_WAYPOINTS: usize = 3;
pub const PATROL_MAX_WAYPOINTS: usize = 5;
pub const WAYPOINT_EDGE_INSET: f32 = 100.0;
pub const WAYPOINT_REACHED_DISTANCE: f32 = 50.0;

// State transitions
pub const FLEE_HEALTH_FRACTION: f32 = 0.3;
pub const FLEE_MIN_CAUTION: f32 = 0.5;
pub const ATTACK_RANGE: f32 = 300.0;
pub const ATTACK_MIN_AGGRESSION: f32 = 0.6;

// Combat
pub const CHASE_FIRE_RANGE: f32 = 500.0;
pub const BULLET_SPEED_PER_TICK: f32 = 10.0;
pub const CHASE_AIM_JITTER: f32 = 0.25;
pub const ATTACK_AIM_JITTER: f32 = 0.15;
pub const ATTACK_TARGET_WEIGHT: f32 = 0.3;
pub const ATTACK_STRAFE_WEIGHT: f32 = 0.7;
pub const PICKUP_SEEK_RANGE: f32 = 400.0;

// Vitals
pub const MAX_HEALTH: f32 = 100.0;
pub const MAX_SHIELD: f32 = 100.0;

// Personality draws, half-open ranges
pub const AGGRESSION_RANGE: std::ops::Range<f32> = 0.5..1.0;
pub const CAUTION_RANGE: std::ops::Range<f32> = 0.3..0.7;

// Demo binary
pub const DEFAULT_TICK_RATE: u64 = 60;
pub const MAX_TICK_RATE: u64 = 1000;
