// arena_bot_engine/src/core/types.rs
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};
use std::sync::Arc;

/// Identifier shared by bots and players in the world snapshot.
pub type PlayerID = Arc<String>;
pub type BotId = PlayerID;

// --- Basic Geometric Types ---
#[derive(Clone, Debug, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self { Vec2 { x, y } }
    pub fn zero() -> Self { Self::ZERO }

    /// Unit vector pointing along `angle` (radians).
    #[inline]
    pub fn from_angle(angle: f32) -> Self {
        Vec2 { x: angle.cos(), y: angle.sin() }
    }

    #[inline]
    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    #[inline]
    pub fn distance(&self, other: Vec2) -> f32 {
        (other - *self).length()
    }

    /// Angle of the ray from `self` towards `other`.
    #[inline]
    pub fn angle_to(&self, other: Vec2) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 { Vec2::new(self.x + rhs.x, self.y + rhs.y) }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 { Vec2::new(self.x - rhs.x, self.y - rhs.y) }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, rhs: f32) -> Vec2 { Vec2::new(self.x * rhs, self.y * rhs) }
}

// --- World Snapshot (read-only input from the game loop) ---

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub id: PlayerID,
    pub position: Vec2,
    pub health: f32,
    /// Last known velocity in units per tick, when the game loop tracks it.
    #[serde(default)]
    pub velocity: Option<Vec2>,
}

impl PlayerSnapshot {
    pub fn new(id: impl Into<String>, x: f32, y: f32, health: f32) -> Self {
        PlayerSnapshot {
            id: Arc::new(id.into()),
            position: Vec2::new(x, y),
            health,
            velocity: None,
        }
    }

    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.velocity = Some(Vec2::new(vx, vy));
        self
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// Circular wall collider.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Wall {
    pub fn new(x: f32, y: f32, radius: f32) -> Self { Wall { x, y, radius } }
    pub fn center(&self) -> Vec2 { Vec2::new(self.x, self.y) }
}

#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub x: f32,
    pub y: f32,
}

impl Pickup {
    pub fn new(x: f32, y: f32) -> Self { Pickup { x, y } }
    pub fn position(&self) -> Vec2 { Vec2::new(self.x, self.y) }
}

/// Playfield extent; the playfield spans `0..width` by `0..height`.
#[derive(Clone, Debug, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub width: f32,
    pub height: f32,
}

impl WorldBounds {
    pub fn new(width: f32, height: f32) -> Self { WorldBounds { width, height } }

    /// Uniform point at least `inset` from every edge. An axis too narrow for
    /// the inset collapses to its midpoint.
    pub fn random_point(&self, inset: f32, rng: &mut impl Rng) -> Vec2 {
        fn axis(extent: f32, inset: f32, rng: &mut impl Rng) -> f32 {
            if extent - inset > inset {
                rng.gen_range(inset..extent - inset)
            } else {
                extent / 2.0
            }
        }
        let x = axis(self.width, inset, rng);
        let y = axis(self.height, inset, rng);
        Vec2::new(x, y)
    }
}

/// Everything a bot may perceive in one tick. Players keep the game loop's
/// iteration order, which decides ties during target selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorldSnapshot {
    #[serde(default)]
    pub players: Vec<PlayerSnapshot>,
    #[serde(default)]
    pub walls: Vec<Wall>,
    #[serde(default)]
    pub pickups: Vec<Pickup>,
    pub bounds: WorldBounds,
}

impl WorldSnapshot {
    pub fn new(bounds: WorldBounds) -> Self {
        WorldSnapshot {
            players: Vec::new(),
            walls: Vec::new(),
            pickups: Vec::new(),
            bounds,
        }
    }

    /// Identifier lookup used to resolve a bot's weak target reference.
    pub fn player(&self, id: &str) -> Option<&PlayerSnapshot> {
        self.players.iter().find(|p| p.id.as_str() == id)
    }
}

// --- Outputs for the game loop and renderer ---

/// A shot a bot wants fired this tick; the caller turns it into a projectile.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShootAction {
    pub bot_id: BotId,
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

/// Read-only projection of a bot for the rendering collaborator.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotData {
    pub id: BotId,
    pub x: f32,
    pub y: f32,
    /// Turret angle.
    pub angle: f32,
    pub facing_angle: f32,
    pub health: f32,
    pub shield: f32,
    pub label: String,
    pub score: i32,
}
