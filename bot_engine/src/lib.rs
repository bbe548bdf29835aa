// arena_bot_engine/src/lib.rs

pub mod core;
pub mod entities;
pub mod operational;
pub mod systems;

pub use crate::core::config::BotEngineConfig;
pub use crate::core::types::{BotData, ShootAction, WorldSnapshot};
pub use crate::systems::bots::BotRoster;
pub use crate::systems::difficulty::DifficultyTier;
