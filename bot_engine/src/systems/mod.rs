// arena_bot_engine/src/systems/mod.rs
pub mod ai;
pub mod bots;
pub mod difficulty;
pub mod physics;
