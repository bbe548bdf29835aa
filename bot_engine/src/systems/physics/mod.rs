// arena_bot_engine/src/systems/physics/mod.rs
pub mod collision;
pub mod movement;
