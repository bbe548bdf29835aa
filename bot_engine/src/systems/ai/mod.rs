// arena_bot_engine/src/systems/ai/mod.rs
pub mod bot_ai;
pub mod targeting;
