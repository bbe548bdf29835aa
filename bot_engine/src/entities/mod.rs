// arena_bot_engine/src/entities/mod.rs
pub mod bot;
