// arena_bot_engine/src/operational/mod.rs
pub mod monitoring;
