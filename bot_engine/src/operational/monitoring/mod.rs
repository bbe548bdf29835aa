// arena_bot_engine/src/operational/monitoring/mod.rs
pub mod metrics;
