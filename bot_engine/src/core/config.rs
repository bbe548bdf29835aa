// arena_bot_engine/src/core/config.rs
use super::constants::{BOT_MOVE_SPEED_PER_TICK, DEFAULT_MAX_BOTS, DEFAULT_TICK_RATE, MAX_TICK_RATE};
use super::error::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotEngineConfig {
    /// Population cap enforced by the roster.
    pub max_bots: usize,
    /// Distance covered by one accepted move. Applied per tick, independent of `dt`.
    pub move_speed_per_tick: f32,
    /// Seed for the roster RNG. `None` draws from entropy.
    pub rng_seed: Option<u64>,
    pub tick_rate: u64,
    pub demo_bot_count: usize,
    pub demo_ticks: u64,
    pub metrics_port: Option<u16>,
}

impl Default for BotEngineConfig {
    fn default() -> Self {
        BotEngineConfig {
            max_bots: DEFAULT_MAX_BOTS,
            move_speed_per_tick: BOT_MOVE_SPEED_PER_TICK,
            rng_seed: None,
            tick_rate: DEFAULT_TICK_RATE,
            demo_bot_count: 8,
            demo_ticks: 600,
            metrics_port: None,
        }
    }
}

impl BotEngineConfig {
    pub fn from_yaml_str(yaml: &str) -> EngineResult<Self> {
        let config: BotEngineConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&contents)
    }

    /// Reads `BOT_ENGINE_CONFIG` (a YAML path) if set, then applies the
    /// `BOT_*` environment overrides on top.
    pub fn load_or_default() -> EngineResult<Self> {
        let mut config = match std::env::var("BOT_ENGINE_CONFIG") {
            Ok(path) => {
                info!("Loading bot engine config from {}", path);
                Self::from_yaml_file(&path)?
            }
            Err(_) => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(raw) = lookup("BOT_MAX_BOTS") {
            match raw.parse::<usize>() {
                Ok(parsed) => self.max_bots = parsed,
                Err(_) => warn!("Invalid BOT_MAX_BOTS '{}', using {}", raw, self.max_bots),
            }
        }
        if let Some(raw) = lookup("BOT_RNG_SEED") {
            match raw.parse::<u64>() {
                Ok(parsed) => self.rng_seed = Some(parsed),
                Err(_) => warn!("Invalid BOT_RNG_SEED '{}', ignoring", raw),
            }
        }
        if let Some(raw) = lookup("BOT_METRICS_PORT") {
            match raw.parse::<u16>() {
                Ok(parsed) if parsed > 0 => self.metrics_port = Some(parsed),
                _ => warn!("Invalid BOT_METRICS_PORT '{}', metrics exporter disabled", raw),
            }
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.max_bots == 0 {
            return Err(EngineError::ConfigError("max_bots must be at least 1".into()));
        }
        if !self.move_speed_per_tick.is_finite() || self.move_speed_per_tick <= 0.0 {
            return Err(EngineError::ConfigError(format!(
                "move_speed_per_tick must be positive, got {}",
                self.move_speed_per_tick
            )));
        }
        if self.tick_rate == 0 || self.tick_rate > MAX_TICK_RATE {
            return Err(EngineError::ConfigError(format!(
                "tick_rate must be in 1..={}, got {}",
                MAX_TICK_RATE, self.tick_rate
            )));
        }
        Ok(())
    }

    /// Wall-clock length of one simulation tick.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate.clamp(1, MAX_TICK_RATE) as f64)
    }
}
