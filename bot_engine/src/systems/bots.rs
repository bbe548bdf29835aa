// arena_bot_engine/src/systems/bots.rs

use crate::core::config::BotEngineConfig;
use crate::core::constants::{SPAWN_EDGE_INSET, SPAWN_MAX_ATTEMPTS};
use crate::core::types::{BotData, BotId, ShootAction, Vec2, WorldSnapshot};
use crate::entities::bot::{Bot, Personality};
use crate::operational::monitoring::metrics::BotMetrics;
use crate::systems::ai::bot_ai::BotAISystem;
use crate::systems::difficulty::DifficultyTier;
use crate::systems::physics::collision::is_position_blocked;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};
use uuid::Builder;

const BOT_NAMES: [&str; 20] = [
    "Bot_Alpha", "Bot_Bravo", "Bot_Charlie", "Bot_Delta", "Bot_Echo",
    "Bot_Foxtrot", "Bot_Golf", "Bot_Hotel", "Bot_India", "Bot_Juliet",
    "Bot_Kilo", "Bot_Lima", "Bot_Mike", "Bot_Nova", "Bot_Oscar",
    "Bot_Papa", "Bot_Quebec", "Bot_Romeo", "Bot_Sierra", "Bot_Tango",
];

/// Owns every bot of one match. Bots are ticked in insertion order and all
/// randomness flows from the roster's own RNG, so a seeded roster replays exactly.
pub struct BotRoster {
    bots: Vec<Bot>,
    config: BotEngineConfig,
    rng: StdRng,
    clock_ms: f64,
    spawned_total: usize,
}

impl BotRoster {
    pub fn new(config: BotEngineConfig) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    pub fn with_seed(config: BotEngineConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: BotEngineConfig, rng: StdRng) -> Self {
        Self {
            bots: Vec::with_capacity(config.max_bots),
            config,
            rng,
            clock_ms: 0.0,
            spawned_total: 0,
        }
    }

    /// Spawns a bot somewhere inside the playfield. Returns `None` once the
    /// population cap is reached.
    pub fn add_bot(&mut self, world: &WorldSnapshot, tier: DifficultyTier) -> Option<&Bot> {
        if self.bots.len() >= self.config.max_bots {
            debug!("Bot cap of {} reached, not spawning a {} bot", self.config.max_bots, tier);
            return None;
        }

        let id: BotId = Arc::new(format!("bot_{}", Builder::from_random_bytes(self.rng.gen()).into_uuid()));
        let label = self.next_label();
        let position = self.pick_spawn_point(world);
        let personality = Personality::random(&mut self.rng);

        debug!(
            "Spawned {} ({}) tier={} at ({:.1}, {:.1}) aggression={:.2} caution={:.2}",
            label, id, tier, position.x, position.y, personality.aggression, personality.caution
        );

        self.bots.push(Bot::new(id, label, position, tier, personality));
        self.spawned_total += 1;
        BotMetrics::update_bot_count(self.bots.len());
        self.bots.last()
    }

    /// Spawns up to `count` bots, cycling through the tiers easy to expert.
    pub fn add_mixed_bots(&mut self, world: &WorldSnapshot, count: usize) -> Vec<BotId> {
        let mut added = Vec::with_capacity(count);
        for i in 0..count {
            let tier = DifficultyTier::ALL[i % DifficultyTier::ALL.len()];
            match self.add_bot(world, tier) {
                Some(bot) => added.push(bot.id().clone()),
                None => break,
            }
        }
        info!("Added {} of {} requested bots ({} active)", added.len(), count, self.bots.len());
        added
    }

    pub fn remove_bot(&mut self, id: &str) -> Option<Bot> {
        let index = self.bots.iter().position(|b| b.id().as_str() == id)?;
        let bot = self.bots.remove(index);
        debug!("Removed {} ({})", bot.label(), bot.id());
        BotMetrics::update_bot_count(self.bots.len());
        Some(bot)
    }

    /// Advances the roster clock by `dt_ms` and ticks every living bot in
    /// insertion order, returning their shots in that same order.
    pub fn update(&mut self, dt_ms: f32, world: &WorldSnapshot) -> Vec<ShootAction> {
        let started = Instant::now();
        self.clock_ms += dt_ms as f64;
        let now_ms = self.clock_ms;

        let mut actions = Vec::new();
        for bot in self.bots.iter_mut() {
            if !bot.is_alive() {
                continue;
            }
            if let Some(action) = BotAISystem::update_bot(bot, dt_ms, now_ms, world, &self.config, &mut self.rng) {
                actions.push(action);
            }
        }

        BotMetrics::record_roster_update(started.elapsed().as_secs_f64(), self.bots.len(), actions.len());
        actions
    }

    pub fn get_bot(&self, id: &str) -> Option<&Bot> {
        self.bots.iter().find(|b| b.id().as_str() == id)
    }

    pub fn get_bot_mut(&mut self, id: &str) -> Option<&mut Bot> {
        self.bots.iter_mut().find(|b| b.id().as_str() == id)
    }

    pub fn clear(&mut self) {
        self.bots.clear();
        BotMetrics::update_bot_count(0);
    }

    pub fn get_bot_data(&self) -> Vec<BotData> {
        self.bots.iter().map(Bot::to_bot_data).collect()
    }

    pub fn bots(&self) -> impl Iterator<Item = &Bot> {
        self.bots.iter()
    }

    pub fn len(&self) -> usize {
        self.bots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bots.is_empty()
    }

    pub fn max_bots(&self) -> usize {
        self.config.max_bots
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    /// First random draw clear of walls and the edge margin. If every draw is
    /// obstructed the last one is used and stuck recovery frees the bot later.
    fn pick_spawn_point(&mut self, world: &WorldSnapshot) -> Vec2 {
        let mut candidate = world.bounds.random_point(SPAWN_EDGE_INSET, &mut self.rng);
        for _ in 1..SPAWN_MAX_ATTEMPTS {
            if !is_position_blocked(candidate, &world.bounds, &world.walls) {
                return candidate;
            }
            candidate = world.bounds.random_point(SPAWN_EDGE_INSET, &mut self.rng);
        }
        if is_position_blocked(candidate, &world.bounds, &world.walls) {
            warn!(
                "All {} spawn draws obstructed, spawning at ({:.1}, {:.1}) anyway",
                SPAWN_MAX_ATTEMPTS, candidate.x, candidate.y
            );
        }
        candidate
    }

    fn next_label(&self) -> String {
        let name = BOT_NAMES[self.spawned_total % BOT_NAMES.len()];
        let round = self.spawned_total / BOT_NAMES.len();
        if round == 0 {
            format!("{} [BOT]", name)
        } else {
            format!("{}_{} [BOT]", name, round + 1)
        }
    }
}
