// arena_bot_engine/src/main.rs
use arena_bot_engine::core::config::BotEngineConfig;
use arena_bot_engine::core::types::{Pickup, PlayerSnapshot, Wall, WorldBounds, WorldSnapshot};
use arena_bot_engine::operational::monitoring::metrics::{init_logging, BotMetrics};
use arena_bot_engine::systems::bots::BotRoster;

use anyhow::Context;
use std::time::Instant;
use tokio::time::interval;
use tracing::{debug, error, info, warn};

const ARENA_WIDTH: f32 = 1600.0;
const ARENA_HEIGHT: f32 = 1200.0;

fn demo_world() -> WorldSnapshot {
    let mut world = WorldSnapshot::new(WorldBounds::new(ARENA_WIDTH, ARENA_HEIGHT));
    world.walls = vec![
        Wall::new(800.0, 600.0, 80.0),
        Wall::new(400.0, 300.0, 40.0),
        Wall::new(1200.0, 300.0, 40.0),
        Wall::new(400.0, 900.0, 40.0),
        Wall::new(1200.0, 900.0, 40.0),
    ];
    world.pickups = vec![Pickup::new(200.0, 600.0), Pickup::new(1400.0, 600.0)];
    world
}

/// Two scripted players circling the arena center in opposite directions.
fn scripted_players(tick: u64) -> Vec<PlayerSnapshot> {
    let center_x = ARENA_WIDTH / 2.0;
    let center_y = ARENA_HEIGHT / 2.0;
    let t = tick as f32 * 0.01;
    [(350.0_f32, 1.0_f32), (480.0, -1.0)]
        .iter()
        .enumerate()
        .map(|(i, &(radius, dir))| {
            let phase = dir * t + i as f32 * std::f32::consts::PI;
            let speed = radius * 0.01;
            PlayerSnapshot::new(
                format!("player_{}", i + 1),
                center_x + radius * phase.cos(),
                center_y + radius * phase.sin(),
                100.0,
            )
            .with_velocity(-dir * speed * phase.sin(), dir * speed * phase.cos())
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {:?}", e);
        return Err(e);
    }

    let config = BotEngineConfig::load_or_default().context("Failed to load bot engine configuration")?;
    info!(
        "Bot engine configuration loaded. Max bots: {}, tick rate: {}, seed: {:?}",
        config.max_bots, config.tick_rate, config.rng_seed
    );

    if let Some(port) = config.metrics_port {
        match BotMetrics::install_prometheus(port) {
            Ok(()) => info!("Prometheus exporter listening on port {}", port),
            Err(e) => warn!("Metrics disabled: {:?}", e),
        }
    }

    let tick_duration = config.tick_duration();
    let dt_ms = tick_duration.as_secs_f32() * 1000.0;
    let demo_ticks = config.demo_ticks;
    let demo_bot_count = config.demo_bot_count;

    let mut world = demo_world();
    let mut roster = BotRoster::new(config);
    let spawned = roster.add_mixed_bots(&world, demo_bot_count);
    if spawned.is_empty() {
        error!("No bots could be spawned");
        return Err(anyhow::anyhow!("roster rejected every bot"));
    }

    let mut tick_timer = interval(tick_duration);
    let mut total_shots = 0usize;
    info!("Simulation started. {} ticks of {:.1} ms", demo_ticks, dt_ms);

    for tick in 0..demo_ticks {
        tick_timer.tick().await;
        let frame_start = Instant::now();

        world.players = scripted_players(tick);
        world.players.extend(roster.bots().map(|bot| {
            PlayerSnapshot::new(bot.id().as_str(), bot.position().x, bot.position().y, bot.health())
        }));

        let shots = roster.update(dt_ms, &world);
        for shot in &shots {
            debug!("Tick {}: {} fired at {:.2} rad from ({:.1}, {:.1})", tick, shot.bot_id, shot.angle, shot.x, shot.y);
        }
        total_shots += shots.len();

        if tick % 60 == 0 {
            info!("Tick {} - {} bots, {} shots so far", tick, roster.len(), total_shots);
        }

        let frame_time = frame_start.elapsed();
        if frame_time > tick_duration {
            warn!("Tick {} took too long: {:?}", tick, frame_time);
        }
    }

    let snapshot = serde_json::to_string_pretty(&roster.get_bot_data()).context("Failed to serialize bot data")?;
    info!("Simulation finished with {} shots fired", total_shots);
    println!("{}", snapshot);
    Ok(())
}
