// arena_bot_engine/tests/integration/behavior.rs

use arena_bot_engine::core::config::BotEngineConfig;
use arena_bot_engine::core::types::{PlayerSnapshot, Vec2, Wall, WorldBounds, WorldSnapshot};
use arena_bot_engine::entities::bot::{Bot, BotState, Personality};
use arena_bot_engine::systems::ai::bot_ai::BotAISystem;
use arena_bot_engine::systems::ai::targeting::select_target;
use arena_bot_engine::systems::difficulty::DifficultyTier;
use arena_bot_engine::systems::physics::movement::try_move;

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn make_bot(tier: DifficultyTier, aggression: f32, caution: f32, position: Vec2) -> Bot {
    Bot::new(
        Arc::new("bot_under_test".to_string()),
        "Bot_Test [BOT]".to_string(),
        position,
        tier,
        Personality { aggression, caution },
    )
}

#[test]
fn flee_rule_outranks_everything_else() {
    let bot = make_bot(DifficultyTier::Expert, 0.99, 0.6, Vec2::new(500.0, 500.0)).with_vitals(20.0, 0.0);
    for dist in [0.0, 150.0, 299.0, 450.0, 999.0, 2000.0] {
        assert_eq!(BotAISystem::next_state(&bot, Some(dist)), BotState::Flee, "distance {dist}");
    }
}

#[test]
fn close_target_triggers_attack_for_aggressive_bot() {
    let bot = make_bot(DifficultyTier::Medium, 0.7, 0.6, Vec2::new(500.0, 500.0)).with_vitals(80.0, 0.0);
    assert_eq!(BotAISystem::next_state(&bot, Some(250.0)), BotState::Attack);
}

#[test]
fn cautious_but_healthy_bot_does_not_flee() {
    let bot = make_bot(DifficultyTier::Easy, 0.55, 0.69, Vec2::new(500.0, 500.0)).with_vitals(30.0, 0.0);
    // 30 / 100 is not below the 0.3 threshold
    assert_eq!(BotAISystem::next_state(&bot, Some(250.0)), BotState::Chase);
}

#[test]
fn shooting_twice_within_cooldown_yields_one_action() {
    let mut bot = make_bot(DifficultyTier::Easy, 0.7, 0.4, Vec2::new(300.0, 300.0));
    let first = bot.attempt_shoot(10_000.0);
    let second = bot.attempt_shoot(10_100.0);
    assert!(first.is_some());
    assert!(second.is_none());
    assert!(!bot.can_shoot(10_500.0));
    assert!(bot.can_shoot(10_501.0));
    assert!(bot.attempt_shoot(10_501.0).is_some());
}

#[test]
fn damage_spills_from_shield_into_health() {
    let mut bot = make_bot(DifficultyTier::Hard, 0.7, 0.4, Vec2::new(300.0, 300.0)).with_vitals(100.0, 10.0);
    assert!(!bot.take_damage(30.0));
    assert_eq!((bot.shield(), bot.health()), (0.0, 80.0));
    assert!(bot.take_damage(100.0));
    assert_eq!(bot.health(), 0.0);
}

#[test]
fn move_into_wall_is_a_full_noop() {
    let mut world = WorldSnapshot::new(WorldBounds::new(1000.0, 1000.0));
    world.walls.push(Wall::new(500.0, 560.0, 15.0));
    let mut bot = make_bot(DifficultyTier::Easy, 0.7, 0.4, Vec2::new(500.0, 500.0));

    // candidate (500, 503) sits 57 from the center, inside 15 + 45
    assert!(!try_move(&mut bot, std::f32::consts::FRAC_PI_2, 3.0, &world));
    assert_eq!(bot.position(), Vec2::new(500.0, 500.0));
    assert_eq!(bot.facing_angle(), 0.0);

    // sideways is clear
    assert!(try_move(&mut bot, std::f32::consts::PI, 3.0, &world));
    assert_eq!(bot.facing_angle(), std::f32::consts::PI);
}

#[test]
fn stuck_bot_jumps_once_after_1001_ms() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = BotEngineConfig::default();
    let mut world = WorldSnapshot::new(WorldBounds::new(2000.0, 2000.0));
    world.players.push(PlayerSnapshot::new("human", 900.0, 500.0, 100.0));
    world.walls.push(Wall::new(560.0, 500.0, 20.0));

    let start = Vec2::new(500.0, 500.0);
    let mut bot = make_bot(DifficultyTier::Medium, 0.55, 0.4, start);

    let mut now = 0.0;
    for tick in 1..=11 {
        now += 91.0;
        BotAISystem::update_bot(&mut bot, 91.0, now, &world, &config, &mut rng);
        if tick < 11 {
            assert_eq!(bot.position(), start, "moved early on tick {tick}");
        }
    }

    let jump = bot.position().distance(start);
    assert!((jump - 50.0).abs() < 1e-3, "jump distance {jump}");
    assert_eq!(bot.stuck_timer_ms(), 0.0);
}

#[test]
fn target_selection_tie_break_is_stable() {
    let players = vec![
        PlayerSnapshot::new("north", 500.0, 300.0, 100.0),
        PlayerSnapshot::new("south", 500.0, 700.0, 100.0),
        PlayerSnapshot::new("bot_under_test", 500.0, 500.0, 100.0),
    ];
    let origin = Vec2::new(500.0, 500.0);
    for _ in 0..10 {
        let (target, dist) = select_target("bot_under_test", origin, 600.0, &players).expect("in range");
        assert_eq!(target.id.as_str(), "north");
        assert_eq!(dist, 200.0);
    }

    let reversed: Vec<_> = players.iter().rev().cloned().collect();
    let (target, _) = select_target("bot_under_test", origin, 600.0, &reversed).unwrap();
    assert_eq!(target.id.as_str(), "south");
}

#[test]
fn flee_heads_for_pickup_when_one_is_close() {
    let mut rng = StdRng::seed_from_u64(17);
    let config = BotEngineConfig::default();
    let mut world = WorldSnapshot::new(WorldBounds::new(2000.0, 2000.0));
    world.players.push(PlayerSnapshot::new("human", 400.0, 500.0, 100.0));
    world.pickups.push(arena_bot_engine::core::types::Pickup::new(500.0, 800.0));

    let mut bot = make_bot(DifficultyTier::Hard, 0.9, 0.65, Vec2::new(500.0, 500.0)).with_vitals(10.0, 0.0);
    BotAISystem::update_bot(&mut bot, 16.0, 16.0, &world, &config, &mut rng);

    assert_eq!(bot.state(), BotState::Flee);
    // one step straight toward the pickup, not away from the human
    assert!((bot.position().x - 500.0).abs() < 1e-3);
    assert!((bot.position().y - 503.0).abs() < 1e-3);
}

#[test]
fn flee_retreats_when_pickup_route_is_walled_off() {
    let mut rng = StdRng::seed_from_u64(17);
    let config = BotEngineConfig::default();
    let mut world = WorldSnapshot::new(WorldBounds::new(2000.0, 2000.0));
    world.players.push(PlayerSnapshot::new("human", 400.0, 500.0, 100.0));
    world.pickups.push(arena_bot_engine::core::types::Pickup::new(500.0, 800.0));
    // sits between the bot and the pickup
    world.walls.push(Wall::new(500.0, 560.0, 15.0));

    let start = Vec2::new(500.0, 500.0);
    let mut bot = make_bot(DifficultyTier::Hard, 0.9, 0.65, start).with_vitals(10.0, 0.0);

    for tick in 1..=5 {
        BotAISystem::update_bot(&mut bot, 16.0, tick as f64 * 16.0, &world, &config, &mut rng);
        assert_eq!(bot.state(), BotState::Flee);
    }

    // five single steps straight away from the human, along +x
    assert!((bot.position().x - 515.0).abs() < 1e-3, "x = {}", bot.position().x);
    assert!((bot.position().y - 500.0).abs() < 1e-3);
    assert_eq!(bot.facing_angle(), 0.0);
}
