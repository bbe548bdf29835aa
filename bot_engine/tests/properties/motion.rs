// arena_bot_engine/tests/properties/motion.rs

use arena_bot_engine::core::types::{Vec2, Wall, WorldBounds, WorldSnapshot};
use arena_bot_engine::entities::bot::{Bot, Personality};
use arena_bot_engine::systems::difficulty::DifficultyTier;
use arena_bot_engine::systems::physics::movement::try_move;

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

fn bot_at(position: Vec2) -> Bot {
    Bot::new(
        Arc::new("bot_prop".to_string()),
        "Bot_Prop [BOT]".to_string(),
        position,
        DifficultyTier::Hard,
        Personality { aggression: 0.75, caution: 0.5 },
    )
}

proptest! {
    #[test]
    fn wall_overlap_always_rejects(
        x in 200.0f32..800.0,
        y in 200.0f32..800.0,
        angle in -std::f32::consts::PI..std::f32::consts::PI,
        radius in 5.0f32..80.0,
        offset_angle in 0.0f32..std::f32::consts::TAU,
        overlap in 0.0f32..0.95,
    ) {
        let start = Vec2::new(x, y);
        let candidate = start + Vec2::from_angle(angle) * 3.0;
        let reach = (radius + 45.0) * overlap;
        let center = candidate + Vec2::from_angle(offset_angle) * reach;

        let mut world = WorldSnapshot::new(WorldBounds::new(1000.0, 1000.0));
        world.walls.push(Wall::new(center.x, center.y, radius));

        let mut bot = bot_at(start);
        prop_assert!(!try_move(&mut bot, angle, 3.0, &world));
        prop_assert_eq!(bot.position(), start);
        prop_assert_eq!(bot.facing_angle(), 0.0);
    }

    #[test]
    fn open_floor_moves_exactly_one_step(
        x in 100.0f32..900.0,
        y in 100.0f32..900.0,
        angle in -std::f32::consts::PI..std::f32::consts::PI,
    ) {
        let world = WorldSnapshot::new(WorldBounds::new(1000.0, 1000.0));
        let mut bot = bot_at(Vec2::new(x, y));
        prop_assert!(try_move(&mut bot, angle, 3.0, &world));
        prop_assert!((bot.position().distance(Vec2::new(x, y)) - 3.0).abs() < 1e-3);
        prop_assert_eq!(bot.facing_angle(), angle);
    }

    #[test]
    fn damage_keeps_vitals_in_range(
        health in 0.0f32..=100.0,
        shield in 0.0f32..=100.0,
        hits in proptest::collection::vec(0.0f32..150.0, 1..12),
    ) {
        let mut bot = bot_at(Vec2::new(500.0, 500.0)).with_vitals(health, shield);
        for hit in hits {
            let before = bot.health() + bot.shield();
            let died = bot.take_damage(hit);
            prop_assert!((0.0..=100.0).contains(&bot.health()));
            prop_assert!((0.0..=100.0).contains(&bot.shield()));
            prop_assert_eq!(died, bot.health() <= 0.0);
            prop_assert!(bot.health() + bot.shield() <= before);
        }
    }

    #[test]
    fn personalities_are_drawn_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = Personality::random(&mut rng);
        prop_assert!(p.aggression >= 0.5 && p.aggression < 1.0);
        prop_assert!(p.caution >= 0.3 && p.caution < 0.7);
    }
}
