// arena_bot_engine/src/systems/difficulty.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [
        DifficultyTier::Easy,
        DifficultyTier::Medium,
        DifficultyTier::Hard,
        DifficultyTier::Expert,
    ];

    pub fn profile(self) -> DifficultyProfile {
        match self {
            DifficultyTier::Easy => DifficultyProfile {
                reaction_time_ms: 800.0,
                base_accuracy: 0.40,
                shoot_cooldown_ms: 500.0,
                vision_range: 400.0,
                prediction_skill: 0.2,
            },
            DifficultyTier::Medium => DifficultyProfile {
                reaction_time_ms: 500.0,
                base_accuracy: 0.60,
                shoot_cooldown_ms: 400.0,
                vision_range: 600.0,
                prediction_skill: 0.5,
            },
            DifficultyTier::Hard => DifficultyProfile {
                reaction_time_ms: 300.0,
                base_accuracy: 0.80,
                shoot_cooldown_ms: 300.0,
                vision_range: 800.0,
                prediction_skill: 0.7,
            },
            DifficultyTier::Expert => DifficultyProfile {
                reaction_time_ms: 150.0,
                base_accuracy: 0.95,
                shoot_cooldown_ms: 250.0,
                vision_range: 1000.0,
                prediction_skill: 0.9,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyTier::Easy => "easy",
            DifficultyTier::Medium => "medium",
            DifficultyTier::Hard => "hard",
            DifficultyTier::Expert => "expert",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(DifficultyTier::Easy),
            "medium" => Ok(DifficultyTier::Medium),
            "hard" => Ok(DifficultyTier::Hard),
            "expert" => Ok(DifficultyTier::Expert),
            other => Err(format!("unknown difficulty tier '{}'", other)),
        }
    }
}

/// Per-tier tuning copied into each bot at creation.
/// `reaction_time_ms` is carried but not consumed by any behavior yet.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct DifficultyProfile {
    pub reaction_time_ms: f32,
    pub base_accuracy: f32,
    pub shoot_cooldown_ms: f32,
    pub vision_range: f32,
    pub prediction_skill: f32,
}
