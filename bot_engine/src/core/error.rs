// arena_bot_engine/src/core/error.rs
use thiserror::Error;

/// Errors from the ambient layer (configuration loading and startup).
/// Simulation operations never fail; they report no-ops through their return values.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

pub type EngineResult<T> = Result<T, EngineError>;
