//! Error types for game construction and configuration loading.

use thiserror::Error;

pub use crate::types::RollError;

/// Game construction errors
///
/// These are usage errors: a game that fails to build is never returned, so
/// there is no partially configured game to recover.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("number of players ({players}) must match number of strategies ({strategies})")]
    StrategyCountMismatch { players: usize, strategies: usize },
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("target score must be positive")]
    ZeroTargetScore,
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}
