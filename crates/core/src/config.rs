//! Game and strategy configuration.
//!
//! Every field has a default, so a config file only needs the values it
//! changes. Loading order used by the demo binary: defaults, then the JSON
//! file named by `ZONK_CONFIG` (if any), then individual `ZONK_*` overrides.
//!
//! | Variable | Field | Default |
//! |----------|-------|---------|
//! | `ZONK_CONFIG` | JSON file with any of the fields below | unset |
//! | `ZONK_TARGET_SCORE` | `target_score` | 10000 |
//! | `ZONK_MAX_ROUNDS` | `max_rounds` | unset |
//! | `ZONK_MAX_TURNS` | `max_turns` | unset |
//! | `ZONK_SEED` | `seed` | random |

use std::env;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    AGGRESSIVE_BANK_AT, AGGRESSIVE_KEEP_MAX, BALANCED_BANK_AT, BALANCED_CAUTIOUS_BELOW,
    BALANCED_ENDGAME_TOTAL, CONSERVATIVE_BANK_AT, CONSERVATIVE_MIN_DICE, DEFAULT_TARGET_SCORE,
};

/// Thresholds for the conservative strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConservativeConfig {
    /// Bank once the round score reaches this.
    pub bank_at: u32,
    /// Bank when this many dice or fewer are left to roll.
    pub min_dice: usize,
}

impl Default for ConservativeConfig {
    fn default() -> Self {
        Self {
            bank_at: CONSERVATIVE_BANK_AT,
            min_dice: CONSERVATIVE_MIN_DICE,
        }
    }
}

/// Thresholds for the aggressive strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggressiveConfig {
    /// Bank once the round score reaches this.
    pub bank_at: u32,
    /// Keep at most this many scoring dice per roll.
    pub keep_max: usize,
}

impl Default for AggressiveConfig {
    fn default() -> Self {
        Self {
            bank_at: AGGRESSIVE_BANK_AT,
            keep_max: AGGRESSIVE_KEEP_MAX,
        }
    }
}

/// Thresholds for the balanced strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalancedConfig {
    /// Bank once the round score reaches this.
    pub bank_at: u32,
    /// With one die left, or in the endgame, keep rolling only below this.
    pub cautious_below: u32,
    /// Total score from which the endgame caution applies.
    pub endgame_total: u32,
}

impl Default for BalancedConfig {
    fn default() -> Self {
        Self {
            bank_at: BALANCED_BANK_AT,
            cautious_below: BALANCED_CAUTIOUS_BELOW,
            endgame_total: BALANCED_ENDGAME_TOTAL,
        }
    }
}

/// Settings for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub target_score: u32,
    /// Round cap for `play_game`; unset plays until someone reaches the target.
    pub max_rounds: Option<u32>,
    /// Turn cap for drivers that step turn by turn.
    pub max_turns: Option<u32>,
    /// Dice seed; unset picks a random one.
    pub seed: Option<u64>,
    pub conservative: ConservativeConfig,
    pub aggressive: AggressiveConfig,
    pub balanced: BalancedConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
            max_rounds: None,
            max_turns: None,
            seed: None,
            conservative: ConservativeConfig::default(),
            aggressive: AggressiveConfig::default(),
            balanced: BalancedConfig::default(),
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Defaults, then `ZONK_CONFIG`, then the individual `ZONK_*` overrides
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_or(Self::default())
    }

    /// Like [`GameConfig::from_env`], starting from `base` instead of the
    /// defaults. A `ZONK_CONFIG` file replaces `base` entirely.
    pub fn from_env_or(base: Self) -> Result<Self, ConfigError> {
        let base = match env::var("ZONK_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_path(path.trim())?,
            _ => base,
        };
        base.with_overrides(|key| env::var(key).ok())
    }

    /// Apply `ZONK_*` overrides from any key/value lookup.
    ///
    /// Blank values are ignored; values that fail to parse are errors.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = parse_var(&lookup, "ZONK_TARGET_SCORE")? {
            self.target_score = v;
        }
        if let Some(v) = parse_var(&lookup, "ZONK_MAX_ROUNDS")? {
            self.max_rounds = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "ZONK_MAX_TURNS")? {
            self.max_turns = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "ZONK_SEED")? {
            self.seed = Some(v);
        }
        Ok(self)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })
}
