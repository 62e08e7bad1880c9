//! Bot strategies: when to bank, and which scoring dice to set aside.
//!
//! Strategies are pure: the same inputs always give the same decision.
//! `choose_dice_to_keep` always returns a prefix of the scoring dice it was
//! offered, so a strategy can never keep a die that did not score.

use serde::{Deserialize, Serialize};

use crate::config::{AggressiveConfig, BalancedConfig, ConservativeConfig, GameConfig};
use crate::types::{Roll, StrategyKind};

/// One of the three fixed bot policies, with its thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Strategy {
    Conservative(ConservativeConfig),
    Aggressive(AggressiveConfig),
    Balanced(BalancedConfig),
}

impl Strategy {
    pub fn conservative() -> Self {
        Strategy::Conservative(ConservativeConfig::default())
    }

    pub fn aggressive() -> Self {
        Strategy::Aggressive(AggressiveConfig::default())
    }

    pub fn balanced() -> Self {
        Strategy::Balanced(BalancedConfig::default())
    }

    /// Strategy of the given kind with default thresholds
    pub fn from_kind(kind: StrategyKind) -> Self {
        match kind {
            StrategyKind::Conservative => Self::conservative(),
            StrategyKind::Aggressive => Self::aggressive(),
            StrategyKind::Balanced => Self::balanced(),
        }
    }

    /// Strategy of the given kind with the thresholds from `config`
    pub fn from_config(kind: StrategyKind, config: &GameConfig) -> Self {
        match kind {
            StrategyKind::Conservative => Strategy::Conservative(config.conservative),
            StrategyKind::Aggressive => Strategy::Aggressive(config.aggressive),
            StrategyKind::Balanced => Strategy::Balanced(config.balanced),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            Strategy::Conservative(_) => StrategyKind::Conservative,
            Strategy::Aggressive(_) => StrategyKind::Aggressive,
            Strategy::Balanced(_) => StrategyKind::Balanced,
        }
    }

    /// Whether to roll again (`false` means bank now)
    pub fn should_continue(&self, round_score: u32, dice_remaining: usize, total_score: u32) -> bool {
        match self {
            Strategy::Conservative(c) => round_score < c.bank_at && dice_remaining > c.min_dice,
            Strategy::Aggressive(c) => round_score < c.bank_at,
            Strategy::Balanced(c) => {
                if round_score >= c.bank_at {
                    return false;
                }
                if dice_remaining == 1 || total_score >= c.endgame_total {
                    return round_score < c.cautious_below;
                }
                true
            }
        }
    }

    /// Which of `scoring_dice` to set aside from `roll`
    pub fn choose_dice_to_keep(&self, roll: &Roll, scoring_dice: &Roll) -> Roll {
        let scoring = scoring_dice.len();
        match self {
            Strategy::Conservative(_) => scoring_dice.clone(),
            Strategy::Aggressive(c) => {
                if scoring >= c.keep_max {
                    scoring_dice.prefix(c.keep_max)
                } else {
                    scoring_dice.clone()
                }
            }
            Strategy::Balanced(_) => {
                if scoring <= 2 || roll.len().saturating_sub(scoring) <= 1 {
                    return scoring_dice.clone();
                }
                scoring_dice.prefix((scoring / 2).max(2))
            }
        }
    }
}

impl From<StrategyKind> for Strategy {
    fn from(kind: StrategyKind) -> Self {
        Strategy::from_kind(kind)
    }
}
