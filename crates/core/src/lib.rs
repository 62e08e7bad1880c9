//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the Zonk rules, the bot strategies, and the turn
//! state machine. It has **no dependencies** on terminal output or I/O apart
//! from optional config loading, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Dice are injected, so tests script exact rolls
//! - **Allocation-light**: Rolls live inline (at most six dice)
//!
//! # Module Structure
//!
//! - [`dice`]: Seeded dice and the [`DiceSource`] seam the game rolls through
//! - [`scoring`]: Combination scoring and zonk detection
//! - [`strategy`]: Conservative, aggressive and balanced bots
//! - [`player`]: Banked total and round score
//! - [`game`]: Turn/round state machine and win detection
//! - [`snapshot`]: Serializable turn reports and game snapshots
//! - [`config`]: Strategy thresholds and game settings
//!
//! # Game Rules
//!
//! - **Turn**: Roll six dice, score, set aside scoring dice, then roll the rest or bank
//! - **Zonk**: A roll with nothing scoring loses the whole round score
//! - **Hot dice**: Setting aside every die gives all six back
//! - **Winning**: First to bank up to the target score
//!
//! # Example
//!
//! ```
//! use zonk_core::{Game, Strategy};
//!
//! let mut game = Game::from_names(
//!     ["Careful", "Reckless"],
//!     vec![Strategy::conservative(), Strategy::aggressive()],
//!     2000,
//!     12345,
//! )
//! .unwrap();
//!
//! let report = game.play_turn();
//! assert_eq!(report.player, "Careful");
//! assert!(report.zonk || report.banked);
//!
//! let winner = game.play_game(Some(50));
//! assert!(winner.is_some());
//! ```

pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod player;
pub mod scoring;
pub mod snapshot;
pub mod strategy;

pub use zonk_types as types;

// Re-export commonly used types for convenience
pub use config::{AggressiveConfig, BalancedConfig, ConservativeConfig, GameConfig};
pub use dice::{Dice, DiceSource, Die, ScriptedDice};
pub use error::{ConfigError, GameError, RollError};
pub use game::Game;
pub use player::Player;
pub use scoring::{
    calculate_score, find_best_scoring_combination, get_possible_scoring_options,
    get_scoring_dice, is_zonk, ScoreResult,
};
pub use snapshot::{GameSnapshot, PlayerSnapshot, RollOutcome, RollRecord, TurnReport};
pub use strategy::Strategy;
pub use types::{Roll, StrategyKind};
