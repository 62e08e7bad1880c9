//! Serializable views of a game: per-turn reports and whole-game snapshots.

use std::fmt;

use serde::Serialize;

use crate::types::Roll;

/// What happened on one roll of a turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollRecord {
    /// Dice thrown on this roll.
    pub num_dice: usize,
    pub dice: Roll,
    #[serde(flatten)]
    pub outcome: RollOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum RollOutcome {
    /// Nothing scored; the round score is lost.
    Zonk,
    Scored {
        points: u32,
        scoring_dice: Roll,
        kept_dice: Roll,
    },
}

impl RollRecord {
    pub fn is_zonk(&self) -> bool {
        matches!(self.outcome, RollOutcome::Zonk)
    }
}

/// Result of one call to `Game::play_turn`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    pub player: String,
    pub rolls: Vec<RollRecord>,
    pub zonk: bool,
    pub banked: bool,
    /// The player's total after banking; `None` unless the turn banked.
    pub final_score: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerSnapshot {
    pub name: String,
    pub total_score: u32,
    pub round_score: u32,
}

/// Point-in-time view of a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub round: u32,
    pub current_player: String,
    pub players: Vec<PlayerSnapshot>,
    pub target_score: u32,
    pub game_over: bool,
    pub winner: Option<String>,
}

const RULE_WIDTH: usize = 60;

impl fmt::Display for GameSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f)?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "Round {} | Current Player: {}",
            self.round, self.current_player
        )?;
        writeln!(f, "{rule}")?;
        for p in &self.players {
            writeln!(
                f,
                "{:20} | Total: {:5} | Round: {:4}",
                p.name, p.total_score, p.round_score
            )?;
        }
        writeln!(f, "{rule}")?;
        writeln!(f, "Target Score: {}", self.target_score)?;
        if self.game_over {
            let winner = self.winner.as_deref().unwrap_or("None");
            writeln!(f)?;
            writeln!(f, "*** WINNER: {winner} ***")?;
        }
        Ok(())
    }
}
