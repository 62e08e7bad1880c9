use std::fmt;

/// A player's banked total and the points riding on the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    total_score: u32,
    round_score: u32,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_score: 0,
            round_score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    pub fn round_score(&self) -> u32 {
        self.round_score
    }

    pub fn add_round_score(&mut self, points: u32) {
        self.round_score = self.round_score.saturating_add(points);
    }

    /// Move the round score into the total
    pub fn bank_round_score(&mut self) {
        self.total_score = self.total_score.saturating_add(self.round_score);
        self.round_score = 0;
    }

    /// Drop the round score without banking it (a zonk)
    pub fn reset_round_score(&mut self) {
        self.round_score = 0;
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Player(name={}, total={}, round={})",
            self.name, self.total_score, self.round_score
        )
    }
}
