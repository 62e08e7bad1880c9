//! Game module - turn and round state machine
//!
//! A turn moves through `roll -> score -> (continue | zonk | bank)`:
//!
//! 1. Roll the dice still in hand (six at the start of a turn).
//! 2. A zonk loses the round score and ends the turn.
//! 3. Otherwise the best combination's points go to the round score, the
//!    strategy sets aside some of the scoring dice, and the rest stay in
//!    hand. Setting aside every die is "hot dice": all six come back.
//! 4. The strategy either rolls again or banks, which ends the turn.
//!
//! After each turn the acting player wins if their total reached the target,
//! play passes to the next player, and a new round starts when play wraps
//! back to the first player.

use log::{debug, info, warn};

use crate::dice::{Dice, DiceSource};
use crate::error::GameError;
use crate::player::Player;
use crate::scoring::{find_best_scoring_combination, is_zonk};
use crate::snapshot::{GameSnapshot, PlayerSnapshot, RollOutcome, RollRecord, TurnReport};
use crate::strategy::Strategy;
use crate::types::DICE_PER_TURN;

/// A game between bots, rolling from `D`
#[derive(Debug, Clone)]
pub struct Game<D: DiceSource = Dice> {
    players: Vec<Player>,
    /// One per player, same order.
    strategies: Vec<Strategy>,
    target_score: u32,
    current_player_index: usize,
    /// Starts at 1; increments each time play wraps to the first player.
    round_number: u32,
    game_over: bool,
    /// Index into `players`; set once.
    winner: Option<usize>,
    dice: D,
}

impl Game<Dice> {
    /// Game between freshly named players, rolling seeded dice
    pub fn from_names<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        strategies: Vec<Strategy>,
        target_score: u32,
        seed: u64,
    ) -> Result<Self, GameError> {
        let players = names.into_iter().map(Player::new).collect();
        Self::new(players, strategies, target_score, Dice::new(seed))
    }
}

impl<D: DiceSource> Game<D> {
    /// Create a game.
    ///
    /// Fails if the player and strategy lists differ in length, if there are
    /// no players, or if the target score is zero.
    pub fn new(
        players: Vec<Player>,
        strategies: Vec<Strategy>,
        target_score: u32,
        dice: D,
    ) -> Result<Self, GameError> {
        if players.len() != strategies.len() {
            return Err(GameError::StrategyCountMismatch {
                players: players.len(),
                strategies: strategies.len(),
            });
        }
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        if target_score == 0 {
            return Err(GameError::ZeroTargetScore);
        }

        Ok(Self {
            players,
            strategies,
            target_score,
            current_player_index: 0,
            round_number: 1,
            game_over: false,
            winner: None,
            dice,
        })
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn get_winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    pub fn winner_index(&self) -> Option<usize> {
        self.winner
    }

    pub fn dice(&self) -> &D {
        &self.dice
    }

    /// Play one full turn for the current player.
    ///
    /// Turns can still be played after the game is over; they update scores
    /// but never replace the winner.
    pub fn play_turn(&mut self) -> TurnReport {
        let idx = self.current_player_index;
        let strategy = self.strategies[idx];
        let player = &mut self.players[idx];
        player.reset_round_score();

        let mut report = TurnReport {
            player: player.name().to_string(),
            rolls: Vec::new(),
            zonk: false,
            banked: false,
            final_score: None,
        };
        let mut num_dice = DICE_PER_TURN;

        loop {
            let dice = self.dice.roll(num_dice);

            if is_zonk(&dice) {
                debug!(
                    "{} zonked on {} (lost {} points)",
                    player.name(),
                    dice,
                    player.round_score()
                );
                player.reset_round_score();
                report.zonk = true;
                report.rolls.push(RollRecord {
                    num_dice,
                    dice,
                    outcome: RollOutcome::Zonk,
                });
                break;
            }

            let best = find_best_scoring_combination(&dice);
            player.add_round_score(best.points);

            let kept = strategy.choose_dice_to_keep(&dice, &best.used);
            debug_assert!(best.used.contains_all(&kept));

            let rolled = num_dice;
            num_dice = num_dice.saturating_sub(kept.len());
            if num_dice == 0 {
                num_dice = DICE_PER_TURN;
            }

            debug!(
                "{} rolled {} for {} (kept {}, round {}, {} dice left)",
                player.name(),
                dice,
                best.points,
                kept,
                player.round_score(),
                num_dice
            );

            report.rolls.push(RollRecord {
                num_dice: rolled,
                dice,
                outcome: RollOutcome::Scored {
                    points: best.points,
                    scoring_dice: best.used,
                    kept_dice: kept,
                },
            });

            if !strategy.should_continue(player.round_score(), num_dice, player.total_score()) {
                player.bank_round_score();
                report.banked = true;
                report.final_score = Some(player.total_score());
                debug!("{} banked, total {}", player.name(), player.total_score());
                break;
            }
        }

        self.end_turn(idx);
        report
    }

    fn end_turn(&mut self, idx: usize) {
        let total = self.players[idx].total_score();
        if total >= self.target_score && self.winner.is_none() {
            self.game_over = true;
            self.winner = Some(idx);
            info!(
                "{} wins with {} points in round {}",
                self.players[idx].name(),
                total,
                self.round_number
            );
        }

        self.current_player_index = (idx + 1) % self.players.len();
        if self.current_player_index == 0 {
            self.round_number += 1;
        }
    }

    /// Play turns until someone reaches the target score.
    ///
    /// With `max_rounds`, once the round number passes the cap the first
    /// player (in seating order) with the highest total wins instead.
    /// `Some(0)` is a real cap: the game ends after the first turn.
    /// Pass `None` to play until someone reaches the target.
    pub fn play_game(&mut self, max_rounds: Option<u32>) -> Option<&Player> {
        while !self.game_over {
            self.play_turn();

            if let Some(max) = max_rounds {
                self.enforce_round_cap(max);
            }
        }
        self.get_winner()
    }

    /// End the game in the leader's favour once the round number has passed
    /// `max_rounds`. Returns whether this call ended the game.
    pub fn enforce_round_cap(&mut self, max_rounds: u32) -> bool {
        if self.game_over || self.round_number <= max_rounds {
            return false;
        }
        self.award_to_leader();
        true
    }

    fn award_to_leader(&mut self) {
        let best = self
            .players
            .iter()
            .map(Player::total_score)
            .max()
            .unwrap_or(0);
        self.winner = self.players.iter().position(|p| p.total_score() == best);
        self.game_over = true;

        if let Some(p) = self.get_winner() {
            warn!(
                "round cap reached after round {}; {} leads with {}",
                self.round_number - 1,
                p.name(),
                best
            );
        }
    }

    pub fn get_game_state(&self) -> GameSnapshot {
        GameSnapshot {
            round: self.round_number,
            current_player: self.current_player().name().to_string(),
            players: self
                .players
                .iter()
                .map(|p| PlayerSnapshot {
                    name: p.name().to_string(),
                    total_score: p.total_score(),
                    round_score: p.round_score(),
                })
                .collect(),
            target_score: self.target_score,
            game_over: self.game_over,
            winner: self.get_winner().map(|p| p.name().to_string()),
        }
    }

    pub fn display_game_state(&self) -> String {
        self.get_game_state().to_string()
    }
}
