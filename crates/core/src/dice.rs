//! Dice module - seeded dice rolling
//!
//! All randomness in a game flows through a [`DiceSource`] owned by the
//! game. [`Dice`] rolls from a seeded ChaCha8 stream, so the same seed always
//! replays the same game. [`ScriptedDice`] replays a fixed list of rolls and
//! is what tests use to force specific turns.

use std::collections::VecDeque;
use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::{Roll, MAX_FACE, MIN_FACE};

/// Anything the game can roll dice from
pub trait DiceSource {
    /// Roll `num_dice` dice (at most 6)
    fn roll(&mut self, num_dice: usize) -> Roll;
}

/// A single die and the face it last showed (0 before the first roll)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Die {
    value: u8,
}

impl Die {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll the die and return the new face
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u8 {
        self.value = rng.gen_range(MIN_FACE..=MAX_FACE);
        self.value
    }

    pub fn value(&self) -> u8 {
        self.value
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Die({})", self.value)
    }
}

/// Seeded random dice
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Dice {
    /// Create dice with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create dice with a random seed (recorded, see [`Dice::seed`])
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Roll one die
    pub fn roll_one(&mut self) -> u8 {
        Die::new().roll(&mut self.rng)
    }

    /// Roll `num_dice` independent dice (capped at 6)
    pub fn roll_multiple(&mut self, num_dice: usize) -> Roll {
        Roll::random(num_dice, &mut self.rng)
    }

    /// Seed these dice were created with (for replaying a game)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DiceSource for Dice {
    fn roll(&mut self, num_dice: usize) -> Roll {
        self.roll_multiple(num_dice)
    }
}

/// Dice that replay a fixed script of rolls.
///
/// Each call consumes one scripted roll. A scripted roll longer than the
/// requested count is cut to its first `num_dice` faces; a shorter one is
/// topped up from the fallback dice. Once the script runs out every roll
/// comes from the fallback.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    script: VecDeque<Roll>,
    fallback: Dice,
}

impl ScriptedDice {
    pub fn new(rolls: impl IntoIterator<Item = Roll>) -> Self {
        Self::with_fallback(rolls, Dice::default())
    }

    pub fn with_fallback(rolls: impl IntoIterator<Item = Roll>, fallback: Dice) -> Self {
        Self {
            script: rolls.into_iter().collect(),
            fallback,
        }
    }

    /// Number of scripted rolls not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self, num_dice: usize) -> Roll {
        match self.script.pop_front() {
            Some(scripted) if scripted.len() >= num_dice => scripted.prefix(num_dice),
            Some(mut scripted) => {
                scripted.append(&self.fallback.roll(num_dice - scripted.len()));
                scripted
            }
            None => self.fallback.roll(num_dice),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roll(faces: &[u8]) -> Roll {
        Roll::new(faces).unwrap()
    }

    #[test]
    fn test_dice_deterministic() {
        let mut d1 = Dice::new(12345);
        let mut d2 = Dice::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(d1.roll_multiple(6), d2.roll_multiple(6));
        }
    }

    #[test]
    fn test_dice_different_seeds() {
        let mut d1 = Dice::new(12345);
        let mut d2 = Dice::new(54321);

        let a: Vec<Roll> = (0..10).map(|_| d1.roll_multiple(6)).collect();
        let b: Vec<Roll> = (0..10).map(|_| d2.roll_multiple(6)).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_roll_one_in_range() {
        let mut dice = Dice::new(7);
        for _ in 0..1000 {
            let face = dice.roll_one();
            assert!((1..=6).contains(&face), "face out of range: {face}");
        }
    }

    #[test]
    fn test_roll_one_hits_every_face() {
        let mut dice = Dice::new(99);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[(dice.roll_one() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "missing a face: {seen:?}");
    }

    #[test]
    fn test_roll_multiple_lengths() {
        let mut dice = Dice::new(3);
        for n in 0..=6 {
            assert_eq!(dice.roll_multiple(n).len(), n);
        }
        assert_eq!(dice.roll_multiple(9).len(), 6);
    }

    #[test]
    fn test_die_remembers_value() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut die = Die::new();
        assert_eq!(die.value(), 0);

        let face = die.roll(&mut rng);
        assert_eq!(die.value(), face);
        assert_eq!(die.to_string(), format!("Die({face})"));
    }

    #[test]
    fn test_scripted_dice_replays_in_order() {
        let mut dice = ScriptedDice::new([roll(&[1, 1, 1, 2, 3, 4]), roll(&[5, 5])]);
        assert_eq!(dice.remaining(), 2);

        assert_eq!(dice.roll(6), roll(&[1, 1, 1, 2, 3, 4]));
        assert_eq!(dice.roll(2), roll(&[5, 5]));
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn test_scripted_dice_truncates_long_rolls() {
        let mut dice = ScriptedDice::new([roll(&[2, 3, 4, 6, 6, 6])]);
        assert_eq!(dice.roll(3), roll(&[2, 3, 4]));
    }

    #[test]
    fn test_scripted_dice_tops_up_short_rolls() {
        let mut dice = ScriptedDice::new([roll(&[1])]);
        let rolled = dice.roll(4);
        assert_eq!(rolled.len(), 4);
        assert_eq!(rolled.as_slice()[0], 1);
    }

    #[test]
    fn test_scripted_dice_falls_back_when_exhausted() {
        let mut dice = ScriptedDice::with_fallback(Vec::new(), Dice::new(5));
        let mut expected = Dice::new(5);
        assert_eq!(dice.roll(6), expected.roll_multiple(6));
    }
}
