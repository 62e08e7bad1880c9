//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! Everything here is plain data: a validated dice roll, the scoring table,
//! strategy threshold defaults and the strategy names.
//!
//! # Scoring Table
//!
//! | Combination | Points |
//! |-------------|--------|
//! | Straight `1-2-3-4-5-6` | 1500 |
//! | Three pairs (six dice) | 750 |
//! | Three 1s | 1000 |
//! | Three of face `v` (v != 1) | `v * 100` |
//! | Single 1 (outside a triple, or beyond one) | 100 |
//! | Single 5 (outside a triple, or beyond one) | 50 |
//!
//! Faces 2, 3, 4 and 6 only score as part of a triple.
//!
//! # Strategy Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `CONSERVATIVE_BANK_AT` | 350 | Conservative banks at this round score |
//! | `CONSERVATIVE_MIN_DICE` | 2 | Conservative banks with this many dice or fewer |
//! | `AGGRESSIVE_BANK_AT` | 600 | Aggressive banks at this round score |
//! | `AGGRESSIVE_KEEP_MAX` | 3 | Aggressive keeps at most this many scoring dice |
//! | `BALANCED_BANK_AT` | 450 | Balanced banks at this round score |
//! | `BALANCED_CAUTIOUS_BELOW` | 300 | Balanced's threshold on one die or in the endgame |
//! | `BALANCED_ENDGAME_TOTAL` | 8000 | Total score at which Balanced plays cautiously |
//!
//! # Examples
//!
//! ```
//! use zonk_types::{Roll, StrategyKind, DICE_PER_TURN};
//!
//! let roll = Roll::new(&[5, 1, 3]).unwrap();
//! assert_eq!(roll.len(), 3);
//! assert_eq!(roll.sorted().as_slice(), &[1, 3, 5]);
//!
//! // Faces outside 1..=6 are rejected
//! assert!(Roll::new(&[0]).is_err());
//! assert!(Roll::new(&[7]).is_err());
//!
//! assert_eq!(StrategyKind::from_str("Balanced"), Some(StrategyKind::Balanced));
//! assert_eq!(DICE_PER_TURN, 6);
//! ```

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of dice a turn starts with (and is refilled to on hot dice)
pub const DICE_PER_TURN: usize = 6;

/// Lowest die face
pub const MIN_FACE: u8 = 1;

/// Highest die face
pub const MAX_FACE: u8 = 6;

/// Points for the straight `1-2-3-4-5-6`
pub const STRAIGHT_SCORE: u32 = 1500;

/// Points for six dice forming three distinct pairs
pub const THREE_PAIRS_SCORE: u32 = 750;

/// Points for a triple of 1s
pub const TRIPLE_ONES_SCORE: u32 = 1000;

/// Multiplier applied to the face of any other triple
pub const TRIPLE_FACE_MULTIPLIER: u32 = 100;

/// Points for a single 1
pub const SINGLE_ONE_SCORE: u32 = 100;

/// Points for a single 5
pub const SINGLE_FIVE_SCORE: u32 = 50;

/// Target score used when a game does not specify one
pub const DEFAULT_TARGET_SCORE: u32 = 10_000;

pub const CONSERVATIVE_BANK_AT: u32 = 350;
pub const CONSERVATIVE_MIN_DICE: usize = 2;

pub const AGGRESSIVE_BANK_AT: u32 = 600;
pub const AGGRESSIVE_KEEP_MAX: usize = 3;

pub const BALANCED_BANK_AT: u32 = 450;
pub const BALANCED_CAUTIOUS_BELOW: u32 = 300;
pub const BALANCED_ENDGAME_TOTAL: u32 = 8000;

/// Per-face dice counts, indexed by `face - 1`
pub type FaceCounts = [u8; MAX_FACE as usize];

/// Invalid dice input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    #[error("die face {face} is outside 1..=6")]
    FaceOutOfRange { face: u8 },
    #[error("a roll holds at most 6 dice, got {len}")]
    TooManyDice { len: usize },
}

/// A roll of zero to six dice.
///
/// Every face is in `1..=6`; the checks run when the roll is built, so the
/// scoring functions never see malformed input. Storage is inline and the
/// order of the dice is preserved as rolled.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Roll {
    dice: ArrayVec<u8, DICE_PER_TURN>,
}

impl Roll {
    /// Build a roll from die faces, validating every face and the length
    ///
    /// # Examples
    ///
    /// ```
    /// use zonk_types::{Roll, RollError};
    ///
    /// assert!(Roll::new(&[1, 2, 3, 4, 5, 6]).is_ok());
    /// assert_eq!(
    ///     Roll::new(&[1, 1, 1, 1, 1, 1, 1]),
    ///     Err(RollError::TooManyDice { len: 7 })
    /// );
    /// ```
    pub fn new(faces: &[u8]) -> Result<Self, RollError> {
        if faces.len() > DICE_PER_TURN {
            return Err(RollError::TooManyDice { len: faces.len() });
        }
        let mut dice = ArrayVec::new();
        for &face in faces {
            if !(MIN_FACE..=MAX_FACE).contains(&face) {
                return Err(RollError::FaceOutOfRange { face });
            }
            dice.push(face);
        }
        Ok(Self { dice })
    }

    /// The empty roll
    pub fn empty() -> Self {
        Self::default()
    }

    /// Roll `min(count, 6)` fair dice from `rng`
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let mut dice = ArrayVec::new();
        for _ in 0..count.min(DICE_PER_TURN) {
            dice.push(rng.gen_range(MIN_FACE..=MAX_FACE));
        }
        Self { dice }
    }

    /// Append the dice of `other`, dropping any beyond six
    pub fn append(&mut self, other: &Roll) {
        let room = DICE_PER_TURN - self.dice.len();
        self.dice.extend(other.iter().take(room));
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.dice
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.dice.iter().copied()
    }

    /// Copy of this roll in ascending face order
    pub fn sorted(&self) -> Self {
        let mut dice = self.dice.clone();
        dice.sort_unstable();
        Self { dice }
    }

    /// Count of each face, indexed by `face - 1`
    pub fn face_counts(&self) -> FaceCounts {
        let mut counts = [0u8; MAX_FACE as usize];
        for &face in &self.dice {
            counts[(face - 1) as usize] += 1;
        }
        counts
    }

    /// Sorted sub-roll holding up to `wanted[face - 1]` dice of each face.
    ///
    /// Never yields more dice of a face than this roll holds.
    pub fn take_counts(&self, wanted: &FaceCounts) -> Self {
        let have = self.face_counts();
        let mut dice = ArrayVec::new();
        for (i, (&h, &w)) in have.iter().zip(wanted.iter()).enumerate() {
            for _ in 0..h.min(w) {
                dice.push(i as u8 + MIN_FACE);
            }
        }
        Self { dice }
    }

    /// First `n` dice in current order (all of them if `n >= len`)
    pub fn prefix(&self, n: usize) -> Self {
        let mut dice = self.dice.clone();
        dice.truncate(n);
        Self { dice }
    }

    /// Whether `other` is a sub-multiset of this roll
    pub fn contains_all(&self, other: &Roll) -> bool {
        let have = self.face_counts();
        let need = other.face_counts();
        have.iter().zip(need.iter()).all(|(h, n)| n <= h)
    }
}

impl TryFrom<Vec<u8>> for Roll {
    type Error = RollError;

    fn try_from(value: Vec<u8>) -> Result<Self, Self::Error> {
        Roll::new(&value)
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, face) in self.dice.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{face}")?;
        }
        f.write_str("]")
    }
}

// Serialized as a plain array of faces.
impl Serialize for Roll {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;

        let mut seq = serializer.serialize_seq(Some(self.dice.len()))?;
        for face in &self.dice {
            seq.serialize_element(face)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Roll {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let faces = Vec::<u8>::deserialize(deserializer)?;
        Roll::try_from(faces).map_err(serde::de::Error::custom)
    }
}

/// The three bot strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Banks early, keeps every scoring die
    Conservative,
    /// Banks late, keeps few dice to reroll more
    Aggressive,
    /// In between, and cautious near the end of the game
    Balanced,
}

impl StrategyKind {
    /// Parse strategy kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use zonk_types::StrategyKind;
    ///
    /// assert_eq!(StrategyKind::from_str("conservative"), Some(StrategyKind::Conservative));
    /// assert_eq!(StrategyKind::from_str("AGGRESSIVE"), Some(StrategyKind::Aggressive));
    /// assert_eq!(StrategyKind::from_str("reckless"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "conservative" => Some(StrategyKind::Conservative),
            "aggressive" => Some(StrategyKind::Aggressive),
            "balanced" => Some(StrategyKind::Balanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Conservative => "conservative",
            StrategyKind::Aggressive => "aggressive",
            StrategyKind::Balanced => "balanced",
        }
    }

    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Conservative,
        StrategyKind::Aggressive,
        StrategyKind::Balanced,
    ];
}
