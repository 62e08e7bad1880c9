//! Scoring module - Zonk combination scoring
//!
//! Scoring is one greedy pass over the roll, not a search over every way to
//! partition the dice:
//! - A straight (`1-2-3-4-5-6`) or three pairs takes all six dice.
//! - Otherwise each face is scored on its own: a triple first, then any
//!   leftover 1s and 5s singly. Leftovers of other faces are not used.
//!
//! Dice missing from [`ScoreResult::used`] are the non-scoring dice.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{
    FaceCounts, Roll, DICE_PER_TURN, SINGLE_FIVE_SCORE, SINGLE_ONE_SCORE, STRAIGHT_SCORE,
    THREE_PAIRS_SCORE, TRIPLE_FACE_MULTIPLIER, TRIPLE_ONES_SCORE,
};

/// Points for a roll and the dice that earned them
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ScoreResult {
    pub points: u32,
    /// Sorted sub-multiset of the roll.
    pub used: Roll,
}

impl ScoreResult {
    fn all_dice(points: u32, roll: &Roll) -> Self {
        Self {
            points,
            used: roll.sorted(),
        }
    }
}

/// Whether the roll is exactly one of each face
pub fn is_straight(roll: &Roll) -> bool {
    roll.len() == DICE_PER_TURN && roll.face_counts().iter().all(|&c| c == 1)
}

/// Whether the roll is six dice forming three distinct pairs
pub fn is_three_pairs(roll: &Roll) -> bool {
    roll.len() == DICE_PER_TURN && roll.face_counts().iter().filter(|&&c| c == 2).count() == 3
}

/// Points for three dice of `face`
pub fn triple_score(face: u8) -> u32 {
    if face == 1 {
        TRIPLE_ONES_SCORE
    } else {
        face as u32 * TRIPLE_FACE_MULTIPLIER
    }
}

/// Points for one die of `face` outside a triple (only 1s and 5s score)
pub fn single_score(face: u8) -> u32 {
    match face {
        1 => SINGLE_ONE_SCORE,
        5 => SINGLE_FIVE_SCORE,
        _ => 0,
    }
}

/// Best combination under the greedy rules
pub fn find_best_scoring_combination(roll: &Roll) -> ScoreResult {
    if roll.is_empty() {
        return ScoreResult::default();
    }
    if is_straight(roll) {
        return ScoreResult::all_dice(STRAIGHT_SCORE, roll);
    }
    if is_three_pairs(roll) {
        return ScoreResult::all_dice(THREE_PAIRS_SCORE, roll);
    }

    let counts = roll.face_counts();
    let mut used: FaceCounts = [0; 6];
    let mut points = 0u32;

    for (i, &count) in counts.iter().enumerate() {
        let face = i as u8 + 1;
        let single = single_score(face);

        if count >= 3 {
            points += triple_score(face);
            used[i] = 3;
            if single > 0 {
                let leftover = count - 3;
                points += leftover as u32 * single;
                used[i] += leftover;
            }
        } else if single > 0 {
            points += count as u32 * single;
            used[i] = count;
        }
    }

    ScoreResult {
        points,
        used: roll.take_counts(&used),
    }
}

/// Total points for a roll
pub fn calculate_score(roll: &Roll) -> u32 {
    if roll.is_empty() {
        return 0;
    }
    if is_straight(roll) {
        return STRAIGHT_SCORE;
    }
    find_best_scoring_combination(roll).points
}

/// Whether a non-empty roll scores nothing.
///
/// The empty roll is not a zonk: it scores 0 but there were no dice to lose
/// on. It never comes up in play because hot dice refill to six first.
pub fn is_zonk(roll: &Roll) -> bool {
    !roll.is_empty() && find_best_scoring_combination(roll).points == 0
}

/// The dice that contribute to the best combination
pub fn get_scoring_dice(roll: &Roll) -> Roll {
    find_best_scoring_combination(roll).used
}

/// Scoring readings of a roll.
///
/// - A straight is the only option when present.
/// - Three pairs, when present, comes first.
/// - The greedy best combination follows if it scores.
///
/// A roll that scores nothing yields a single `(0, [])` option.
pub fn get_possible_scoring_options(roll: &Roll) -> ArrayVec<ScoreResult, 2> {
    let mut options = ArrayVec::new();

    if roll.is_empty() {
        options.push(ScoreResult::default());
        return options;
    }

    if is_straight(roll) {
        options.push(ScoreResult::all_dice(STRAIGHT_SCORE, roll));
        return options;
    }

    if is_three_pairs(roll) {
        options.push(ScoreResult::all_dice(THREE_PAIRS_SCORE, roll));
    }

    let best = find_best_scoring_combination(roll);
    if best.points > 0 {
        options.push(best);
    }

    if options.is_empty() {
        options.push(ScoreResult::default());
    }
    options
}
