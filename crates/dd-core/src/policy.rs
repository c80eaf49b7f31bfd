//! The computer player's decision heuristic.
//!
//! The policy reads its risk posture from the score differential alone:
//! - **Reroll or stand**: stand on 25 or more, otherwise compare the sum
//!   against a threshold that rises as the player pulls ahead.
//! - **Keep-mask**: always keep fives and sixes, keep fours and threes when
//!   comfortably ahead (fours also near the target), and flip a coin on
//!   threes and fours when far behind.
//!
//! Scores are passed from the deciding player's point of view, so the same
//! functions drive the computer and the autopilot's human seat.

use rand::Rng;

use crate::dice::{DICE_COUNT, DiceMask, Hand};

/// A hand summing to at least this is never rerolled.
pub const STRONG_HAND: u32 = 25;

/// Score lead (or deficit) beyond which the keep-mask shifts posture.
pub const SIGNIFICANT_LEAD: i64 = 10;

/// Distance from the target at which fours become worth keeping.
pub const CLOSING_DISTANCE: i64 = 30;

/// The sum below which a hand is rerolled, given `own - opponent`.
pub fn reroll_threshold(score_diff: i64) -> u32 {
    match score_diff {
        d if d < -20 => 15,
        d if d < 0 => 18,
        d if d > 20 => 22,
        _ => 20,
    }
}

/// Whether the current hand should be rerolled at all.
pub fn should_reroll(hand: &Hand, own_score: u32, opponent_score: u32) -> bool {
    let sum = hand.total();
    if sum >= STRONG_HAND {
        return false;
    }
    sum < reroll_threshold(score_diff(own_score, opponent_score))
}

/// How the deciding player stands relative to the opponent and the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posture {
    /// Leading by more than [`SIGNIFICANT_LEAD`].
    pub ahead: bool,
    /// Trailing by more than [`SIGNIFICANT_LEAD`].
    pub behind: bool,
    /// Within [`CLOSING_DISTANCE`] of the target.
    pub close_to_target: bool,
}

impl Posture {
    /// Assess the posture from cumulative scores.
    pub fn assess(own_score: u32, opponent_score: u32, target_score: u32) -> Self {
        let diff = score_diff(own_score, opponent_score);
        Self {
            ahead: diff > SIGNIFICANT_LEAD,
            behind: diff < -SIGNIFICANT_LEAD,
            close_to_target: i64::from(own_score) >= i64::from(target_score) - CLOSING_DISTANCE,
        }
    }

    /// Decide whether to keep one die. The first matching rule wins.
    pub fn keeps<R: Rng>(&self, value: u8, rng: &mut R) -> bool {
        match value {
            v if v >= 5 => true,
            4 if self.ahead || self.close_to_target => true,
            3 if self.ahead => true,
            v if v >= 3 && self.behind => rng.random_bool(0.5),
            _ => false,
        }
    }
}

/// Decide, die by die, which values to keep on the next reroll.
///
/// Random draws happen only for dice that reach the coin-flip rule, left to
/// right, so a seeded `rng` reproduces the same mask.
pub fn keep_mask<R: Rng>(
    hand: &Hand,
    own_score: u32,
    opponent_score: u32,
    target_score: u32,
    rng: &mut R,
) -> DiceMask {
    let posture = Posture::assess(own_score, opponent_score, target_score);
    let mut mask = [false; DICE_COUNT];
    for (i, keep) in mask.iter_mut().enumerate() {
        *keep = posture.keeps(hand[i], rng);
    }
    mask
}

fn score_diff(own_score: u32, opponent_score: u32) -> i64 {
    i64::from(own_score) - i64::from(opponent_score)
}
