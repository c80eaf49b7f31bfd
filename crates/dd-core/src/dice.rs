//! Five-die hands and rolling.
//!
//! A [`Hand`] always holds five six-sided dice with values in 1-6. Rolling
//! takes a keep-mask so the same call covers a fresh throw (keep nothing)
//! and a partial reroll (keep the held dice).

use std::ops::Index;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{DuelError, DuelResult};

/// Number of dice each side throws.
pub const DICE_COUNT: usize = 5;

/// Number of faces on each die.
pub const FACES: u8 = 6;

/// Rolls allowed per normal turn.
pub const MAX_ROLLS: u8 = 3;

/// A per-die keep or hold decision.
pub type DiceMask = [bool; DICE_COUNT];

/// Mask that keeps nothing, so every die is rerolled.
pub const REROLL_ALL: DiceMask = [false; DICE_COUNT];

/// Five dice values, each between 1 and 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[u8; DICE_COUNT]", into = "[u8; DICE_COUNT]")]
pub struct Hand([u8; DICE_COUNT]);

impl Hand {
    /// The reset value shown between turns: all ones.
    pub const NEUTRAL: Self = Self([1; DICE_COUNT]);

    /// Build a hand from explicit values, rejecting anything outside 1-6.
    pub fn new(values: [u8; DICE_COUNT]) -> DuelResult<Self> {
        if let Some(&bad) = values.iter().find(|v| !(1..=FACES).contains(*v)) {
            return Err(DuelError::InvalidDie(bad));
        }
        Ok(Self(values))
    }

    /// Throw all five dice.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        Self::NEUTRAL.reroll(&REROLL_ALL, rng)
    }

    /// Reroll every die whose mask entry is `false`, keeping the rest.
    pub fn reroll<R: Rng>(&self, keep: &DiceMask, rng: &mut R) -> Self {
        let mut values = self.0;
        for (value, kept) in values.iter_mut().zip(keep) {
            if !kept {
                *value = rng.random_range(1..=FACES);
            }
        }
        Self(values)
    }

    /// The raw die values.
    pub fn values(&self) -> [u8; DICE_COUNT] {
        self.0
    }

    /// Sum of all five dice.
    pub fn total(&self) -> u32 {
        self.0.iter().map(|&v| u32::from(v)).sum()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl Index<usize> for Hand {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl TryFrom<[u8; DICE_COUNT]> for Hand {
    type Error = DuelError;

    fn try_from(values: [u8; DICE_COUNT]) -> DuelResult<Self> {
        Self::new(values)
    }
}

impl From<Hand> for [u8; DICE_COUNT] {
    fn from(hand: Hand) -> Self {
        hand.0
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.0.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
