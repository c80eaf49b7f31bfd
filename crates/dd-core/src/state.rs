//! Game state snapshots.

use serde::{Deserialize, Serialize};

use crate::dice::{DiceMask, Hand, MAX_ROLLS, REROLL_ALL};

/// Whose turn it is, or whether the match has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The human may roll, hold and bank.
    HumanTurn,
    /// The human has banked; the computer plays next.
    ComputerTurn,
    /// Sudden death: the human gets one roll, then the computer gets one.
    TieBreaker,
    /// Terminal state. No further transitions are accepted.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HumanTurn => write!(f, "human turn"),
            Self::ComputerTurn => write!(f, "computer turn"),
            Self::TieBreaker => write!(f, "tie-breaker"),
            Self::GameOver => write!(f, "game over"),
        }
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The player at the keyboard.
    Human,
    /// The heuristic opponent.
    Computer,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Computer => write!(f, "computer"),
        }
    }
}

/// A snapshot of one moment in the match.
///
/// Engine operations never modify a state in place; they return a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The human's five dice.
    pub human_dice: Hand,
    /// The computer's five dice.
    pub computer_dice: Hand,
    /// Human dice kept across the next reroll.
    pub held: DiceMask,
    /// Cumulative banked human total.
    pub human_score: u32,
    /// Cumulative banked computer total.
    pub computer_score: u32,
    /// Round counter, starting at 1.
    pub round: u32,
    /// Human rolls used in the current turn (0-3).
    pub rolls_taken: u8,
    /// Current phase.
    pub phase: Phase,
    /// Set once sudden death has begun; stays set until the match ends.
    pub tie_breaker_active: bool,
    /// The winner, once `phase` is [`Phase::GameOver`].
    pub winner: Option<Side>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A fresh match: neutral dice, zero scores, round 1, human to move.
    pub fn new() -> Self {
        Self {
            human_dice: Hand::NEUTRAL,
            computer_dice: Hand::NEUTRAL,
            held: REROLL_ALL,
            human_score: 0,
            computer_score: 0,
            round: 1,
            rolls_taken: 0,
            phase: Phase::HumanTurn,
            tie_breaker_active: false,
            winner: None,
        }
    }

    /// Whether the human may throw the dice now.
    pub fn can_roll(&self) -> bool {
        match self.phase {
            Phase::HumanTurn => self.rolls_taken < MAX_ROLLS,
            Phase::TieBreaker => self.rolls_taken == 0,
            Phase::ComputerTurn | Phase::GameOver => false,
        }
    }

    /// Whether the human may bank the current dice.
    pub fn can_bank(&self) -> bool {
        self.phase == Phase::HumanTurn && self.rolls_taken >= 1
    }

    /// Whether holding dice still affects a later roll.
    pub fn can_hold(&self) -> bool {
        self.phase == Phase::HumanTurn && (1..MAX_ROLLS).contains(&self.rolls_taken)
    }

    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Rolls the human has left this turn.
    pub fn rolls_remaining(&self) -> u8 {
        match self.phase {
            Phase::HumanTurn => MAX_ROLLS.saturating_sub(self.rolls_taken),
            Phase::TieBreaker => 1u8.saturating_sub(self.rolls_taken),
            Phase::ComputerTurn | Phase::GameOver => 0,
        }
    }

    /// Sum of the human's current dice.
    pub fn human_turn_total(&self) -> u32 {
        self.human_dice.total()
    }

    /// Sum of the computer's current dice.
    pub fn computer_turn_total(&self) -> u32 {
        self.computer_dice.total()
    }

    /// Score of the given side.
    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Human => self.human_score,
            Side::Computer => self.computer_score,
        }
    }
}
