//! Journal entry types.

use chrono::{DateTime, Utc};
use dd_core::{DICE_COUNT, Side};
use serde::{Deserialize, Serialize};

/// A single entry in the game journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum JournalEntry {
    /// A new game was started.
    NewGame {
        /// Game number within the session (1-based).
        game: u32,
        /// Score needed to win.
        target_score: u32,
        /// When the game started.
        timestamp: DateTime<Utc>,
    },
    /// The human threw the dice.
    HumanRoll {
        /// Round number.
        round: u32,
        /// Roll number within the turn.
        roll: u8,
        /// Die values after the roll.
        dice: [u8; DICE_COUNT],
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// The human held or released a die.
    HoldToggled {
        /// Die position (1-based).
        die: usize,
        /// Whether the die is now held.
        held: bool,
        /// When toggled.
        timestamp: DateTime<Utc>,
    },
    /// The computer threw its dice.
    ComputerRoll {
        /// Round number.
        round: u32,
        /// Roll number within the turn.
        roll: u8,
        /// Die values after the roll.
        dice: [u8; DICE_COUNT],
        /// Which dice were kept from the previous roll.
        kept: [bool; DICE_COUNT],
        /// When rolled.
        timestamp: DateTime<Utc>,
    },
    /// A side banked its dice.
    Banked {
        /// Who banked.
        side: Side,
        /// Round number.
        round: u32,
        /// Points added this turn.
        points: u32,
        /// Cumulative score afterwards.
        total: u32,
        /// When banked.
        timestamp: DateTime<Utc>,
    },
    /// Neither side reached the target; a new round began.
    RoundAdvanced {
        /// The new round number.
        round: u32,
        /// Human score going into the round.
        human_score: u32,
        /// Computer score going into the round.
        computer_score: u32,
        /// When the round began.
        timestamp: DateTime<Utc>,
    },
    /// A sudden-death roll-off began (or was drawn and restarted).
    TieBreaker {
        /// Roll-off number within the game (1-based).
        iteration: u32,
        /// Human score at the time.
        human_score: u32,
        /// Computer score at the time.
        computer_score: u32,
        /// When it began.
        timestamp: DateTime<Utc>,
    },
    /// The game ended.
    MatchEnded {
        /// The winner.
        winner: Side,
        /// Why the game ended.
        reason: String,
        /// Final human score.
        human_score: u32,
        /// Final computer score.
        computer_score: u32,
        /// When the game ended.
        timestamp: DateTime<Utc>,
    },
}
