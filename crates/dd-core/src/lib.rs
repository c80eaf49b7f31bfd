//! Turn and round state machine for Duel Dice.
//!
//! A human and a computer take turns rolling five dice up to three times,
//! holding dice between rolls, and banking the final sum. The first side to
//! reach the target score wins; equal totals at the target go to a
//! sudden-death tie-breaker.
//!
//! Every operation is a pure transition over an immutable [`GameState`].
//! The caller owns the current state and the random source.

pub mod autopilot;
pub mod config;
pub mod dice;
pub mod engine;
pub mod error;
pub mod policy;
pub mod state;

pub use config::MatchConfig;
pub use dice::{DICE_COUNT, FACES, Hand, MAX_ROLLS};
pub use engine::{ComputerRoll, ComputerTurn, MatchOutcome, RoundEngine, Transition};
pub use error::{DuelError, DuelResult};
pub use state::{GameState, Phase, Side};
