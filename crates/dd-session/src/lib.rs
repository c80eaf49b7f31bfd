//! Text-command game session for Duel Dice.
//!
//! Wraps a [`dd_core::RoundEngine`] with a seeded random source, a journal
//! of everything that happened and a running win tally across games. The
//! computer's turn is played as soon as the human banks.

pub mod config;
pub mod error;
pub mod journal;
pub mod session;
pub mod tally;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use journal::{Journal, JournalEntry};
pub use session::DuelSession;
pub use tally::Tally;
