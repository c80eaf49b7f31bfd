//! Journal of game events.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;
