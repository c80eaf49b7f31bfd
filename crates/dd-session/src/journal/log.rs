//! Journal storage and export.

use serde::{Deserialize, Serialize};
use tracing::trace;

use super::entry::JournalEntry;
use crate::error::SessionResult;

/// Everything that happened in a session, game by game.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Record an event at the end of the journal.
    pub fn record(&mut self, entry: JournalEntry) {
        trace!(?entry, "journal");
        self.entries.push(entry);
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of games started in the session.
    pub fn games(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, JournalEntry::NewGame { .. }))
            .count()
    }

    /// Entries of the most recent game, starting with its `NewGame` entry.
    pub fn current_game(&self) -> &[JournalEntry] {
        let start = self
            .entries
            .iter()
            .rposition(|e| matches!(e, JournalEntry::NewGame { .. }))
            .unwrap_or(0);
        &self.entries[start..]
    }

    /// Export the journal as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Duel Dice Journal\n\n");
        for entry in &self.entries {
            match entry {
                JournalEntry::NewGame {
                    game, target_score, ..
                } => {
                    out.push_str(&format!("## Game {game}\n\n"));
                    out.push_str(&format!("Target: {target_score}\n\n"));
                }
                JournalEntry::HumanRoll {
                    round, roll, dice, ..
                } => {
                    out.push_str(&format!(
                        "- Round {round}, you rolled {} (roll {roll})\n",
                        join_values(dice)
                    ));
                }
                JournalEntry::HoldToggled { die, held, .. } => {
                    let verb = if *held { "held" } else { "released" };
                    out.push_str(&format!("- You {verb} die {die}\n"));
                }
                JournalEntry::ComputerRoll {
                    round, roll, dice, ..
                } => {
                    out.push_str(&format!(
                        "- Round {round}, computer rolled {} (roll {roll})\n",
                        join_values(dice)
                    ));
                }
                JournalEntry::Banked {
                    side,
                    points,
                    total,
                    ..
                } => {
                    out.push_str(&format!(
                        "- **{side}** banked {points} (total {total})\n"
                    ));
                }
                JournalEntry::RoundAdvanced {
                    round,
                    human_score,
                    computer_score,
                    ..
                } => {
                    out.push_str(&format!(
                        "\n### Round {round} ({human_score} to {computer_score})\n\n"
                    ));
                }
                JournalEntry::TieBreaker { iteration, .. } => {
                    out.push_str(&format!("\n### Tie-breaker {iteration}\n\n"));
                }
                JournalEntry::MatchEnded {
                    winner,
                    reason,
                    human_score,
                    computer_score,
                    ..
                } => {
                    out.push_str(&format!(
                        "\n**{winner} wins**: {reason} (final {human_score} to {computer_score})\n\n"
                    ));
                }
            }
        }
        out
    }

    /// Export the journal as pretty-printed JSON.
    pub fn export_json(&self) -> SessionResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

fn join_values(dice: &[u8]) -> String {
    let values: Vec<String> = dice.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}
