//! Win tally across the games of a session.

use dd_core::Side;
use serde::{Deserialize, Serialize};

/// Games won by each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Games won by the human.
    pub human_wins: u32,
    /// Games won by the computer.
    pub computer_wins: u32,
}

impl Tally {
    /// Count a win for `side`.
    pub fn record(&mut self, side: Side) {
        match side {
            Side::Human => self.human_wins += 1,
            Side::Computer => self.computer_wins += 1,
        }
    }

    /// Games finished so far.
    pub fn games(&self) -> u32 {
        self.human_wins + self.computer_wins
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P:{}/C:{}", self.human_wins, self.computer_wins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins() {
        let mut t = Tally::default();
        t.record(Side::Human);
        t.record(Side::Computer);
        t.record(Side::Human);
        assert_eq!(t.human_wins, 2);
        assert_eq!(t.computer_wins, 1);
        assert_eq!(t.games(), 3);
        assert_eq!(t.to_string(), "P:2/C:1");
    }
}
