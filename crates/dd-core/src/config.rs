//! Match configuration.

use serde::{Deserialize, Serialize};

use crate::error::{DuelError, DuelResult};

/// The target score used when none is given.
pub const DEFAULT_TARGET_SCORE: u32 = 101;

/// Configuration accepted at match start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Cumulative score a side must reach to win.
    pub target_score: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl MatchConfig {
    /// Set the target score.
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// Reject configurations under which a match cannot be played out.
    pub fn validate(&self) -> DuelResult<()> {
        if self.target_score == 0 {
            return Err(DuelError::InvalidTargetScore(self.target_score));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = MatchConfig::default();
        assert_eq!(cfg.target_score, 101);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_sets_target() {
        let cfg = MatchConfig::default().with_target_score(50);
        assert_eq!(cfg.target_score, 50);
    }

    #[test]
    fn zero_target_rejected() {
        let cfg = MatchConfig::default().with_target_score(0);
        assert_eq!(cfg.validate(), Err(DuelError::InvalidTargetScore(0)));
    }
}
