//! Configuration for a game session.

use dd_core::MatchConfig;
use dd_core::config::DEFAULT_TARGET_SCORE;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible dice.
    pub seed: u64,
    /// Score needed to win each game.
    pub target_score: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            target_score: DEFAULT_TARGET_SCORE,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the target score.
    pub fn with_target_score(mut self, target_score: u32) -> Self {
        self.target_score = target_score;
        self
    }

    /// The engine configuration for each game in this session.
    pub fn match_config(&self) -> MatchConfig {
        MatchConfig::default().with_target_score(self.target_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = SessionConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.target_score, 101);
    }

    #[test]
    fn builder_methods() {
        let cfg = SessionConfig::default().with_seed(123).with_target_score(60);
        assert_eq!(cfg.seed, 123);
        assert_eq!(cfg.target_score, 60);
        assert_eq!(cfg.match_config().target_score, 60);
    }
}
