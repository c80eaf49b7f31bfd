pub mod play;
pub mod rules;
pub mod simulate;

use dd_core::{MatchConfig, RoundEngine};

/// Build an engine for the given target, reporting bad configuration.
fn build_engine(target: u32) -> Result<RoundEngine, String> {
    RoundEngine::new(MatchConfig::default().with_target_score(target)).map_err(|e| e.to_string())
}
