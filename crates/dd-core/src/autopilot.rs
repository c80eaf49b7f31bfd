//! Hands-off play for the human seat.
//!
//! The autopilot plays the human side with the same heuristic the computer
//! uses, seen from the human's point of view. It is used for simulations and
//! for smoke-testing whole matches.

use rand::Rng;

use crate::engine::{MatchOutcome, RoundEngine};
use crate::policy;
use crate::state::GameState;

/// Play one human turn: roll, then keep rerolling the dice the policy would
/// not keep until it stands or the rolls run out.
///
/// In sudden death this is the single roll. Outside the human's turn the
/// state is returned unchanged.
pub fn play_human_turn<R: Rng>(engine: &RoundEngine, state: &GameState, rng: &mut R) -> GameState {
    let mut state = engine.roll(state, rng);
    while state.can_hold() {
        let (own, opponent) = (state.human_score, state.computer_score);
        if !policy::should_reroll(&state.human_dice, own, opponent) {
            return engine.bank_score(&state);
        }
        let keep = policy::keep_mask(&state.human_dice, own, opponent, engine.target_score(), rng);
        for (index, _) in keep.iter().enumerate().filter(|(_, kept)| **kept) {
            state = engine.toggle_hold(&state, index);
        }
        state = engine.roll(&state, rng);
    }
    state
}

/// Play a whole match from the opening state with the autopilot in the human
/// seat.
pub fn play_match<R: Rng>(engine: &RoundEngine, rng: &mut R) -> (GameState, MatchOutcome) {
    let mut state = engine.new_game();
    loop {
        state = play_human_turn(engine, &state, rng);
        let transition = engine.computer_play(&state, rng);
        state = transition.state;
        if let Some(outcome) = transition.outcome {
            return (state, outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatchConfig;
    use crate::state::Phase;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn engine(target: u32) -> RoundEngine {
        RoundEngine::new(MatchConfig::default().with_target_score(target)).unwrap()
    }

    #[test]
    fn human_turn_always_hands_over() {
        let e = engine(101);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let s = play_human_turn(&e, &e.new_game(), &mut rng);
            assert_eq!(s.phase, Phase::ComputerTurn);
            assert!((1..=3).contains(&s.rolls_taken));
            assert_eq!(s.human_score, s.human_dice.total());
        }
    }

    #[test]
    fn human_turn_outside_phase_is_no_op() {
        let e = engine(101);
        let mut rng = StdRng::seed_from_u64(0);
        let s = GameState {
            phase: Phase::ComputerTurn,
            ..GameState::new()
        };
        assert_eq!(play_human_turn(&e, &s, &mut rng), s);
    }

    #[test]
    fn tie_breaker_turn_is_single_roll() {
        let e = engine(101);
        let mut rng = StdRng::seed_from_u64(4);
        let s = GameState {
            phase: Phase::TieBreaker,
            tie_breaker_active: true,
            human_score: 101,
            computer_score: 101,
            ..GameState::new()
        };
        let s = play_human_turn(&e, &s, &mut rng);
        assert_eq!(s.rolls_taken, 1);
        assert_eq!(s.phase, Phase::ComputerTurn);
    }

    #[test]
    fn matches_finish_with_a_winner() {
        let e = engine(101);
        for seed in 0..25 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (state, outcome) = play_match(&e, &mut rng);
            assert!(state.is_over());
            assert_eq!(state.winner, Some(outcome.winner));
            assert!(state.round <= 21);
        }
    }

    #[test]
    fn same_seed_same_match() {
        let e = engine(60);
        let mut rng1 = StdRng::seed_from_u64(31);
        let mut rng2 = StdRng::seed_from_u64(31);
        assert_eq!(play_match(&e, &mut rng1), play_match(&e, &mut rng2));
    }

    #[test]
    fn tiny_target_ends_in_first_round() {
        let e = engine(1);
        let mut rng = StdRng::seed_from_u64(8);
        let (state, _) = play_match(&e, &mut rng);
        assert_eq!(state.round, 1);
    }
}
