//! Round engine: every legal transition of a match.
//!
//! The engine holds only the match configuration. Each operation takes the
//! current [`GameState`] (plus a random source where dice are thrown) and
//! returns the next one. Operations that are illegal in the current phase
//! return the state unchanged.
//!
//! The computer's turn can be played in one call ([`RoundEngine::computer_play`])
//! or step by step through a [`ComputerTurn`], which yields a snapshot after
//! every roll so a frontend can pace its animation.

use std::cmp::Ordering;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::MatchConfig;
use crate::dice::{DICE_COUNT, DiceMask, Hand, MAX_ROLLS, REROLL_ALL};
use crate::error::DuelResult;
use crate::policy;
use crate::state::{GameState, Phase, Side};

/// How and why a match ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The side that won.
    pub winner: Side,
    /// Human-readable explanation, e.g. "reached 104 to 97".
    pub reason: String,
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wins: {}", self.winner, self.reason)
    }
}

/// The result of resolving a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// The next state.
    pub state: GameState,
    /// Set exactly when `state` is the terminal [`Phase::GameOver`] state.
    pub outcome: Option<MatchOutcome>,
}

impl Transition {
    fn ongoing(state: GameState) -> Self {
        Self {
            state,
            outcome: None,
        }
    }
}

/// Pure state transitions for one match configuration.
#[derive(Debug, Clone)]
pub struct RoundEngine {
    config: MatchConfig,
}

impl RoundEngine {
    /// Create an engine, rejecting an invalid configuration.
    pub fn new(config: MatchConfig) -> DuelResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Score needed to win.
    pub fn target_score(&self) -> u32 {
        self.config.target_score
    }

    /// The opening state of a match.
    pub fn new_game(&self) -> GameState {
        GameState::new()
    }

    /// Throw the human's dice.
    ///
    /// The first roll of a turn and the tie-breaker roll throw all five dice;
    /// later rolls keep the held dice. Holds are cleared afterwards. The turn
    /// ends automatically (and the dice are banked) after the third roll or
    /// after the single tie-breaker roll.
    pub fn roll<R: Rng>(&self, state: &GameState, rng: &mut R) -> GameState {
        if !state.can_roll() {
            debug!(phase = %state.phase, rolls = state.rolls_taken, "roll rejected");
            return state.clone();
        }

        let sudden_death = state.phase == Phase::TieBreaker;
        let keep = if state.rolls_taken == 0 || sudden_death {
            REROLL_ALL
        } else {
            state.held
        };

        let mut next = state.clone();
        next.human_dice = state.human_dice.reroll(&keep, rng);
        next.rolls_taken += 1;
        next.held = REROLL_ALL;
        debug!(dice = %next.human_dice, roll = next.rolls_taken, "human rolled");

        if sudden_death || next.rolls_taken >= MAX_ROLLS {
            end_human_turn(next)
        } else {
            next
        }
    }

    /// Flip the hold flag on one of the human's dice.
    pub fn toggle_hold(&self, state: &GameState, index: usize) -> GameState {
        if !state.can_hold() || index >= DICE_COUNT {
            debug!(phase = %state.phase, index, "hold rejected");
            return state.clone();
        }
        let mut next = state.clone();
        next.held[index] = !next.held[index];
        next
    }

    /// Bank the human's current dice and hand the turn to the computer.
    pub fn bank_score(&self, state: &GameState) -> GameState {
        if !state.can_bank() {
            debug!(phase = %state.phase, rolls = state.rolls_taken, "bank rejected");
            return state.clone();
        }
        end_human_turn(state.clone())
    }

    /// Start a staged computer turn, or `None` if it is not the computer's turn.
    pub fn begin_computer_turn(&self, state: &GameState) -> Option<ComputerTurn> {
        if state.phase != Phase::ComputerTurn {
            debug!(phase = %state.phase, "computer turn rejected");
            return None;
        }
        let mut start = state.clone();
        start.computer_dice = Hand::NEUTRAL;
        Some(ComputerTurn {
            engine: self.clone(),
            state: start,
            rolls: 0,
            standing: false,
        })
    }

    /// Play the computer's whole turn and resolve the round.
    pub fn computer_play<R: Rng>(&self, state: &GameState, rng: &mut R) -> Transition {
        match self.begin_computer_turn(state) {
            Some(turn) => turn.finish(rng),
            None => Transition::ongoing(state.clone()),
        }
    }

    /// Decide the round once both sides have banked.
    ///
    /// `state` must already carry the updated cumulative scores. In sudden
    /// death only the two turn scores are compared. Outside the computer's
    /// turn the state is returned unchanged.
    pub fn resolve_round(
        &self,
        state: &GameState,
        human_turn: u32,
        computer_turn: u32,
    ) -> Transition {
        if state.phase != Phase::ComputerTurn {
            debug!(phase = %state.phase, "resolve rejected");
            return Transition::ongoing(state.clone());
        }

        if state.tie_breaker_active {
            return match human_turn.cmp(&computer_turn) {
                Ordering::Greater => finish_match(
                    state,
                    Side::Human,
                    format!("won the tie-breaker {human_turn} to {computer_turn}"),
                ),
                Ordering::Less => finish_match(
                    state,
                    Side::Computer,
                    format!("won the tie-breaker {computer_turn} to {human_turn}"),
                ),
                Ordering::Equal => {
                    debug!(score = human_turn, "tie-breaker drawn, rolling again");
                    Transition::ongoing(start_tie_breaker(state))
                }
            };
        }

        let target = self.config.target_score;
        let (human, computer) = (state.human_score, state.computer_score);
        match (human >= target, computer >= target) {
            (true, true) => match human.cmp(&computer) {
                Ordering::Greater => finish_match(
                    state,
                    Side::Human,
                    format!("both reached {target}, human ahead {human} to {computer}"),
                ),
                Ordering::Less => finish_match(
                    state,
                    Side::Computer,
                    format!("both reached {target}, computer ahead {computer} to {human}"),
                ),
                Ordering::Equal => {
                    info!(score = human, "scores level at target, entering tie-breaker");
                    Transition::ongoing(start_tie_breaker(state))
                }
            },
            (true, false) => finish_match(
                state,
                Side::Human,
                format!("reached {human} to {computer}"),
            ),
            (false, true) => finish_match(
                state,
                Side::Computer,
                format!("reached {computer} to {human}"),
            ),
            (false, false) => {
                let mut next = reset_dice(state);
                next.round += 1;
                next.phase = Phase::HumanTurn;
                debug!(round = next.round, human, computer, "next round");
                Transition::ongoing(next)
            }
        }
    }
}

/// One snapshot from a staged computer turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerRoll {
    /// State right after this roll (scores not yet updated).
    pub state: GameState,
    /// Which roll of the turn this was (1-3).
    pub roll: u8,
    /// Dice kept from the previous roll; all `false` on the first roll.
    pub kept: DiceMask,
}

/// A computer turn in progress.
///
/// Call [`ComputerTurn::next_roll`] until it returns `None`, then
/// [`ComputerTurn::finish`] to bank and resolve the round. Cloning a turn
/// lets a frontend replay it from any point.
#[derive(Debug, Clone)]
pub struct ComputerTurn {
    engine: RoundEngine,
    state: GameState,
    rolls: u8,
    standing: bool,
}

impl ComputerTurn {
    /// The state as of the latest roll.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Rolls made so far.
    pub fn rolls(&self) -> u8 {
        self.rolls
    }

    /// Make the next roll, or return `None` once the computer stands.
    ///
    /// The first roll throws all five dice. In a normal round up to two
    /// rerolls follow while the policy asks for one; in sudden death the
    /// first roll is final.
    pub fn next_roll<R: Rng>(&mut self, rng: &mut R) -> Option<ComputerRoll> {
        if self.standing || self.rolls >= MAX_ROLLS {
            return None;
        }

        let kept = if self.rolls == 0 {
            REROLL_ALL
        } else {
            let hand = &self.state.computer_dice;
            let (own, opponent) = (self.state.computer_score, self.state.human_score);
            if self.state.tie_breaker_active || !policy::should_reroll(hand, own, opponent) {
                self.standing = true;
                debug!(dice = %hand, rolls = self.rolls, "computer stands");
                return None;
            }
            policy::keep_mask(hand, own, opponent, self.engine.target_score(), rng)
        };

        self.state.computer_dice = self.state.computer_dice.reroll(&kept, rng);
        self.rolls += 1;
        debug!(dice = %self.state.computer_dice, roll = self.rolls, "computer rolled");

        Some(ComputerRoll {
            state: self.state.clone(),
            roll: self.rolls,
            kept,
        })
    }

    /// Play out any remaining rolls, bank the computer's dice and resolve
    /// the round.
    pub fn finish<R: Rng>(mut self, rng: &mut R) -> Transition {
        while self.next_roll(rng).is_some() {}

        let computer_turn = self.state.computer_dice.total();
        let human_turn = self.state.human_dice.total();
        let mut banked = self.state;
        banked.computer_score += computer_turn;
        self.engine.resolve_round(&banked, human_turn, computer_turn)
    }
}

fn end_human_turn(mut state: GameState) -> GameState {
    state.human_score += state.human_dice.total();
    state.held = REROLL_ALL;
    state.phase = Phase::ComputerTurn;
    debug!(banked = state.human_dice.total(), total = state.human_score, "human banked");
    state
}

fn reset_dice(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.human_dice = Hand::NEUTRAL;
    next.computer_dice = Hand::NEUTRAL;
    next.held = REROLL_ALL;
    next.rolls_taken = 0;
    next
}

fn start_tie_breaker(state: &GameState) -> GameState {
    let mut next = reset_dice(state);
    next.tie_breaker_active = true;
    next.phase = Phase::TieBreaker;
    next
}

fn finish_match(state: &GameState, winner: Side, reason: String) -> Transition {
    info!(%winner, human = state.human_score, computer = state.computer_score, "match over");
    let mut next = state.clone();
    next.phase = Phase::GameOver;
    next.winner = Some(winner);
    Transition {
        state: next,
        outcome: Some(MatchOutcome { winner, reason }),
    }
}
