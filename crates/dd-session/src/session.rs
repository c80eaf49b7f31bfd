//! Interactive game session.
//!
//! `DuelSession` owns the current [`GameState`] and feeds it through the
//! engine in response to text commands. When the human's turn ends the
//! computer plays immediately, roll by roll, and the session reports each
//! roll and the round result.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use dd_core::dice::DiceMask;
use dd_core::{DICE_COUNT, GameState, Hand, MAX_ROLLS, MatchOutcome, Phase, RoundEngine, Side};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::journal::entry::JournalEntry;
use crate::journal::log::Journal;
use crate::tally::Tally;

/// An interactive human-vs-computer session.
pub struct DuelSession {
    engine: RoundEngine,
    state: GameState,
    rng: StdRng,
    journal: Journal,
    tally: Tally,
    game: u32,
    tie_breakers: u32,
    last_outcome: Option<MatchOutcome>,
}

impl DuelSession {
    /// Create a session and start its first game.
    pub fn new(config: SessionConfig) -> SessionResult<Self> {
        let engine = RoundEngine::new(config.match_config())?;
        let rng = StdRng::seed_from_u64(config.seed);
        let state = engine.new_game();

        let mut session = Self {
            engine,
            state,
            rng,
            journal: Journal::default(),
            tally: Tally::default(),
            game: 0,
            tie_breakers: 0,
            last_outcome: None,
        };
        session.start_game();
        Ok(session)
    }

    /// Get the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Get the engine.
    pub fn engine(&self) -> &RoundEngine {
        &self.engine
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Get the win tally.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// The outcome of the most recently finished game.
    pub fn last_outcome(&self) -> Option<&MatchOutcome> {
        self.last_outcome.as_ref()
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "roll" | "r" => self.do_roll(),
            "hold" | "h" => self.do_hold(rest),
            "bank" | "b" => self.do_bank(),
            "status" | "s" => Ok(self.do_status()),
            "journal" => Ok(self.do_journal_show()),
            "export" => self.do_journal_export(rest),
            "new" => Ok(self.do_new()),
            "help" => Ok(help_text()),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn do_roll(&mut self) -> SessionResult<String> {
        self.ensure_playing()?;
        if !self.state.can_roll() {
            return Err(SessionError::InvalidChoice(
                "no rolls left this turn".to_string(),
            ));
        }

        let round = self.state.round;
        let sudden_death = self.state.phase == Phase::TieBreaker;
        let previous = self.state.human_score;
        self.state = self.engine.roll(&self.state, &mut self.rng);

        self.journal.record(JournalEntry::HumanRoll {
            round,
            roll: self.state.rolls_taken,
            dice: self.state.human_dice.values(),
            timestamp: Utc::now(),
        });

        let mut output = format!(
            "Roll {}/{}: {}",
            self.state.rolls_taken,
            if sudden_death { 1 } else { MAX_ROLLS },
            render_hand(&self.state.human_dice, &self.state.held)
        );

        if self.state.phase == Phase::ComputerTurn {
            let points = self.state.human_score - previous;
            self.record_human_bank(round, points);
            output.push_str(&format!(
                "\nTurn over: {points} banked automatically (you have {}).",
                self.state.human_score
            ));
            output.push('\n');
            output.push_str(&self.play_computer());
        } else {
            output.push_str(&format!(
                "\n{} roll{} left. 'hold <n>...' to keep dice, 'bank' to score.",
                self.state.rolls_remaining(),
                if self.state.rolls_remaining() == 1 { "" } else { "s" }
            ));
        }

        Ok(output)
    }

    fn do_hold(&mut self, rest: &str) -> SessionResult<String> {
        self.ensure_playing()?;
        let indices = parse_dice_indices(rest)?;
        if !self.state.can_hold() {
            return Err(SessionError::InvalidChoice(
                "you can only hold dice between rolls".to_string(),
            ));
        }

        for index in indices {
            self.state = self.engine.toggle_hold(&self.state, index);
            self.journal.record(JournalEntry::HoldToggled {
                die: index + 1,
                held: self.state.held[index],
                timestamp: Utc::now(),
            });
        }

        Ok(format!(
            "Dice: {}",
            render_hand(&self.state.human_dice, &self.state.held)
        ))
    }

    fn do_bank(&mut self) -> SessionResult<String> {
        self.ensure_playing()?;
        if !self.state.can_bank() {
            return Err(SessionError::InvalidChoice(
                "roll before banking".to_string(),
            ));
        }

        let round = self.state.round;
        let previous = self.state.human_score;
        self.state = self.engine.bank_score(&self.state);
        let points = self.state.human_score - previous;
        self.record_human_bank(round, points);

        let mut output = format!(
            "You banked {points} (you have {}).\n",
            self.state.human_score
        );
        output.push_str(&self.play_computer());
        Ok(output)
    }

    fn record_human_bank(&mut self, round: u32, points: u32) {
        self.journal.record(JournalEntry::Banked {
            side: Side::Human,
            round,
            points,
            total: self.state.human_score,
            timestamp: Utc::now(),
        });
    }

    /// Play the computer's turn and resolve the round.
    fn play_computer(&mut self) -> String {
        let Some(mut turn) = self.engine.begin_computer_turn(&self.state) else {
            return String::new();
        };
        let round = self.state.round;
        let mut out = String::new();

        while let Some(step) = turn.next_roll(&mut self.rng) {
            out.push_str(&format!(
                "Computer roll {}: {}\n",
                step.roll,
                render_hand(&step.state.computer_dice, &step.kept)
            ));
            self.journal.record(JournalEntry::ComputerRoll {
                round,
                roll: step.roll,
                dice: step.state.computer_dice.values(),
                kept: step.kept,
                timestamp: Utc::now(),
            });
        }

        let points = turn.state().computer_dice.total();
        let transition = turn.finish(&mut self.rng);
        self.state = transition.state;

        self.journal.record(JournalEntry::Banked {
            side: Side::Computer,
            round,
            points,
            total: self.state.computer_score,
            timestamp: Utc::now(),
        });
        out.push_str(&format!(
            "Computer banked {points} (computer has {}).\n",
            self.state.computer_score
        ));

        match transition.outcome {
            Some(outcome) => {
                self.tally.record(outcome.winner);
                self.journal.record(JournalEntry::MatchEnded {
                    winner: outcome.winner,
                    reason: outcome.reason.clone(),
                    human_score: self.state.human_score,
                    computer_score: self.state.computer_score,
                    timestamp: Utc::now(),
                });
                let headline = match outcome.winner {
                    Side::Human => "You win!",
                    Side::Computer => "You lose!",
                };
                out.push_str(&format!(
                    "{headline} {} ({}). Type 'new' to play again.",
                    capitalize(&outcome.reason),
                    self.tally
                ));
                self.last_outcome = Some(outcome);
            }
            None if self.state.phase == Phase::TieBreaker => {
                self.tie_breakers += 1;
                self.journal.record(JournalEntry::TieBreaker {
                    iteration: self.tie_breakers,
                    human_score: self.state.human_score,
                    computer_score: self.state.computer_score,
                    timestamp: Utc::now(),
                });
                out.push_str(&format!(
                    "Tie-breaker {}! One roll each, highest roll wins. Type 'roll'.",
                    self.tie_breakers
                ));
            }
            None => {
                self.journal.record(JournalEntry::RoundAdvanced {
                    round: self.state.round,
                    human_score: self.state.human_score,
                    computer_score: self.state.computer_score,
                    timestamp: Utc::now(),
                });
                out.push_str(&format!(
                    "Round {}: you {} - {} computer. Type 'roll'.",
                    self.state.round, self.state.human_score, self.state.computer_score
                ));
            }
        }
        out
    }

    fn do_status(&self) -> String {
        let s = &self.state;
        let mut out = format!(
            "Game {} | Round {} | Target {} | {}\n",
            self.game,
            s.round,
            self.engine.target_score(),
            s.phase
        );
        out.push_str(&format!(
            "Score: you {} - {} computer | Wins {}\n",
            s.human_score, s.computer_score, self.tally
        ));
        out.push_str(&format!(
            "Your dice: {} | Rolls {}/{}\n",
            render_hand(&s.human_dice, &s.held),
            s.rolls_taken,
            if s.tie_breaker_active { 1 } else { MAX_ROLLS }
        ));
        out.push_str(&format!(
            "Computer dice: {}",
            render_hand(&s.computer_dice, &[false; DICE_COUNT])
        ));
        out
    }

    fn do_journal_show(&self) -> String {
        if self.journal.entries().is_empty() {
            return "Journal is empty.".to_string();
        }
        self.journal.export_markdown().trim_end().to_string()
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "" | "markdown" | "md" => Ok(self.journal.export_markdown()),
            "json" => self.journal.export_json(),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown export format '{other}' (use markdown or json)"
            ))),
        }
    }

    fn do_new(&mut self) -> String {
        if !self.state.is_over() {
            debug!(game = self.game, round = self.state.round, "abandoning unfinished game");
        }
        self.start_game();
        format!(
            "Game {} started. First to {} wins. Type 'roll'.",
            self.game,
            self.engine.target_score()
        )
    }

    fn start_game(&mut self) {
        self.state = self.engine.new_game();
        self.game += 1;
        self.tie_breakers = 0;
        self.journal.record(JournalEntry::NewGame {
            game: self.game,
            target_score: self.engine.target_score(),
            timestamp: Utc::now(),
        });
    }

    fn ensure_playing(&self) -> SessionResult<()> {
        if self.state.is_over() {
            Err(SessionError::MatchOver)
        } else {
            Ok(())
        }
    }
}

/// Render a hand with marked dice in brackets, e.g. `[6] 2 [5] 1 3 = 17`.
pub fn render_hand(hand: &Hand, marked: &DiceMask) -> String {
    let dice: Vec<String> = hand
        .values()
        .iter()
        .zip(marked)
        .map(|(value, mark)| {
            if *mark {
                format!("[{value}]")
            } else {
                value.to_string()
            }
        })
        .collect();
    format!("{} = {}", dice.join(" "), hand.total())
}

/// Parse 1-based die positions such as `1 3 5` or `2,4` into 0-based indices.
fn parse_dice_indices(input: &str) -> SessionResult<Vec<usize>> {
    let usage = || SessionError::InvalidChoice("usage: hold <1-5> [<1-5>...]".to_string());
    let indices = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(n) if (1..=DICE_COUNT).contains(&n) => Ok(n - 1),
            _ => Err(usage()),
        })
        .collect::<SessionResult<Vec<_>>>()?;
    if indices.is_empty() {
        return Err(usage());
    }
    Ok(indices)
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn help_text() -> String {
    "Commands:
  roll (r)            Throw the dice (held dice stay put)
  hold (h) <n>...     Hold or release dice by position, e.g. 'hold 1 3'
  bank (b)            Score the current dice; the computer then plays
  status (s)          Show scores, dice and rolls left
  journal             Show everything that happened this session
  export [md|json]    Print the journal as markdown or JSON
  new                 Start a new game (the win tally is kept)
  help                Show this list
  quit (q)            Leave the session"
        .to_string()
}
