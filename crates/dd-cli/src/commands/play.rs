use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use dd_core::Side;
use dd_session::{DuelSession, SessionConfig};

pub fn run(seed: Option<u64>, target: u32, journal: Option<&Path>) -> Result<(), String> {
    let seed = seed.unwrap_or_else(rand::random);
    let config = SessionConfig::default()
        .with_seed(seed)
        .with_target_score(target);

    let mut session =
        DuelSession::new(config).map_err(|e| format!("failed to start session: {e}"))?;

    println!("  {} Duel Dice", "Starting".bold());
    println!("  Target: {target} | Seed: {seed}");
    println!("  Type 'roll' to begin, 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let finished = session.tally().games();
        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if session.tally().games() > finished {
                    announce(session.last_outcome().map(|o| o.winner));
                }
                if is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    if let Some(path) = journal {
        std::fs::write(path, session.journal().export_markdown())
            .map_err(|e| format!("failed to write journal to {}: {e}", path.display()))?;
        println!("  Journal written to {}", path.display());
    }

    Ok(())
}

fn is_quit(input: &str) -> bool {
    let command = input.split_whitespace().next().unwrap_or_default();
    command.eq_ignore_ascii_case("quit") || command.eq_ignore_ascii_case("q")
}

fn announce(winner: Option<Side>) {
    match winner {
        Some(Side::Human) => println!("  {}\n", "*** YOU WIN ***".green().bold()),
        Some(Side::Computer) => println!("  {}\n", "*** YOU LOSE ***".red().bold()),
        None => {}
    }
}
