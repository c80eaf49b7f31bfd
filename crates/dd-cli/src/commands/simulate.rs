use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

use dd_core::autopilot::play_match;
use dd_core::{GameState, MatchOutcome, Side};

/// Aggregates for one side across a simulation run.
#[derive(Default)]
struct SideStats {
    wins: u32,
    final_score_sum: u64,
}

pub fn run(games: u32, seed: u64, target: u32, each: bool) -> Result<(), String> {
    if games == 0 {
        return Err("--games must be at least 1".into());
    }
    let engine = super::build_engine(target)?;
    let mut rng = StdRng::seed_from_u64(seed);

    let mut human = SideStats::default();
    let mut computer = SideStats::default();
    let mut total_rounds: u64 = 0;
    let mut longest = 0;
    let mut tie_breakers = 0;

    println!(
        "  {} {games} games {}",
        "Simulating".bold(),
        format!("(target={target}, seed={seed})").dimmed()
    );
    println!();

    for game in 1..=games {
        let (state, outcome) = play_match(&engine, &mut rng);

        let stats = match outcome.winner {
            Side::Human => &mut human,
            Side::Computer => &mut computer,
        };
        stats.wins += 1;
        human.final_score_sum += u64::from(state.human_score);
        computer.final_score_sum += u64::from(state.computer_score);
        total_rounds += u64::from(state.round);
        longest = longest.max(state.round);
        if state.tie_breaker_active {
            tie_breakers += 1;
        }

        if each {
            println!("  {}", describe_game(game, &state, &outcome));
        }
    }
    if each {
        println!();
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Side", "Wins", "Win %", "Avg final score"]);
    for (name, stats) in [("Autopilot (human seat)", &human), ("Computer", &computer)] {
        table.add_row(vec![
            name.to_string(),
            stats.wins.to_string(),
            format!("{:.1}", percent(stats.wins, games)),
            format!("{:.1}", stats.final_score_sum as f64 / f64::from(games)),
        ]);
    }
    println!("{table}");
    println!();
    println!(
        "  Rounds: {:.1} on average, {longest} at most",
        total_rounds as f64 / f64::from(games)
    );
    println!("  Tie-breakers: {tie_breakers}");

    Ok(())
}

fn describe_game(game: u32, state: &GameState, outcome: &MatchOutcome) -> String {
    let winner = match outcome.winner {
        Side::Human => "human".green(),
        Side::Computer => "computer".red(),
    };
    let tie = if state.tie_breaker_active {
        " after a tie-breaker"
    } else {
        ""
    };
    format!(
        "Game {game:>4}: {winner} wins in {} rounds{tie} ({})",
        state.round, outcome.reason
    )
}

fn percent(part: u32, whole: u32) -> f64 {
    f64::from(part) * 100.0 / f64::from(whole)
}
