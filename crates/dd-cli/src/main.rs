//! Terminal frontend for Duel Dice, a human-vs-computer dice game.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use dd_core::config::DEFAULT_TARGET_SCORE;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "duel-dice",
    about = "Duel Dice: five dice, three rolls, first to the target wins",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine activity to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer, reading commands from stdin
    Play {
        /// RNG seed for reproducible dice (random if omitted)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Score needed to win
        #[arg(short, long, default_value_t = DEFAULT_TARGET_SCORE)]
        target: u32,

        /// Write the session journal as markdown to this file on exit
        #[arg(short, long)]
        journal: Option<PathBuf>,
    },

    /// Let the autopilot play the human seat for many games and report stats
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Score needed to win
        #[arg(short, long, default_value_t = DEFAULT_TARGET_SCORE)]
        target: u32,

        /// List every game, not just the summary
        #[arg(short, long)]
        each: bool,
    },

    /// Explain the rules and the computer's strategy
    Rules,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            seed,
            target,
            journal,
        } => commands::play::run(seed, target, journal.as_deref()),
        Commands::Simulate {
            games,
            seed,
            target,
            each,
        } => commands::simulate::run(games, seed, target, each),
        Commands::Rules => commands::rules::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
