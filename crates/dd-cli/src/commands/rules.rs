//! Print the rules of the game.

use colored::Colorize;

use dd_core::config::DEFAULT_TARGET_SCORE;
use dd_core::policy::{CLOSING_DISTANCE, SIGNIFICANT_LEAD, STRONG_HAND, reroll_threshold};

pub fn run() -> Result<(), String> {
    println!("  {}", "Duel Dice".bold().underline());
    println!();
    println!("  Each turn you roll five dice up to three times. Between rolls you");
    println!("  may hold any dice to keep them; the rest are rerolled. Bank the");
    println!("  sum of your dice whenever you like; the third roll banks itself.");
    println!("  Then the computer takes its turn.");
    println!();
    println!(
        "  The first side to reach the target ({DEFAULT_TARGET_SCORE} by default) after a"
    );
    println!("  full round wins. If both reach it with equal totals, a tie-breaker");
    println!("  follows: one roll each, highest roll wins, repeated until decided.");
    println!();
    println!("  {}", "The computer's strategy".bold().underline());
    println!();
    println!("  It stands on {STRONG_HAND} or more. Otherwise it rerolls below a threshold");
    println!("  that depends on the score difference (its score minus yours):");
    println!(
        "    far behind (< -20): {}   behind: {}   level: {}   far ahead (> 20): {}",
        reroll_threshold(-21),
        reroll_threshold(-1),
        reroll_threshold(0),
        reroll_threshold(21)
    );
    println!("  When rerolling it always keeps fives and sixes, keeps fours when");
    println!(
        "  more than {SIGNIFICANT_LEAD} ahead or within {CLOSING_DISTANCE} of the target, keeps threes"
    );
    println!("  only when well ahead, and flips a coin on threes and fours when well");
    println!("  behind.");
    println!();
    Ok(())
}
