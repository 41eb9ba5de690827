//! Display functions for game state and statistics

use super::formatters::{create_progress_bar, feedback_row, praise, tile};
use crate::core::Language;
use crate::game::{Hint, KeyboardTracker, Outcome, Session};
use crate::stats::Stats;
use colored::Colorize;

/// Print every submitted row of the board plus the remaining guess count
pub fn print_board(session: &Session) {
    println!();
    for (guess, feedback) in session.guesses().iter().zip(session.feedback()) {
        println!("  {}", feedback_row(guess, feedback));
    }
    if !session.is_over() {
        println!(
            "{}",
            format!("  {} guesses left", session.remaining_guesses()).bright_black()
        );
    }
}

/// Print the alphabet colored by the best-known state of each letter
pub fn print_keyboard(language: Language, keyboard: &KeyboardTracker) {
    let keys: Vec<String> = language
        .letters()
        .map(|letter| tile(letter, keyboard.state_of(letter)).to_string())
        .collect();
    println!("\n  {}", keys.join(""));
}

pub fn print_hint(hint: Hint) {
    println!(
        "💡 Position {}: {}",
        hint.position + 1,
        hint.letter.to_uppercase().to_string().bright_yellow().bold()
    );
}

/// Print the end-of-game message
pub fn print_outcome(outcome: Outcome, session: &Session) {
    match outcome {
        Outcome::Won { guesses } => {
            println!("\n{}", praise(guesses).bright_green().bold());
        }
        Outcome::Lost => {
            let word = session
                .solution()
                .map(|w| w.text().to_uppercase())
                .unwrap_or_default();
            println!("\nThe word was: {}", word.bright_yellow().bold());
        }
    }
}

/// Print statistics with a guess distribution chart
pub fn print_stats(language: Language, stats: &Stats, highlight: Option<usize>) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(
        " {} {} ",
        "STATISTICS".bright_cyan().bold(),
        format!("({language})").bright_black()
    );
    println!("{}", "═".repeat(40).cyan());

    println!("   Played:      {}", stats.played);
    println!("   Win %:       {}", stats.win_percentage());
    println!("   Streak:      {}", stats.streak);
    println!("   Max streak:  {}", stats.max_streak);

    println!("\n📈 {}", "Guess Distribution:".bright_cyan().bold());
    let max = f64::from(stats.distribution_max());
    for (&guess_count, &count) in &stats.distribution {
        let bar = create_progress_bar(f64::from(count), max, 24);
        let bar = if highlight == Some(guess_count) {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {guess_count}: {bar} {count}");
    }
}
