//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterState, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile
#[must_use]
pub fn tile(letter: char, state: Option<LetterState>) -> ColoredString {
    let text = format!(" {} ", letter.to_uppercase());
    match state {
        Some(LetterState::Correct) => text.black().on_green().bold(),
        Some(LetterState::Present) => text.black().on_yellow().bold(),
        Some(LetterState::Absent) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// Render a guess with its feedback as a row of tiles
#[must_use]
pub fn feedback_row(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .iter()
        .zip(feedback.states())
        .map(|(&letter, &state)| tile(letter, Some(state)).to_string())
        .collect()
}

/// Create a bar string scaled so `max` fills `width`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Celebration text for a win in `guess_count` guesses
#[must_use]
pub const fn praise(guess_count: usize) -> &'static str {
    match guess_count {
        1 => "Genius!",
        2 => "Magnificent!",
        3 => "Impressive!",
        4 => "Splendid!",
        5 => "Great!",
        _ => "Phew!",
    }
}
