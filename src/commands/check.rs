//! Evaluate a single guess against a chosen target
//!
//! Useful for checking feedback rules without playing a game.

use crate::core::{Feedback, Language, Word, evaluate};

/// Result of checking a guess
#[derive(Debug, Clone)]
pub struct CheckResult {
    pub guess: Word,
    pub target: Word,
    pub feedback: Feedback,
}

/// Score `guess` against `target`
///
/// Both words must have the same length and be spelled in `language`'s alphabet.
/// Word-list membership is not required.
///
/// # Errors
///
/// Returns an error if either word is invalid or the lengths differ.
pub fn check_guess(guess: &str, target: &str, language: Language) -> Result<CheckResult, String> {
    let length = target.trim().chars().count();
    let target = Word::new(target, language, length).map_err(|e| format!("Invalid target: {e}"))?;
    let guess = Word::new(guess, language, length).map_err(|e| format!("Invalid guess: {e}"))?;
    let feedback = evaluate(&guess, &target);

    Ok(CheckResult {
        guess,
        target,
        feedback,
    })
}
