//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::{WordList, WordRepository};
use crate::core::Language;
use log::{info, warn};
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Entries are trimmed and lowercased; blank lines are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/en/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Normalize raw entries into lowercase words, skipping blanks
#[must_use]
pub fn words_from_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect()
}

/// Load the lists for one language from `<dir>/<lang>/answers.txt` and `<dir>/<lang>/valid.txt`
///
/// The answers file is required. A missing valid file leaves only the answers guessable.
///
/// # Errors
///
/// Returns an I/O error if the answers file cannot be read.
pub fn load_language<P: AsRef<Path>>(dir: P, language: Language) -> io::Result<WordList> {
    let lang_dir = dir.as_ref().join(language.code());

    let answers = load_from_file(lang_dir.join("answers.txt"))?;
    let valid = load_from_file(lang_dir.join("valid.txt")).unwrap_or_else(|e| {
        warn!(
            "No extra guessable words for {language} at {}: {e}",
            lang_dir.display()
        );
        Vec::new()
    });

    info!(
        "Loaded {} answers and {} extra guesses for {language}",
        answers.len(),
        valid.len()
    );
    Ok(WordList::new(answers, valid))
}

/// Load every supported language from a directory
///
/// # Errors
///
/// Returns the first I/O error encountered.
pub fn load_repository<P: AsRef<Path>>(dir: P) -> io::Result<WordRepository> {
    let mut repository = WordRepository::default();
    for language in Language::ALL {
        repository.insert(language, load_language(dir.as_ref(), language)?);
    }
    Ok(repository)
}
