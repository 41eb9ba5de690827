//! Game word representation
//!
//! A Word stores a fixed-length lowercase word as characters, validated against a language alphabet.

use super::Language;
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated, lowercase word of a given length
///
/// Length is counted in characters so that words like "größe" have length 5.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    chars: Vec<char>,
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength { expected: usize, actual: usize },
    InvalidCharacter(char),
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, actual } => {
                write!(f, "Word must be exactly {expected} letters, got {actual}")
            }
            Self::InvalidCharacter(ch) => write!(f, "Word contains invalid character '{ch}'"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word for `language` with exactly `length` letters
    ///
    /// Input is trimmed and lowercased before validation.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `length`
    /// - Contains a character outside the language alphabet
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Language, Word};
    ///
    /// let word = Word::new("CRANE", Language::English, 5).unwrap();
    /// assert_eq!(word.text(), "crane");
    ///
    /// assert!(Word::new("größe", Language::German, 5).is_ok());
    /// assert!(Word::new("größe", Language::English, 5).is_err());
    /// assert!(Word::new("sh0rt", Language::English, 5).is_err());
    /// ```
    pub fn new(text: &str, language: Language, length: usize) -> Result<Self, WordError> {
        let text = text.trim().to_lowercase();
        let chars: Vec<char> = text.chars().collect();

        if chars.len() != length {
            return Err(WordError::InvalidLength {
                expected: length,
                actual: chars.len(),
            });
        }

        if let Some(&bad) = chars.iter().find(|&&c| !language.contains(c)) {
            return Err(WordError::InvalidCharacter(bad));
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's letters
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Number of letters
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Get the character at a specific position
    ///
    /// # Panics
    /// Panics if position >= `len()`
    #[inline]
    #[must_use]
    pub fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Get the count of each letter in the word
    ///
    /// Used for evaluation with duplicate letters.
    #[inline]
    pub(crate) fn char_counts(&self) -> FxHashMap<char, usize> {
        let mut counts = FxHashMap::default();
        for &ch in &self.chars {
            *counts.entry(ch).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
