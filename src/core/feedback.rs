//! Guess evaluation and per-letter feedback
//!
//! Each position of a guess is scored as one of:
//! - Absent (letter not in the remaining target letters)
//! - Present (letter in word, wrong position)
//! - Correct (letter in correct position)

use super::Word;
use std::fmt;

/// Feedback for a single letter
///
/// Ordered so that `Absent < Present < Correct`; merging feedback for one
/// letter across guesses keeps the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji tile for this state
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Per-position feedback for one guess, aligned with the guess letters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Feedback(Vec<LetterState>);

impl Feedback {
    /// Wrap raw letter states
    #[must_use]
    pub const fn new(states: Vec<LetterState>) -> Self {
        Self(states)
    }

    #[inline]
    #[must_use]
    pub fn states(&self) -> &[LetterState] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&s| s == LetterState::Correct)
    }

    /// Score `guess` against `target`
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: Mark all exact matches and remove them from the available pool
    /// 2. Second pass: In guess order, mark present letters while the pool still
    ///    holds a copy, consuming one copy each time
    ///
    /// # Panics
    /// Panics if the words differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Language, Word};
    ///
    /// let guess = Word::new("crane", Language::English, 5).unwrap();
    /// let target = Word::new("slate", Language::English, 5).unwrap();
    ///
    /// // C(absent) R(absent) A(correct) N(absent) E(correct)
    /// assert_eq!(Feedback::calculate(&guess, &target).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        assert_eq!(
            guess.len(),
            target.len(),
            "guess and target must have the same length"
        );

        let mut result = vec![LetterState::Absent; guess.len()];
        let mut target_available = target.char_counts();

        // First pass: exact position matches
        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterState::Correct;
                if let Some(count) = target_available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: leftmost unmatched guess letters claim remaining copies first
        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] == LetterState::Correct {
                continue;
            }
            if let Some(count) = target_available.get_mut(&g)
                && *count > 0
            {
                result[i] = LetterState::Present;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Count positions in a given state
    #[must_use]
    pub fn count(&self, state: LetterState) -> usize {
        self.0.iter().filter(|&&s| s == state).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        s.chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Some(LetterState::Correct),
                'Y' | 'y' | '🟨' => Some(LetterState::Present),
                '-' | '_' | '⬜' => Some(LetterState::Absent),
                _ => None,
            })
            .collect::<Option<Vec<_>>>()
            .filter(|states| !states.is_empty())
            .map(Self)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// Score a guess against a target
///
/// Pure and deterministic; see [`Feedback::calculate`].
///
/// # Panics
/// Panics if the words differ in length.
#[must_use]
pub fn evaluate(guess: &Word, target: &Word) -> Feedback {
    Feedback::calculate(guess, target)
}
