//! Word lists and the word repository
//!
//! Provides embedded word lists compiled into the binary, plus the per-language
//! repository used to draw answers and validate guesses.

mod embedded;
pub mod loader;

pub use embedded::{
    ANSWERS_DE, ANSWERS_DE_COUNT, ANSWERS_EN, ANSWERS_EN_COUNT, VALID_DE, VALID_DE_COUNT,
    VALID_EN, VALID_EN_COUNT,
};

use crate::core::{Language, Word};
use crate::error::GameError;
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// Answer and guess lists for one language
///
/// Immutable after construction. `guessable` is the union of answers and extra valid words.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    answers: Vec<String>,
    guessable: FxHashSet<String>,
}

impl WordList {
    /// Build a list from raw answers and extra guessable words
    ///
    /// Entries are trimmed and lowercased.
    pub fn new<A, V>(answers: A, valid: V) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        V: IntoIterator,
        V::Item: AsRef<str>,
    {
        let answers: Vec<String> = answers
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        let mut guessable: FxHashSet<String> = answers.iter().cloned().collect();
        guessable.extend(
            valid
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty()),
        );

        Self { answers, guessable }
    }

    #[must_use]
    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    /// Case-insensitive membership in answers or valid words
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.guessable.contains(&word.trim().to_lowercase())
    }

    /// Answers of exactly `length` letters that are spelled in `language`'s alphabet
    #[must_use]
    pub fn answers_of_length(&self, language: Language, length: usize) -> Vec<Word> {
        self.answers
            .iter()
            .filter_map(|w| Word::new(w, language, length).ok())
            .collect()
    }
}

/// Word lists for every loaded language
#[derive(Debug, Clone, Default)]
pub struct WordRepository {
    lists: FxHashMap<Language, WordList>,
}

impl WordRepository {
    /// Repository backed by the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        let mut repository = Self::default();
        repository.insert(Language::English, WordList::new(ANSWERS_EN, VALID_EN));
        repository.insert(Language::German, WordList::new(ANSWERS_DE, VALID_DE));
        repository
    }

    pub fn insert(&mut self, language: Language, list: WordList) {
        self.lists.insert(language, list);
    }

    #[must_use]
    pub fn list(&self, language: Language) -> Option<&WordList> {
        self.lists.get(&language)
    }

    /// Pick a uniformly random answer of `length` letters
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if the language has no answer of that length.
    pub fn pick_answer<R: Rng + ?Sized>(
        &self,
        language: Language,
        length: usize,
        rng: &mut R,
    ) -> Result<Word, GameError> {
        let pool = self
            .list(language)
            .map(|list| list.answers_of_length(language, length))
            .unwrap_or_default();

        pool.choose(rng)
            .cloned()
            .ok_or(GameError::EmptyAnswerPool { language, length })
    }

    /// Case-insensitive check against the union of answers and valid words
    #[must_use]
    pub fn is_valid_guess(&self, language: Language, word: &str) -> bool {
        self.list(language).is_some_and(|list| list.contains(word))
    }
}
