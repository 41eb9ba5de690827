//! Per-game state and the guess/hint/give-up state machine

use super::KeyboardTracker;
use crate::core::{Feedback, Language, Word, evaluate};
use crate::error::GameError;
use crate::wordlists::WordRepository;
use log::{debug, trace};
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::collections::BTreeSet;

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// Terminal result reported once per session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won { guesses: usize },
    Lost,
}

/// A disclosed target letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub position: usize,
    pub letter: char,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub guess: Word,
    pub feedback: Feedback,
    /// Set only on the submit that ends the game
    pub outcome: Option<Outcome>,
}

/// One game: target, board history, current input and hint bookkeeping
///
/// Operations on a finished session, or while a reveal is in progress, are
/// no-ops that report "nothing changed" rather than errors.
#[derive(Debug, Clone)]
pub struct Session {
    language: Language,
    max_guesses: usize,
    target: Word,
    guesses: Vec<Word>,
    feedback: Vec<Feedback>,
    current_input: String,
    state: GameState,
    hinted: BTreeSet<usize>,
    keyboard: KeyboardTracker,
    revealing: bool,
}

impl Session {
    /// Create a session for a known target
    ///
    /// The word length is the target's length.
    #[must_use]
    pub fn new(language: Language, target: Word, max_guesses: usize) -> Self {
        trace!("New {language} session with target {target}");
        Self {
            language,
            max_guesses,
            target,
            guesses: Vec::with_capacity(max_guesses),
            feedback: Vec::with_capacity(max_guesses),
            current_input: String::new(),
            state: GameState::InProgress,
            hinted: BTreeSet::new(),
            keyboard: KeyboardTracker::new(),
            revealing: false,
        }
    }

    /// Create a session with a random target drawn from `words`
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if no answer of `word_length` exists.
    pub fn start<R: Rng + ?Sized>(
        words: &WordRepository,
        language: Language,
        word_length: usize,
        max_guesses: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let target = words.pick_answer(language, word_length, rng)?;
        Ok(Self::new(language, target, max_guesses))
    }

    fn accepts_input(&self) -> bool {
        self.state == GameState::InProgress && !self.revealing
    }

    /// Type one key; returns whether the input changed
    ///
    /// The key is lowercased and ignored if it is not a letter of the session's language.
    pub fn append_letter(&mut self, key: char) -> bool {
        if !self.accepts_input() || self.input_len() >= self.word_length() {
            return false;
        }
        match self.language.normalize(key) {
            Some(letter) => {
                self.current_input.push(letter);
                true
            }
            None => false,
        }
    }

    /// Remove the last typed letter; returns whether the input changed
    pub fn delete_letter(&mut self) -> bool {
        if !self.accepts_input() {
            return false;
        }
        self.current_input.pop().is_some()
    }

    /// Submit the current input as a guess
    ///
    /// Returns `Ok(None)` when the session does not accept input.
    ///
    /// # Errors
    ///
    /// - `GameError::TooShort` if fewer than `word_length` letters are typed
    /// - `GameError::NotInWordList` if the word is unknown
    ///
    /// The input is kept in both cases.
    pub fn submit(&mut self, words: &WordRepository) -> Result<Option<Submission>, GameError> {
        if !self.accepts_input() {
            return Ok(None);
        }

        let required = self.word_length();
        let actual = self.input_len();
        if actual < required {
            return Err(GameError::TooShort { actual, required });
        }

        if !words.is_valid_guess(self.language, &self.current_input) {
            return Err(GameError::NotInWordList(self.current_input.clone()));
        }

        let guess = Word::new(&self.current_input, self.language, required)
            .map_err(|_| GameError::NotInWordList(self.current_input.clone()))?;
        self.current_input.clear();

        let feedback = evaluate(&guess, &self.target);
        self.keyboard.update(&guess, &feedback);
        self.guesses.push(guess.clone());
        self.feedback.push(feedback.clone());
        debug!(
            "Guess {}/{}: {guess} {feedback}",
            self.guesses.len(),
            self.max_guesses
        );

        let outcome = if feedback.is_perfect() {
            self.state = GameState::Won;
            Some(Outcome::Won {
                guesses: self.guesses.len(),
            })
        } else if self.guesses.len() >= self.max_guesses {
            self.state = GameState::Lost;
            Some(Outcome::Lost)
        } else {
            None
        };

        Ok(Some(Submission {
            guess,
            feedback,
            outcome,
        }))
    }

    /// End the game as a loss; `None` if the session does not accept input
    pub fn give_up(&mut self) -> Option<Outcome> {
        if !self.accepts_input() {
            return None;
        }
        self.state = GameState::Lost;
        debug!("Gave up after {} guesses", self.guesses.len());
        Some(Outcome::Lost)
    }

    /// Positions still eligible for a hint
    ///
    /// Excludes positions already hinted and positions matched exactly by any submitted guess.
    #[must_use]
    pub fn hintable_positions(&self) -> Vec<usize> {
        (0..self.word_length())
            .filter(|pos| !self.hinted.contains(pos))
            .filter(|&pos| {
                !self
                    .guesses
                    .iter()
                    .any(|g| g.char_at(pos) == self.target.char_at(pos))
            })
            .collect()
    }

    /// Disclose one random undisclosed target letter
    ///
    /// Returns `Ok(None)` when the session does not accept input. Never changes the game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoHintsAvailable` if every position is hinted or already solved.
    pub fn request_hint<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<Hint>, GameError> {
        if !self.accepts_input() {
            return Ok(None);
        }

        let position = *self
            .hintable_positions()
            .choose(rng)
            .ok_or(GameError::NoHintsAvailable)?;
        self.hinted.insert(position);
        debug!("Hint disclosed position {position}");

        Ok(Some(Hint {
            position,
            letter: self.target.char_at(position),
        }))
    }

    /// Mark that the presentation layer started revealing feedback
    ///
    /// All input is ignored until [`Session::finish_reveal`]. A front end that
    /// animates tiles sets the flag for the length of the animation:
    ///
    /// ```
    /// use wordle_game::core::{Language, Word};
    /// use wordle_game::game::Session;
    ///
    /// let target = Word::new("crane", Language::English, 5).unwrap();
    /// let mut session = Session::new(Language::English, target, 6);
    ///
    /// session.begin_reveal();
    /// assert!(!session.append_letter('c'));
    /// session.finish_reveal();
    /// assert!(session.append_letter('c'));
    /// ```
    pub const fn begin_reveal(&mut self) {
        self.revealing = true;
    }

    pub const fn finish_reveal(&mut self) {
        self.revealing = false;
    }

    #[must_use]
    pub const fn is_revealing(&self) -> bool {
        self.revealing
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    #[must_use]
    pub fn word_length(&self) -> usize {
        self.target.len()
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    /// Submitted guesses, oldest first
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Feedback rows aligned with [`Session::guesses`]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.feedback
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    fn input_len(&self) -> usize {
        self.current_input.chars().count()
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardTracker {
        &self.keyboard
    }

    #[must_use]
    pub const fn hinted_positions(&self) -> &BTreeSet<usize> {
        &self.hinted
    }

    /// The target word, available once the game is over
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.is_over().then_some(&self.target)
    }
}
