//! Game sessions and the orchestrator that wires them to words, stats and randomness
//!
//! [`Game`] owns the injected collaborators and replaces the current [`Session`]
//! on every new game. Terminal outcomes are reported to the stats store exactly once.

mod keyboard;
mod session;

pub use keyboard::KeyboardTracker;
pub use session::{GameState, Hint, Outcome, Session, Submission};

use crate::core::Language;
use crate::error::GameError;
use crate::stats::{KeyValueStore, Stats, StatsStore};
use crate::wordlists::WordRepository;
use log::{error, info};
use rand::Rng;

/// Board dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub word_length: usize,
    pub max_guesses: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_guesses: 6,
        }
    }
}

/// A running game with its collaborators
pub struct Game<S: KeyValueStore, R: Rng> {
    words: WordRepository,
    stats: StatsStore<S>,
    rng: R,
    config: GameConfig,
    session: Session,
}

impl<S: KeyValueStore, R: Rng> Game<S, R> {
    /// Start a game in `language`, or in the persisted language if `None`
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if no target can be drawn.
    pub fn new(
        words: WordRepository,
        stats: StatsStore<S>,
        mut rng: R,
        config: GameConfig,
        language: Option<Language>,
    ) -> Result<Self, GameError> {
        let language = language
            .or_else(|| stats.load_language())
            .unwrap_or_default();
        let session = Session::start(
            &words,
            language,
            config.word_length,
            config.max_guesses,
            &mut rng,
        )?;
        info!("Started {language} game");

        Ok(Self {
            words,
            stats,
            rng,
            config,
            session,
        })
    }

    /// Discard the current session and start a fresh one in the same language
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if no target can be drawn; the
    /// current session is kept in that case.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.start_session(self.session.language())
    }

    /// Switch language, persist the preference and start a new game
    ///
    /// A failed preference write is logged and does not undo the switch.
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyAnswerPool` if the language has no usable
    /// answers; the current session is kept in that case.
    pub fn set_language(&mut self, language: Language) -> Result<(), GameError> {
        self.start_session(language)?;
        if let Err(e) = self.stats.save_language(language) {
            error!("Failed to save language preference {language}: {e}");
        }
        Ok(())
    }

    fn start_session(&mut self, language: Language) -> Result<(), GameError> {
        self.session = Session::start(
            &self.words,
            language,
            self.config.word_length,
            self.config.max_guesses,
            &mut self.rng,
        )?;
        info!("Started {language} game");
        Ok(())
    }

    pub fn append_letter(&mut self, key: char) -> bool {
        self.session.append_letter(key)
    }

    pub fn delete_letter(&mut self) -> bool {
        self.session.delete_letter()
    }

    /// Submit the current input, recording stats if the game ends
    ///
    /// # Errors
    ///
    /// See [`Session::submit`].
    pub fn submit(&mut self) -> Result<Option<Submission>, GameError> {
        let submission = self.session.submit(&self.words)?;
        if let Some(outcome) = submission.as_ref().and_then(|s| s.outcome) {
            self.report(outcome);
        }
        Ok(submission)
    }

    /// Give up, recording a loss; `None` if nothing changed
    pub fn give_up(&mut self) -> Option<Outcome> {
        let outcome = self.session.give_up()?;
        self.report(outcome);
        Some(outcome)
    }

    /// Disclose one target letter
    ///
    /// # Errors
    ///
    /// See [`Session::request_hint`].
    pub fn request_hint(&mut self) -> Result<Option<Hint>, GameError> {
        self.session.request_hint(&mut self.rng)
    }

    pub const fn begin_reveal(&mut self) {
        self.session.begin_reveal();
    }

    pub const fn finish_reveal(&mut self) {
        self.session.finish_reveal();
    }

    fn report(&mut self, outcome: Outcome) {
        let language = self.session.language();
        let result = match outcome {
            Outcome::Won { guesses } => self.stats.record_win(language, guesses),
            Outcome::Lost => self.stats.record_loss(language),
        };
        if let Err(e) = result {
            error!("Failed to save {language} stats: {e}");
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn language(&self) -> Language {
        self.session.language()
    }

    /// Current stats snapshot for the active language
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats.load(self.session.language())
    }

    #[must_use]
    pub const fn stats_store(&self) -> &StatsStore<S> {
        &self.stats
    }
}
