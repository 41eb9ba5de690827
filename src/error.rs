//! Error types for the game engine
//!
//! Every recoverable condition a caller must react to is a variant here.
//! Benign no-ops (game already over, reveal in progress) are not errors.

use crate::core::Language;
use std::io;
use thiserror::Error;

/// Errors raised by game operations
#[derive(Error, Debug)]
pub enum GameError {
    /// Submitted input is shorter than the word length; input is kept
    #[error("not enough letters: got {actual}, need {required}")]
    TooShort { actual: usize, required: usize },

    /// Submitted input is well formed but not a known word; input is kept
    #[error("not in word list: {0}")]
    NotInWordList(String),

    /// Every position is already disclosed or correctly guessed
    #[error("no more hints available")]
    NoHintsAvailable,

    /// No answer of the configured length exists for the language
    #[error("no {length}-letter answer words available for language '{language}'")]
    EmptyAnswerPool { language: Language, length: usize },

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors raised by persistence backends
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
