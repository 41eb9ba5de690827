//! Core domain types for the game
//!
//! Languages, validated words and the guess evaluator.
//! Everything here is pure and has no dependency on game state.

mod feedback;
mod language;
mod word;

pub use feedback::{Feedback, LetterState, evaluate};
pub use language::Language;
pub use word::{Word, WordError};
