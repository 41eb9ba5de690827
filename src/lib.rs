//! Wordle Game
//!
//! The engine behind a Wordle-style word game: guess evaluation, per-game state,
//! keyboard feedback and per-language statistics. Rendering is left to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use wordle_game::core::Language;
//! use wordle_game::game::{Game, GameConfig};
//! use wordle_game::stats::{MemoryStore, StatsStore};
//! use wordle_game::wordlists::WordRepository;
//!
//! let mut game = Game::new(
//!     WordRepository::embedded(),
//!     StatsStore::new(MemoryStore::default(), 6),
//!     StdRng::seed_from_u64(7),
//!     GameConfig::default(),
//!     Some(Language::English),
//! )
//! .unwrap();
//!
//! for key in "crane".chars() {
//!     game.append_letter(key);
//! }
//! let submission = game.submit().unwrap().unwrap();
//! println!("{}", submission.feedback);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Game sessions and orchestration
pub mod game;

// Statistics and persistence
pub mod stats;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
