//! Terminal output formatting
//!
//! Display utilities for the command-line front end.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_hint, print_keyboard, print_outcome, print_stats};
