//! Command implementations

pub mod check;
pub mod play;

pub use check::{CheckResult, check_guess};
pub use play::{PlayCommand, run_play};
