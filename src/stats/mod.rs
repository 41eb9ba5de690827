//! Running game statistics
//!
//! One `Stats` record per language, persisted through a [`KeyValueStore`].

mod store;

pub use store::{FileStore, KeyValueStore, MemoryStore, StatsStore};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Played/won/streak counters and the guess distribution
///
/// Serialized with the field names `played`, `won`, `streak`, `maxStreak` and `dist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub played: u32,
    pub won: u32,
    pub streak: u32,
    pub max_streak: u32,
    /// Wins keyed by the number of guesses used
    #[serde(rename = "dist")]
    pub distribution: BTreeMap<usize, u32>,
}

impl Stats {
    /// All-zero stats with a zero-filled distribution for `1..=max_guesses`
    #[must_use]
    pub fn new(max_guesses: usize) -> Self {
        Self {
            played: 0,
            won: 0,
            streak: 0,
            max_streak: 0,
            distribution: (1..=max_guesses).map(|n| (n, 0)).collect(),
        }
    }

    /// Record a win after `guess_count` guesses
    pub fn record_win(&mut self, guess_count: usize) {
        self.played += 1;
        self.won += 1;
        self.streak += 1;
        self.max_streak = self.max_streak.max(self.streak);
        *self.distribution.entry(guess_count).or_insert(0) += 1;
    }

    /// Record a loss or give-up
    pub fn record_loss(&mut self) {
        self.played += 1;
        self.streak = 0;
    }

    /// Win rate as a rounded percentage, 0 when nothing has been played
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.played == 0 {
            return 0;
        }
        (f64::from(self.won) / f64::from(self.played) * 100.0).round() as u32
    }

    /// Largest distribution bucket, at least 1, for scaling bars
    #[must_use]
    pub fn distribution_max(&self) -> u32 {
        self.distribution.values().copied().max().unwrap_or(0).max(1)
    }

    /// Wins recorded for a guess count
    #[must_use]
    pub fn wins_in(&self, guess_count: usize) -> u32 {
        self.distribution.get(&guess_count).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stats_are_zero_filled() {
        let stats = Stats::new(6);
        assert_eq!(stats.played, 0);
        assert_eq!(stats.distribution.len(), 6);
        assert!(stats.distribution.values().all(|&v| v == 0));
        assert_eq!(stats.win_percentage(), 0);
        assert_eq!(stats.distribution_max(), 1);
    }

    #[test]
    fn record_win_updates_counters() {
        let mut stats = Stats::new(6);
        stats.record_win(3);

        assert_eq!(stats.played, 1);
        assert_eq!(stats.won, 1);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.max_streak, 1);
        assert_eq!(stats.wins_in(3), 1);

        stats.record_win(3);
        assert_eq!(stats.wins_in(3), 2);
        assert_eq!(stats.streak, 2);
        assert_eq!(stats.distribution_max(), 2);
    }

    #[test]
    fn record_loss_resets_streak_only() {
        let mut stats = Stats::new(6);
        stats.record_win(2);
        stats.record_win(4);
        stats.record_loss();

        assert_eq!(stats.played, 3);
        assert_eq!(stats.won, 2);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.max_streak, 2);

        stats.record_win(1);
        assert_eq!(stats.streak, 1);
        assert_eq!(stats.max_streak, 2);
    }

    #[test]
    fn invariants_hold_over_mixed_sequence() {
        let mut stats = Stats::new(6);
        let outcomes = [Some(1), None, Some(6), Some(6), None, None, Some(2)];
        for outcome in outcomes {
            match outcome {
                Some(n) => stats.record_win(n),
                None => stats.record_loss(),
            }
            assert!(stats.played >= stats.won);
            assert_eq!(stats.distribution.values().sum::<u32>(), stats.won);
            assert!(stats.max_streak >= stats.streak);
        }
        assert_eq!(stats.win_percentage(), 57);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let mut stats = Stats::new(2);
        stats.record_win(1);
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(
            json,
            r#"{"played":1,"won":1,"streak":1,"maxStreak":1,"dist":{"1":1,"2":0}}"#
        );

        let parsed: Stats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
    }
}
