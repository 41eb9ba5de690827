//! Best-known feedback per letter across a session's guesses

use crate::core::{Feedback, LetterState, Word};
use rustc_hash::FxHashMap;

/// Aggregated letter states for the on-screen keyboard
///
/// A letter's state only ever upgrades: absent → present → correct.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardTracker {
    states: FxHashMap<char, LetterState>,
}

impl KeyboardTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one guess's feedback into the tracker
    pub fn update(&mut self, guess: &Word, feedback: &Feedback) {
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            self.states
                .entry(letter)
                .and_modify(|known| *known = (*known).max(state))
                .or_insert(state);
        }
    }

    /// State of a letter, `None` if it has not been guessed yet
    #[must_use]
    pub fn state_of(&self, letter: char) -> Option<LetterState> {
        self.states.get(&letter).copied()
    }

    /// All known letters and their states, sorted by letter
    #[must_use]
    pub fn snapshot(&self) -> Vec<(char, LetterState)> {
        let mut entries: Vec<_> = self.states.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Language, evaluate};

    fn word(text: &str) -> Word {
        Word::new(text, Language::English, 5).unwrap()
    }

    fn guess(tracker: &mut KeyboardTracker, g: &str, target: &str) {
        let g = word(g);
        let feedback = evaluate(&g, &word(target));
        tracker.update(&g, &feedback);
    }

    #[test]
    fn unknown_letters_have_no_state() {
        let tracker = KeyboardTracker::new();
        assert_eq!(tracker.state_of('a'), None);
        assert!(tracker.snapshot().is_empty());
    }

    #[test]
    fn records_states_from_one_guess() {
        let mut tracker = KeyboardTracker::new();
        guess(&mut tracker, "trace", "crane");

        assert_eq!(tracker.state_of('t'), Some(LetterState::Absent));
        assert_eq!(tracker.state_of('r'), Some(LetterState::Correct));
        assert_eq!(tracker.state_of('c'), Some(LetterState::Present));
        assert_eq!(tracker.state_of('z'), None);
    }

    #[test]
    fn states_only_upgrade() {
        let mut tracker = KeyboardTracker::new();

        // c present, then correct, then absent in a later duplicate
        guess(&mut tracker, "trace", "crane");
        assert_eq!(tracker.state_of('c'), Some(LetterState::Present));

        guess(&mut tracker, "crane", "crane");
        assert_eq!(tracker.state_of('c'), Some(LetterState::Correct));

        guess(&mut tracker, "cocci", "crane");
        assert_eq!(tracker.state_of('c'), Some(LetterState::Correct));
    }

    #[test]
    fn same_guess_duplicate_keeps_best() {
        // First e absent (copy consumed by exact match), last e correct
        let mut tracker = KeyboardTracker::new();
        guess(&mut tracker, "geese", "crane");
        assert_eq!(tracker.state_of('e'), Some(LetterState::Correct));
    }

    #[test]
    fn monotonic_over_sequence() {
        let mut tracker = KeyboardTracker::new();
        let mut previous = tracker.clone();

        for g in ["house", "trace", "eerie", "crane", "abcde"] {
            guess(&mut tracker, g, "crane");
            for (letter, state) in previous.snapshot() {
                assert!(tracker.state_of(letter).unwrap() >= state);
            }
            previous = tracker.clone();
        }
    }

    #[test]
    fn clear_resets() {
        let mut tracker = KeyboardTracker::new();
        guess(&mut tracker, "trace", "crane");
        tracker.clear();
        assert_eq!(tracker, KeyboardTracker::new());
    }
}
