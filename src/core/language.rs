//! Supported game languages and their alphabets

use crate::error::GameError;
use std::fmt;
use std::str::FromStr;

/// Letters German adds on top of the basic Latin alphabet
const GERMAN_EXTRA: [char; 4] = ['ä', 'ö', 'ü', 'ß'];

/// A language the game can be played in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    German,
}

impl Language {
    pub const ALL: [Self; 2] = [Self::English, Self::German];

    /// Short code used for persistence keys and the command line
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::German => "de",
        }
    }

    /// Every letter of the alphabet, basic Latin first
    pub fn letters(self) -> impl Iterator<Item = char> {
        let extra: &[char] = match self {
            Self::English => &[],
            Self::German => &GERMAN_EXTRA,
        };
        ('a'..='z').chain(extra.iter().copied())
    }

    /// Check whether a lowercase letter belongs to this language's alphabet
    #[must_use]
    pub fn contains(self, letter: char) -> bool {
        letter.is_ascii_lowercase() || (self == Self::German && GERMAN_EXTRA.contains(&letter))
    }

    /// Lowercase a key and return it if it is a letter of this alphabet
    ///
    /// Keys whose lowercase form is more than one character are rejected.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Language;
    ///
    /// assert_eq!(Language::German.normalize('Ä'), Some('ä'));
    /// assert_eq!(Language::English.normalize('Ä'), None);
    /// assert_eq!(Language::English.normalize('Q'), Some('q'));
    /// ```
    #[must_use]
    pub fn normalize(self, key: char) -> Option<char> {
        let mut lower = key.to_lowercase();
        let letter = lower.next()?;
        if lower.next().is_some() {
            return None;
        }
        self.contains(letter).then_some(letter)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "de" | "german" | "deutsch" => Ok(Self::German),
            other => Err(GameError::UnknownLanguage(other.to_string())),
        }
    }
}
