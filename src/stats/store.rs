//! Persistence backends and the per-language statistics store

use super::Stats;
use crate::core::Language;
use crate::error::StoreError;
use log::{debug, warn};
use rustc_hash::FxHashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

const LANGUAGE_KEY: &str = "lang";

/// String key-value persistence
pub trait KeyValueStore {
    /// Read a value, `None` if the key was never written
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: FxHashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One JSON file per key inside a directory
///
/// Writes go to a temporary file that is renamed over the old one, so readers
/// see either the previous or the new value. Last write wins.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// Statistics persisted per language under `stats-<lang>`
///
/// Every update reads the latest record, applies the change to a copy and
/// writes it back in one `set`, so a failed write leaves the old record intact.
#[derive(Debug, Clone)]
pub struct StatsStore<S: KeyValueStore> {
    store: S,
    max_guesses: usize,
}

impl<S: KeyValueStore> StatsStore<S> {
    pub const fn new(store: S, max_guesses: usize) -> Self {
        Self { store, max_guesses }
    }

    fn stats_key(language: Language) -> String {
        format!("stats-{}", language.code())
    }

    /// Load the record for a language
    ///
    /// Absent or unreadable records yield all-zero stats.
    pub fn load(&self, language: Language) -> Stats {
        self.try_load(language).unwrap_or_else(|e| {
            warn!("Failed to read stats-{}: {e}", language.code());
            Stats::new(self.max_guesses)
        })
    }

    /// Load the record for an update
    ///
    /// Backend failures propagate so an update never overwrites a record it
    /// could not read. A corrupt record is replaced.
    fn try_load(&self, language: Language) -> Result<Stats, StoreError> {
        let key = Self::stats_key(language);
        let Some(raw) = self.store.get(&key)? else {
            return Ok(Stats::new(self.max_guesses));
        };

        Ok(serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Ignoring corrupt {key} record: {e}");
            Stats::new(self.max_guesses)
        }))
    }

    /// Replace the record for a language
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if serialization or the write fails.
    pub fn save(&mut self, language: Language, stats: &Stats) -> Result<(), StoreError> {
        let json = serde_json::to_string(stats)?;
        self.store.set(&Self::stats_key(language), &json)
    }

    /// Record a win and return the updated snapshot
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated record cannot be written.
    pub fn record_win(&mut self, language: Language, guess_count: usize) -> Result<Stats, StoreError> {
        let mut stats = self.try_load(language)?;
        stats.record_win(guess_count);
        self.save(language, &stats)?;
        debug!("Recorded {language} win in {guess_count}: streak {}", stats.streak);
        Ok(stats)
    }

    /// Record a loss and return the updated snapshot
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the updated record cannot be written.
    pub fn record_loss(&mut self, language: Language) -> Result<Stats, StoreError> {
        let mut stats = self.try_load(language)?;
        stats.record_loss();
        self.save(language, &stats)?;
        debug!("Recorded {language} loss after {} games", stats.played);
        Ok(stats)
    }

    /// Persisted active language, if any
    pub fn load_language(&self) -> Option<Language> {
        match self.store.get(LANGUAGE_KEY) {
            Ok(raw) => raw.and_then(|code| code.parse().ok()),
            Err(e) => {
                warn!("Failed to read language preference: {e}");
                None
            }
        }
    }

    /// Persist the active language
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn save_language(&mut self, language: Language) -> Result<(), StoreError> {
        self.store.set(LANGUAGE_KEY, language.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Backend whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    /// Backend whose reads fail while `failing` is set
    struct FlakyStore {
        inner: MemoryStore,
        failing: bool,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
            if self.failing {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "unavailable").into());
            }
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
            self.inner.set(key, value)
        }
    }

    #[test]
    fn absent_record_defaults_to_zero() {
        let store = StatsStore::new(MemoryStore::default(), 6);
        assert_eq!(store.load(Language::English), Stats::new(6));
    }

    #[test]
    fn records_are_keyed_per_language() {
        let mut store = StatsStore::new(MemoryStore::default(), 6);
        store.record_win(Language::English, 2).unwrap();
        store.record_loss(Language::German).unwrap();

        let en = store.load(Language::English);
        let de = store.load(Language::German);
        assert_eq!((en.played, en.won, en.wins_in(2)), (1, 1, 1));
        assert_eq!((de.played, de.won, de.streak), (1, 0, 0));

        assert!(store.store.get("stats-en").unwrap().is_some());
        assert!(store.store.get("stats-de").unwrap().is_some());
    }

    #[test]
    fn record_win_then_loss() {
        let mut store = StatsStore::new(MemoryStore::default(), 6);
        let after_win = store.record_win(Language::English, 4).unwrap();
        assert_eq!(after_win.streak, 1);

        let after_loss = store.record_loss(Language::English).unwrap();
        assert_eq!(after_loss.played, 2);
        assert_eq!(after_loss.won, 1);
        assert_eq!(after_loss.streak, 0);
        assert_eq!(after_loss.max_streak, 1);
    }

    #[test]
    fn corrupt_record_is_treated_as_absent() {
        let mut backend = MemoryStore::default();
        backend.set("stats-en", "{not json").unwrap();

        let mut store = StatsStore::new(backend, 6);
        assert_eq!(store.load(Language::English), Stats::new(6));

        let stats = store.record_win(Language::English, 1).unwrap();
        assert_eq!(stats.played, 1);
    }

    #[test]
    fn reads_records_with_dist_map() {
        let mut backend = MemoryStore::default();
        backend
            .set(
                "stats-de",
                r#"{"played":5,"won":3,"streak":2,"maxStreak":3,"dist":{"1":0,"2":1,"3":2,"4":0,"5":0,"6":0}}"#,
            )
            .unwrap();

        let store = StatsStore::new(backend, 6);
        let stats = store.load(Language::German);
        assert_eq!(stats.max_streak, 3);
        assert_eq!(stats.wins_in(3), 2);
    }

    #[test]
    fn failed_write_leaves_record_unchanged() {
        let mut inner = MemoryStore::default();
        let mut seed = Stats::new(6);
        seed.record_win(3);
        inner
            .set("stats-en", &serde_json::to_string(&seed).unwrap())
            .unwrap();

        let mut store = StatsStore::new(ReadOnlyStore(inner), 6);
        assert!(store.record_win(Language::English, 1).is_err());
        assert!(store.record_loss(Language::English).is_err());
        assert_eq!(store.load(Language::English), seed);
    }

    #[test]
    fn read_failure_does_not_overwrite_record() {
        let mut seed = Stats::new(6);
        for _ in 0..10 {
            seed.record_win(3);
        }
        let mut inner = MemoryStore::default();
        inner
            .set("stats-en", &serde_json::to_string(&seed).unwrap())
            .unwrap();

        let mut store = StatsStore::new(FlakyStore { inner, failing: true }, 6);
        assert!(store.record_win(Language::English, 1).is_err());
        assert!(store.record_loss(Language::English).is_err());
        assert_eq!(store.load(Language::English), Stats::new(6));

        store.store.failing = false;
        assert_eq!(store.load(Language::English), seed);

        let stats = store.record_win(Language::English, 1).unwrap();
        assert_eq!((stats.played, stats.won, stats.streak), (11, 11, 11));
    }

    #[test]
    fn language_preference_round_trip() {
        let mut store = StatsStore::new(MemoryStore::default(), 6);
        assert_eq!(store.load_language(), None);

        store.save_language(Language::German).unwrap();
        assert_eq!(store.load_language(), Some(Language::German));
    }

    #[test]
    fn file_store_persists_between_instances() {
        let dir = tempfile::tempdir().unwrap();

        let mut store = StatsStore::new(FileStore::open(dir.path()).unwrap(), 6);
        store.record_win(Language::English, 5).unwrap();
        store.save_language(Language::German).unwrap();

        let reopened = StatsStore::new(FileStore::open(dir.path()).unwrap(), 6);
        assert_eq!(reopened.load(Language::English).wins_in(5), 1);
        assert_eq!(reopened.load_language(), Some(Language::German));
        assert!(dir.path().join("stats-en.json").exists());
        assert!(!dir.path().join("stats-en.json.tmp").exists());
    }

    #[test]
    fn file_store_failed_rename_removes_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the target makes the rename fail
        fs::create_dir_all(dir.path().join("stats-en.json").join("occupied")).unwrap();

        let mut store = FileStore::open(dir.path()).unwrap();
        assert!(store.set("stats-en", "{}").is_err());
        assert!(!dir.path().join("stats-en.json.tmp").exists());
    }

    #[test]
    fn file_store_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("nested")).unwrap();
        assert_eq!(store.get("stats-en").unwrap(), None);
    }
}
