//! Dictionary cache
//!
//! Dictionaries are read from disk once per path and shared afterwards. Each path
//! gets its own slot, so switching dictionaries within a process never returns a
//! stale list.

use super::loader::load_from_file;
use crate::error::DictionaryLoadError;
use rustc_hash::FxHashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock, PoisonError, RwLock};
use tracing::{debug, error, info};

/// A loaded dictionary, shared between queries
pub type Dictionary = Arc<[String]>;

/// Path-keyed dictionary cache
#[derive(Debug, Default)]
pub struct DictionaryStore {
    cache: RwLock<FxHashMap<PathBuf, Dictionary>>,
}

impl DictionaryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store
    pub fn global() -> &'static Self {
        static STORE: OnceLock<DictionaryStore> = OnceLock::new();
        STORE.get_or_init(Self::new)
    }

    /// Load a dictionary, reading the file only on first use of `path`
    ///
    /// Failed loads are not cached; a later call retries the read.
    ///
    /// # Errors
    ///
    /// Returns `DictionaryLoadError` if the file is missing or unreadable.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Dictionary, DictionaryLoadError> {
        let path = path.as_ref();

        if let Some(words) = self.cached(path) {
            debug!(path = %path.display(), words = words.len(), "dictionary cache hit");
            return Ok(words);
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);

        // Another caller may have loaded it while we waited for the write lock
        if let Some(words) = cache.get(path) {
            return Ok(Arc::clone(words));
        }

        let words: Dictionary = load_from_file(path)
            .map_err(|source| DictionaryLoadError {
                path: path.to_path_buf(),
                source,
            })?
            .into();

        info!(path = %path.display(), words = words.len(), "dictionary loaded");
        cache.insert(path.to_path_buf(), Arc::clone(&words));
        Ok(words)
    }

    /// Load a dictionary, degrading to an empty list on failure
    ///
    /// The failure is logged so the caller still gets a diagnostic.
    pub fn load_or_empty(&self, path: impl AsRef<Path>) -> Dictionary {
        self.load(path).unwrap_or_else(|e| {
            error!("{e}");
            Arc::from(Vec::new())
        })
    }

    /// Check whether `path` has already been loaded
    #[must_use]
    pub fn is_cached(&self, path: impl AsRef<Path>) -> bool {
        self.cached(path.as_ref()).is_some()
    }

    /// Number of cached dictionaries
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cached(&self, path: &Path) -> Option<Dictionary> {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(path)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dict(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_reads_and_caches() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(&dir, "words.txt", "Apple\nbanana\n");
        let store = DictionaryStore::new();

        let words = store.load(&path).unwrap();
        assert_eq!(&*words, &["apple".to_string(), "banana".to_string()]);
        assert!(store.is_cached(&path));
    }

    #[test]
    fn same_path_does_not_reread_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(&dir, "words.txt", "apple\n");
        let store = DictionaryStore::new();

        let first = store.load(&path).unwrap();
        fs::write(&path, "changed\n").unwrap();
        let second = store.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(&*second, &["apple".to_string()]);
    }

    #[test]
    fn different_path_loads_fresh() {
        let dir = tempfile::tempdir().unwrap();
        let first_path = write_dict(&dir, "one.txt", "apple\n");
        let second_path = write_dict(&dir, "two.txt", "pangram\n");
        let store = DictionaryStore::new();

        let first = store.load(&first_path).unwrap();
        let second = store.load(&second_path).unwrap();

        assert_eq!(&*first, &["apple".to_string()]);
        assert_eq!(&*second, &["pangram".to_string()]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn missing_file_is_an_error_and_not_cached() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let store = DictionaryStore::new();

        let err = store.load(&path).unwrap_err();
        assert_eq!(err.path, path);
        assert!(!store.is_cached(&path));

        // Creating the file afterwards makes the next load succeed
        fs::write(&path, "apple\n").unwrap();
        assert_eq!(store.load(&path).unwrap().len(), 1);
    }

    #[test]
    fn load_or_empty_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let store = DictionaryStore::new();

        let words = store.load_or_empty(dir.path().join("missing.txt"));
        assert!(words.is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn concurrent_first_access_shares_one_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dict(&dir, "words.txt", "apple\npangram\n");
        let store = DictionaryStore::new();

        let loaded: Vec<Dictionary> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..8).map(|_| s.spawn(|| store.load(&path).unwrap())).collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for words in &loaded[1..] {
            assert!(Arc::ptr_eq(&loaded[0], words));
        }
    }

    #[test]
    fn global_store_is_shared() {
        assert!(std::ptr::eq(DictionaryStore::global(), DictionaryStore::global()));
    }
}
