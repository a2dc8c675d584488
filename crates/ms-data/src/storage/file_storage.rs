//! Preferences kept in a small JSON file

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use ms_core::{CoreError, CoreResult, PreferenceStorage};
use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::DataResult;

/// File name used inside the data directory
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Key/value preferences stored as one JSON object
///
/// The file is read once when opened and rewritten on every `set`.
pub struct FileStorage {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open `path`, starting empty when it does not exist yet
    pub fn open(path: impl Into<PathBuf>) -> DataResult<Self> {
        let path = path.into();
        let values = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(values) => values,
                Err(e) => {
                    warn!(path = ?path, error = %e, "Unreadable preferences, starting fresh");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = ?path, entries = values.len(), "Opened preference storage");
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Open `preferences.json` inside `dir`
    pub fn in_dir(dir: &Path) -> DataResult<Self> {
        Self::open(dir.join(PREFERENCES_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_file(&self, values: &BTreeMap<String, String>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(values)?;
        std::fs::write(&self.path, content)
    }
}

impl PreferenceStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        let mut values = self.values.write();
        values.insert(key.to_string(), value.to_string());
        self.write_file(&values)
            .map_err(|e| CoreError::Storage(format!("Could not write {:?}: {}", self.path, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::preferences::{LANG_KEY, THEME_KEY};
    use ms_core::{Language, MemoryStorage, Preferences, SessionStore, Theme};
    use std::sync::Arc;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileStorage::in_dir(dir.path()).unwrap();
        storage.set(LANG_KEY, "fr").unwrap();
        storage.set(THEME_KEY, "dark").unwrap();
        storage.set(LANG_KEY, "en").unwrap();

        let reopened = FileStorage::in_dir(dir.path()).unwrap();
        assert_eq!(reopened.get(LANG_KEY).as_deref(), Some("en"));
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn test_corrupt_file_starts_fresh() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFERENCES_FILE), "not json").unwrap();

        let storage = FileStorage::in_dir(dir.path()).unwrap();
        assert_eq!(Preferences::load(&storage), Preferences::default());
    }

    #[test]
    fn test_language_round_trip_through_restart() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = crate::builtin_catalog().unwrap();

        let store = SessionStore::new(
            catalog.clone(),
            Arc::new(FileStorage::in_dir(dir.path()).unwrap()),
        );
        store.set_language(Language::Fr);
        drop(store);

        let store = SessionStore::new(catalog, Arc::new(FileStorage::in_dir(dir.path()).unwrap()));
        assert_eq!(store.language(), Language::Fr);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[test]
    fn test_memory_storage_is_not_durable() {
        let catalog = crate::builtin_catalog().unwrap();
        let store = SessionStore::new(catalog.clone(), Arc::new(MemoryStorage::new()));
        store.set_language(Language::Fr);

        let fresh = SessionStore::new(catalog, Arc::new(MemoryStorage::new()));
        assert_eq!(fresh.language(), Language::En);
    }
}
