//! Durable language and theme preferences

use ahash::AHashMap;
use parking_lot::RwLock;
use tracing::warn;

use crate::error::CoreResult;
use crate::session::{Language, Theme};

/// Storage key of the language preference
pub const LANG_KEY: &str = "lang";

/// Storage key of the theme preference
pub const THEME_KEY: &str = "theme";

/// String key/value storage that outlives the process
pub trait PreferenceStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    /// Overwrite `key`
    fn set(&self, key: &str, value: &str) -> CoreResult<()>;
}

/// Volatile storage, used by tests and as a fallback
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RwLock<AHashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        self.values.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Preferences read at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Read both keys, falling back to `en` / `light` when absent or invalid
    pub fn load(storage: &dyn PreferenceStorage) -> Self {
        Self {
            language: read_or_default(storage, LANG_KEY),
            theme: read_or_default(storage, THEME_KEY),
        }
    }
}

fn read_or_default<T>(storage: &dyn PreferenceStorage, key: &str) -> T
where
    T: std::str::FromStr<Err = String> + Default,
{
    match storage.get(key) {
        Some(raw) => raw.parse().unwrap_or_else(|e: String| {
            warn!(key, error = %e, "Ignoring stored preference");
            T::default()
        }),
        None => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_absent() {
        let storage = MemoryStorage::new();
        assert_eq!(
            Preferences::load(&storage),
            Preferences {
                language: Language::En,
                theme: Theme::Light,
            }
        );
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let storage = MemoryStorage::new();
        storage.set(LANG_KEY, "klingon").unwrap();
        storage.set(THEME_KEY, "dark").unwrap();

        let prefs = Preferences::load(&storage);
        assert_eq!(prefs.language, Language::En);
        assert_eq!(prefs.theme, Theme::Dark);
    }
}
