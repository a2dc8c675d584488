//! Memoized filter results

use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::RwLock;

use super::FilterSpec;
use crate::catalog::Event;

/// Cache of visible lists keyed by catalog identity and spec value
pub struct ResultCache {
    entries: Arc<RwLock<AHashMap<(u64, FilterSpec), Arc<[Event]>>>>,
    /// Maximum number of specs to remember
    max_entries: usize,
}

impl ResultCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            entries: Arc::new(RwLock::new(AHashMap::new())),
            max_entries,
        }
    }

    pub fn get(&self, catalog_id: u64, spec: &FilterSpec) -> Option<Arc<[Event]>> {
        self.entries
            .read()
            .get(&(catalog_id, spec.clone()))
            .cloned()
    }

    pub fn put(&self, catalog_id: u64, spec: FilterSpec, events: Arc<[Event]>) {
        if self.max_entries == 0 {
            return;
        }

        let mut entries = self.entries.write();
        let key = (catalog_id, spec);

        // Evict an arbitrary entry when full
        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            if let Some(evict) = entries.keys().next().cloned() {
                entries.remove(&evict);
            }
        }

        entries.insert(key, events);
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new(32)
    }
}
