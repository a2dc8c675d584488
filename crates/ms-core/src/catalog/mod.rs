//! The immutable event catalog

mod event;

pub use event::{Event, EventId, EventType, Session, Speaker};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use ahash::AHashSet;

use crate::error::{CoreError, CoreResult};

static NEXT_CATALOG_ID: AtomicU64 = AtomicU64::new(1);

/// A fixed collection of events available for filtering
///
/// Cloning is cheap: clones share the same event slice and identity.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Identity used to key memoized filter results
    id: u64,
    events: Arc<[Event]>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate event ids
    pub fn new(events: Vec<Event>) -> CoreResult<Self> {
        let mut seen = AHashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id.as_str()) {
                return Err(CoreError::DuplicateEventId(event.id.clone()));
            }
        }

        Ok(Self {
            id: NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed),
            events: events.into(),
        })
    }

    /// A catalog with no events
    pub fn empty() -> Self {
        Self {
            id: NEXT_CATALOG_ID.fetch_add(1, Ordering::Relaxed),
            events: Arc::from(Vec::new()),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events in fixture order
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Look up an event by id
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = AHashSet::new();
        self.events
            .iter()
            .map(|e| e.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }
}
