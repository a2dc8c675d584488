//! Predicate composition over the catalog

use std::sync::Arc;

use tracing::debug;

use super::{FilterAction, FilterSpec, ResultCache};
use crate::catalog::{Catalog, Event};

/// The home page offers "see more" once its list is longer than this
pub const SEE_MORE_THRESHOLD: usize = 3;

/// Type, text and specialty predicates; status is applied by the caller
fn matches_selection(event: &Event, spec: &FilterSpec, needle_lower: &str) -> bool {
    let type_match = spec.event_type.matches(event.event_type);
    let text_match = needle_lower.is_empty() || event.matches_text(needle_lower);
    let specialty_match = spec
        .specialty
        .as_deref()
        .map_or(true, |specialty| specialty == event.category);

    type_match && text_match && specialty_match
}

/// Events of the full directory listing for `spec`, in catalog order
pub fn compute_visible<'a>(catalog: &'a Catalog, spec: &FilterSpec) -> Vec<&'a Event> {
    let needle = spec.query.to_lowercase();
    catalog
        .iter()
        .filter(|e| matches_selection(e, spec, &needle) && spec.status.matches(e.is_archived))
        .collect()
}

/// The home page event section
#[derive(Debug, Clone, PartialEq)]
pub struct HomePreview {
    /// Matching events that are not archived
    pub events: Vec<Event>,
    /// Whether the "see more" link to the directory is offered
    pub show_see_more: bool,
}

/// Home page list: ignores the status axis and always hides archived events
pub fn home_preview(catalog: &Catalog, spec: &FilterSpec) -> HomePreview {
    let needle = spec.query.to_lowercase();
    let events: Vec<Event> = catalog
        .iter()
        .filter(|e| !e.is_archived && matches_selection(e, spec, &needle))
        .cloned()
        .collect();

    HomePreview {
        show_see_more: events.len() > SEE_MORE_THRESHOLD,
        events,
    }
}

/// Owns the filter specification and the visible list derived from it
pub struct FilterEngine {
    catalog: Catalog,
    spec: FilterSpec,
    visible: Arc<[Event]>,
    cache: ResultCache,
}

impl FilterEngine {
    /// Create an engine with the neutral spec
    pub fn new(catalog: Catalog) -> Self {
        let mut engine = Self {
            catalog,
            spec: FilterSpec::default(),
            visible: Arc::from(Vec::new()),
            cache: ResultCache::default(),
        };
        engine.recompute();
        engine
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn spec(&self) -> &FilterSpec {
        &self.spec
    }

    /// Directory listing for the current spec
    pub fn visible(&self) -> Arc<[Event]> {
        self.visible.clone()
    }

    pub fn home_preview(&self) -> HomePreview {
        home_preview(&self.catalog, &self.spec)
    }

    /// Apply an action and recompute when the spec changed
    ///
    /// Returns whether the spec changed.
    pub fn apply(&mut self, action: FilterAction) -> bool {
        let changed = self.spec.apply(action);
        if changed {
            self.recompute();
        }
        changed
    }

    fn recompute(&mut self) {
        if let Some(hit) = self.cache.get(self.catalog.id(), &self.spec) {
            self.visible = hit;
            return;
        }

        let visible: Arc<[Event]> = compute_visible(&self.catalog, &self.spec)
            .into_iter()
            .cloned()
            .collect();

        debug!(
            spec = ?self.spec,
            visible = visible.len(),
            total = self.catalog.len(),
            "Recomputed visible events"
        );

        self.cache
            .put(self.catalog.id(), self.spec.clone(), visible.clone());
        self.visible = visible;
    }
}
