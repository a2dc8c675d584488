//! Catalog filtering: the filter specification, its reset policy and the
//! engine that derives the visible event list from it.

mod cache;
mod engine;
mod reset;

pub use cache::ResultCache;
pub use engine::{compute_visible, home_preview, FilterEngine, HomePreview, SEE_MORE_THRESHOLD};
pub use reset::{axes_reset_by, RESET_POLICY};

use serde::{Deserialize, Serialize};

use crate::catalog::EventType;

/// Type axis: either every type or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TypeFilter {
    #[default]
    All,
    Only(EventType),
}

impl TypeFilter {
    pub fn matches(&self, event_type: EventType) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(t) => *t == event_type,
        }
    }
}

/// Status axis of the directory listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    Upcoming,
    Archived,
}

impl StatusFilter {
    pub fn matches(&self, is_archived: bool) -> bool {
        match self {
            StatusFilter::Upcoming => !is_archived,
            StatusFilter::Archived => is_archived,
        }
    }
}

/// The active combination of filter selections
///
/// Exactly one value is active per axis. `Default` is the neutral spec:
/// all types, empty query, no specialty, upcoming events.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterSpec {
    pub event_type: TypeFilter,
    pub query: String,
    pub specialty: Option<String>,
    pub status: StatusFilter,
}

/// One independently selectable dimension of a [`FilterSpec`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAxis {
    Type,
    Query,
    Specialty,
    Status,
}

/// A user-initiated change to the filter specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Home page search box
    Search(String),
    /// Directory page search box
    DirectorySearch(String),
    SetType(TypeFilter),
    SelectSpecialty(String),
    SetStatus(StatusFilter),
    ClearAll,
}

/// Payload-free discriminant of [`FilterAction`], used as the reset table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterActionKind {
    Search,
    DirectorySearch,
    SetType,
    SelectSpecialty,
    SetStatus,
    ClearAll,
}

impl FilterAction {
    pub fn kind(&self) -> FilterActionKind {
        match self {
            FilterAction::Search(_) => FilterActionKind::Search,
            FilterAction::DirectorySearch(_) => FilterActionKind::DirectorySearch,
            FilterAction::SetType(_) => FilterActionKind::SetType,
            FilterAction::SelectSpecialty(_) => FilterActionKind::SelectSpecialty,
            FilterAction::SetStatus(_) => FilterActionKind::SetStatus,
            FilterAction::ClearAll => FilterActionKind::ClearAll,
        }
    }
}

impl FilterSpec {
    /// Return one axis to its neutral value
    pub fn reset_axis(&mut self, axis: FilterAxis) {
        match axis {
            FilterAxis::Type => self.event_type = TypeFilter::All,
            FilterAxis::Query => self.query.clear(),
            FilterAxis::Specialty => self.specialty = None,
            FilterAxis::Status => self.status = StatusFilter::Upcoming,
        }
    }

    /// Apply an action: first clear the axes the reset policy names for it,
    /// then set the action's own axis.
    ///
    /// Returns whether the spec changed.
    pub fn apply(&mut self, action: FilterAction) -> bool {
        let before = self.clone();

        for axis in axes_reset_by(action.kind()) {
            self.reset_axis(*axis);
        }

        match action {
            FilterAction::Search(query) | FilterAction::DirectorySearch(query) => {
                self.query = query;
            }
            FilterAction::SetType(event_type) => self.event_type = event_type,
            FilterAction::SelectSpecialty(specialty) => self.specialty = Some(specialty),
            FilterAction::SetStatus(status) => self.status = status,
            FilterAction::ClearAll => {}
        }

        *self != before
    }

    /// Whether every axis holds its neutral value
    pub fn is_neutral(&self) -> bool {
        *self == FilterSpec::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn busy_spec() -> FilterSpec {
        FilterSpec {
            event_type: TypeFilter::Only(EventType::Workshop),
            query: "surgery".to_string(),
            specialty: Some("Surgery".to_string()),
            status: StatusFilter::Archived,
        }
    }

    #[test]
    fn test_search_resets_type_and_specialty() {
        let mut spec = busy_spec();
        spec.apply(FilterAction::Search("brain".to_string()));

        assert_eq!(spec.query, "brain");
        assert_eq!(spec.event_type, TypeFilter::All);
        assert_eq!(spec.specialty, None);
        assert_eq!(spec.status, StatusFilter::Archived);
    }

    #[test]
    fn test_set_type_leaves_other_axes() {
        let mut spec = busy_spec();
        spec.apply(FilterAction::SetType(TypeFilter::Only(EventType::Webinar)));

        assert_eq!(spec.event_type, TypeFilter::Only(EventType::Webinar));
        assert_eq!(spec.query, "surgery");
        assert_eq!(spec.specialty.as_deref(), Some("Surgery"));
    }

    #[test]
    fn test_select_specialty_resets_everything_else() {
        let mut spec = busy_spec();
        spec.apply(FilterAction::SelectSpecialty("Oncology".to_string()));

        assert_eq!(
            spec,
            FilterSpec {
                specialty: Some("Oncology".to_string()),
                ..FilterSpec::default()
            }
        );
    }

    #[test]
    fn test_directory_search_sets_query_only() {
        let mut spec = busy_spec();
        spec.apply(FilterAction::DirectorySearch("oran".to_string()));

        assert_eq!(spec.query, "oran");
        assert_eq!(spec.event_type, TypeFilter::Only(EventType::Workshop));
        assert_eq!(spec.specialty.as_deref(), Some("Surgery"));
    }

    #[test]
    fn test_clear_all_idempotent() {
        let mut once = busy_spec();
        once.apply(FilterAction::ClearAll);
        let mut twice = once.clone();
        let changed = twice.apply(FilterAction::ClearAll);

        assert!(once.is_neutral());
        assert_eq!(once, twice);
        assert!(!changed);
    }
}
