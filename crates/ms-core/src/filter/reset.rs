//! Which filter axes each action clears
//!
//! Filter modes are mutually exclusive: a specialty pick starts from a clean
//! slate, a home search drops the type and specialty picks. Status stays
//! orthogonal except for the specialty pick and a full clear. This table is
//! the single place that defines those rules.

use super::{FilterActionKind, FilterAxis};

/// Action -> axes returned to neutral before the action's own axis is set
pub const RESET_POLICY: [(FilterActionKind, &[FilterAxis]); 6] = [
    (
        FilterActionKind::Search,
        &[FilterAxis::Specialty, FilterAxis::Type],
    ),
    (FilterActionKind::DirectorySearch, &[]),
    (FilterActionKind::SetType, &[]),
    (
        FilterActionKind::SelectSpecialty,
        &[FilterAxis::Query, FilterAxis::Type, FilterAxis::Status],
    ),
    (FilterActionKind::SetStatus, &[]),
    (
        FilterActionKind::ClearAll,
        &[
            FilterAxis::Type,
            FilterAxis::Query,
            FilterAxis::Specialty,
            FilterAxis::Status,
        ],
    ),
];

/// Axes cleared by an action of the given kind
pub fn axes_reset_by(kind: FilterActionKind) -> &'static [FilterAxis] {
    RESET_POLICY
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, axes)| *axes)
        .unwrap_or(&[])
}
