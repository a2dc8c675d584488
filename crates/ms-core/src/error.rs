//! Error types for the core crate

use thiserror::Error;

/// Errors raised by catalog construction and store operations
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Duplicate event id '{0}' in catalog")]
    DuplicateEventId(String),

    #[error("Event '{0}' is not in the catalog")]
    UnknownEvent(String),

    #[error("No async runtime available to schedule login")]
    NoRuntime,

    #[error("Preference storage error: {0}")]
    Storage(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
