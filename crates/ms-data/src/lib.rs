//! Data sources for the MedSymposium directory: the built-in event fixture,
//! JSON catalog files, preference storage and application configuration.

pub mod config;
pub mod fixtures;
pub mod index;
pub mod sources;
pub mod storage;

use thiserror::Error;

// Re-exports
pub use config::AppConfig;
pub use fixtures::{builtin_catalog, SPECIALTIES};
pub use index::CategoryIndex;
pub use sources::JsonCatalogSource;
pub use storage::FileStorage;

/// Errors that can occur in data operations
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] ms_core::CoreError),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type DataResult<T> = Result<T, DataError>;
