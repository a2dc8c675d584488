//! Durable preference storage

mod file_storage;

pub use file_storage::FileStorage;
