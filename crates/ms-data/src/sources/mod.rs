pub mod json_source;

pub use json_source::JsonCatalogSource;
