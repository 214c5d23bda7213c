//! Data transfer objects for persisted files.

mod catalog;

pub use catalog::{CATALOG_SCHEMA_VERSION, CatalogFileV1, VaycoverDto};
