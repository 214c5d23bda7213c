//! File-backed implementations of the FlightSnapp repositories.
//!
//! # Module Structure
//!
//! - `paths`: config directory and file locations
//! - `storage`: atomic TOML file access
//! - `dto`: the versioned `catalog.toml` layout
//! - `toml_catalog_repository`: `CatalogRepository` over `catalog.toml`
//! - `secret_service`: `SecretService` over `secret.json`

pub mod dto;
pub mod paths;
pub mod secret_service;
pub mod storage;
pub mod toml_catalog_repository;

pub use paths::SnappPaths;
pub use secret_service::{GEMINI_API_KEY_ENV, SecretServiceImpl};
pub use toml_catalog_repository::TomlCatalogRepository;
