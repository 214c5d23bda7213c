//! Core domain for FlightSnapp: Big Five scoring, persona selection,
//! compatibility, vaycovers and the curator payload.
//!
//! # Module Structure
//!
//! - `big_five`: traits and the normalized `TraitVector`
//! - `quiz`: question catalog, trait aggregation, the quiz session
//! - `persona`: persona catalog and best-match selection
//! - `compatibility`: cosine-similarity percentage
//! - `scorer`: `PersonaScorer`, the end-to-end scoring facade
//! - `vaycover`: group trips ranked by compatibility
//! - `curator`: trip settings, curator request/response, `TextGenerator`
//! - `repository`: the `Catalog` bundle and `CatalogRepository`
//! - `config`: secret configuration
//! - `error`: `SnappError`

pub mod big_five;
pub mod compatibility;
pub mod config;
pub mod curator;
pub mod error;
pub mod persona;
pub mod quiz;
pub mod repository;
pub mod scorer;
pub mod vaycover;

// Re-export common types
pub use big_five::{Trait, TraitVector};
pub use compatibility::{CompatibilityScore, compute_compatibility};
pub use error::{Result, SnappError};
pub use persona::{Persona, PersonaCatalog, ScoredPersona, select_persona};
pub use quiz::{QuestionCatalog, QuizData, QuizSession, RawAnswer, aggregate_traits, score_category};
pub use repository::{Catalog, CatalogRepository};
pub use scorer::{PersonaScorer, QuizResult};
