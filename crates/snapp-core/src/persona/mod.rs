//! Persona domain module.
//!
//! # Module Structure
//!
//! - `model`: `Persona` and `ScoredPersona`
//! - `catalog`: the ordered, read-only `PersonaCatalog`
//! - `selection`: best-match selection by dot product
//! - `preset`: the 25 built-in personas

mod catalog;
mod model;
mod preset;
mod selection;

// Re-export public API
pub use catalog::PersonaCatalog;
pub use model::{Persona, ScoredPersona};
pub use preset::default_personas;
pub use selection::{score_all, select_persona};
