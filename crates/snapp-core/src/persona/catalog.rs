//! The read-only persona catalog.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use super::model::{Persona, ScoredPersona};
use super::preset::default_personas;
use super::selection::{score_all, select_persona};
use crate::big_five::TraitVector;
use crate::error::{Result, SnappError};

static DEFAULT_CATALOG: Lazy<PersonaCatalog> = Lazy::new(|| PersonaCatalog::new(default_personas()));

/// Ordered, immutable set of personas.
///
/// Catalog order is significant: it decides ties during selection.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    pub fn new(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    /// The compiled-in 25-entry catalog.
    pub fn builtin() -> &'static PersonaCatalog {
        &DEFAULT_CATALOG
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn find(&self, name: &str) -> Result<&Persona> {
        self.personas
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| SnappError::not_found("persona", name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.personas.iter().any(|p| p.name == name)
    }

    /// See [`select_persona`].
    pub fn select(&self, user: &TraitVector) -> Result<ScoredPersona> {
        select_persona(&self.personas, user)
    }

    /// Scores every persona and returns the `limit` best, highest first.
    /// Equal scores keep catalog order.
    pub fn ranked(&self, user: &TraitVector, limit: usize) -> Vec<ScoredPersona> {
        let mut scored = score_all(&self.personas, user);
        scored.sort_by(|a, b| b.similarity_score.total_cmp(&a.similarity_score));
        scored.truncate(limit);
        scored
    }

    /// Checks the catalog is non-empty, names are unique and weights are
    /// finite values in `[-1, 1]`.
    pub fn validate(&self) -> Result<()> {
        if self.personas.is_empty() {
            return Err(SnappError::config("persona catalog is empty"));
        }

        let mut names = HashSet::new();
        for persona in &self.personas {
            if persona.name.trim().is_empty() {
                return Err(SnappError::config("persona name cannot be empty"));
            }
            if !names.insert(persona.name.as_str()) {
                return Err(SnappError::config(format!(
                    "duplicate persona name '{}'",
                    persona.name
                )));
            }
            persona.weights.validate().map_err(|e| {
                SnappError::invalid_vector(format!("persona '{}': {e}", persona.name))
            })?;
        }
        Ok(())
    }
}
