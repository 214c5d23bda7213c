//! Persona domain model.
//!
//! A persona is one of the fixed travel archetypes a quiz taker can be
//! assigned. Only `name` and `weights` take part in scoring; the rest is
//! descriptive copy for display.

use serde::{Deserialize, Serialize};

use crate::big_five::TraitVector;

/// A travel archetype with an ideal Big Five profile.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Persona {
    /// Display name, unique within a catalog
    pub name: String,
    /// One-line vibe summary
    #[serde(default)]
    pub vibe: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Trait weights in `[-1, 1]`
    pub weights: TraitVector,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
}

impl Persona {
    /// Similarity of a normalized user vector to this persona.
    pub fn similarity(&self, user: &TraitVector) -> f64 {
        user.dot(&self.weights)
    }
}

/// A persona paired with the dot-product score that selected it.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoredPersona {
    #[serde(flatten)]
    pub persona: Persona,
    #[serde(rename = "dot_score")]
    pub similarity_score: f64,
}

impl ScoredPersona {
    pub fn name(&self) -> &str {
        &self.persona.name
    }
}
