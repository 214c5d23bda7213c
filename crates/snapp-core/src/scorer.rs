//! `PersonaScorer`: the quiz → persona → compatibility pipeline over
//! injected catalogs.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::big_five::TraitVector;
use crate::compatibility::{CompatibilityScore, compute_compatibility};
use crate::error::{Result, SnappError};
use crate::persona::{PersonaCatalog, ScoredPersona};
use crate::quiz::{QuestionCatalog, RawAnswer, aggregate_traits};

/// Normalized traits and the persona they map to.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub traits: TraitVector,
    pub persona: ScoredPersona,
}

/// Scores quiz answers against a question catalog and a persona catalog.
///
/// Both catalogs are shared read-only, so a scorer can be cloned cheaply and
/// used from any number of threads.
#[derive(Debug, Clone)]
pub struct PersonaScorer {
    questions: Arc<QuestionCatalog>,
    personas: Arc<PersonaCatalog>,
}

impl PersonaScorer {
    /// Builds a scorer after validating both catalogs and that every
    /// follow-up set belongs to a known persona.
    pub fn new(questions: Arc<QuestionCatalog>, personas: Arc<PersonaCatalog>) -> Result<Self> {
        questions.validate()?;
        personas.validate()?;
        for entry in questions.followups() {
            if !personas.contains(&entry.persona) {
                return Err(SnappError::config(format!(
                    "follow-ups reference unknown persona '{}'",
                    entry.persona
                )));
            }
        }
        Ok(Self {
            questions,
            personas,
        })
    }

    /// A scorer over the compiled-in catalogs.
    pub fn builtin() -> Self {
        Self {
            questions: Arc::new(QuestionCatalog::builtin().clone()),
            personas: Arc::new(PersonaCatalog::builtin().clone()),
        }
    }

    pub fn questions(&self) -> &QuestionCatalog {
        &self.questions
    }

    pub fn personas(&self) -> &PersonaCatalog {
        &self.personas
    }

    /// Raw answers → normalized trait vector. See [`aggregate_traits`].
    pub fn aggregate_traits(&self, answers: &[RawAnswer]) -> Result<TraitVector> {
        aggregate_traits(self.questions.questions(), answers)
    }

    /// Normalized trait vector → best-matching persona.
    pub fn select_persona(&self, traits: &TraitVector) -> Result<ScoredPersona> {
        self.personas.select(traits)
    }

    pub fn compute_compatibility(&self, a: &TraitVector, b: &TraitVector) -> CompatibilityScore {
        compute_compatibility(a, b)
    }

    /// Aggregates and selects in one step.
    pub fn score(&self, answers: &[RawAnswer]) -> Result<QuizResult> {
        let traits = self.aggregate_traits(answers)?;
        let persona = self.select_persona(&traits)?;
        info!(
            persona = %persona.name(),
            similarity = persona.similarity_score,
            "Assigned persona"
        );
        Ok(QuizResult { traits, persona })
    }

    /// Compatibility between a user vector and a named persona's weights.
    pub fn persona_compatibility(&self, user: &TraitVector, persona: &str) -> Result<CompatibilityScore> {
        let persona = self.personas.find(persona)?;
        Ok(compute_compatibility(user, &persona.weights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Persona;
    use crate::quiz::{PersonaFollowups, default_core_questions};

    #[test]
    fn test_all_hundred_answers_default_to_wild_trailblazer() {
        let scorer = PersonaScorer::builtin();
        let result = scorer.score(&[100; 10]).unwrap();
        assert_eq!(result.traits, TraitVector::ZERO);
        assert_eq!(result.persona.name(), "The Wild Trailblazer");
        assert_eq!(result.persona.similarity_score, 0.0);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let scorer = PersonaScorer::builtin();
        let answers = [12, 88, 40, 41, 73, 5, 99, 60, 20, 64];
        let first = scorer.score(&answers).unwrap();
        for _ in 0..5 {
            assert_eq!(scorer.score(&answers).unwrap(), first);
        }
    }

    #[test]
    fn test_party_answers_pick_an_extraverted_persona() {
        let scorer = PersonaScorer::builtin();
        // High E (Q5 direct high, Q6 reverse low), low C (Q3 low, Q4 reverse high)
        let answers = [60, 40, 10, 90, 100, 0, 70, 30, 30, 70];
        let result = scorer.score(&answers).unwrap();
        assert!(result.traits.extraversion > 0.9);
        assert_eq!(result.persona.name(), "The Party Pathfinder");
    }

    #[test]
    fn test_new_rejects_followups_for_unknown_persona() {
        let questions = QuestionCatalog::new(
            default_core_questions(),
            vec![PersonaFollowups {
                persona: "The Ghost".to_string(),
                questions: Vec::new(),
            }],
            Vec::new(),
        );
        let personas = PersonaCatalog::new(vec![Persona {
            name: "Solo".to_string(),
            vibe: String::new(),
            tags: Vec::new(),
            weights: TraitVector::ZERO,
            description: String::new(),
            image_url: String::new(),
        }]);
        let err = PersonaScorer::new(Arc::new(questions), Arc::new(personas)).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_persona_compatibility_by_name() {
        let scorer = PersonaScorer::builtin();
        let zen = scorer.personas().find("The Zen Seeker").unwrap().weights;
        assert_eq!(scorer.persona_compatibility(&zen, "The Zen Seeker").unwrap(), 100);
        assert!(scorer.persona_compatibility(&zen, "Nobody").unwrap_err().is_not_found());
    }
}
