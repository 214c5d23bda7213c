//! The question catalog: core statements, persona follow-ups and modifiers.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::model::{FollowupQuestion, QuizQuestion};
use super::preset::default_question_catalog;
use super::scoring::{RawAnswer, clamp_answer, score_category};
use crate::big_five::Trait;
use crate::error::{Result, SnappError};

static DEFAULT_CATALOG: Lazy<QuestionCatalog> = Lazy::new(default_question_catalog);

/// Follow-up statements shown to users assigned a given persona.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct PersonaFollowups {
    pub persona: String,
    pub questions: Vec<FollowupQuestion>,
}

/// Read-only quiz content consumed by the scorer and the quiz session.
///
/// The catalog is immutable once built. Tests and alternative deployments
/// construct their own; everything else shares [`QuestionCatalog::builtin`].
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionCatalog {
    questions: Vec<QuizQuestion>,
    followups: Vec<PersonaFollowups>,
    modifiers: Vec<String>,
}

impl QuestionCatalog {
    pub fn new(
        questions: Vec<QuizQuestion>,
        followups: Vec<PersonaFollowups>,
        modifiers: Vec<String>,
    ) -> Self {
        Self {
            questions,
            followups,
            modifiers,
        }
    }

    /// The compiled-in catalog.
    pub fn builtin() -> &'static QuestionCatalog {
        &DEFAULT_CATALOG
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, index: usize) -> Result<&QuizQuestion> {
        self.questions
            .get(index)
            .ok_or_else(|| SnappError::not_found("question", index.to_string()))
    }

    pub fn followups(&self) -> &[PersonaFollowups] {
        &self.followups
    }

    /// Follow-up statements for the named persona.
    pub fn followups_for(&self, persona: &str) -> Result<&[FollowupQuestion]> {
        self.followups
            .iter()
            .find(|entry| entry.persona == persona)
            .map(|entry| entry.questions.as_slice())
            .ok_or_else(|| SnappError::not_found("followups", persona))
    }

    pub fn modifiers(&self) -> &[String] {
        &self.modifiers
    }

    pub fn is_known_modifier(&self, modifier: &str) -> bool {
        self.modifiers.iter().any(|m| m == modifier)
    }

    /// The canned feedback line for answering question `index` with `raw`.
    ///
    /// Polarity is applied before bucketing, so agreeing strongly with a
    /// reverse statement yields its "1-2" line.
    pub fn feedback_for(&self, index: usize, raw: RawAnswer) -> Result<&str> {
        let question = self.question(index)?;
        let effective = question.effective_score(f64::from(clamp_answer(index, raw)));
        Ok(question.feedback.for_category(score_category(effective)))
    }

    /// Checks the structural guarantees the scorer relies on.
    ///
    /// - every trait has at least one question
    /// - question ids are unique
    /// - modifiers are unique
    pub fn validate(&self) -> Result<()> {
        for trait_ in Trait::all() {
            if !self.questions.iter().any(|q| q.trait_ == trait_) {
                return Err(SnappError::missing_trait_data(format!(
                    "question catalog has no question for trait {trait_}"
                )));
            }
        }

        let mut ids = HashSet::new();
        for question in &self.questions {
            if !ids.insert(question.id) {
                return Err(SnappError::config(format!(
                    "duplicate question id {}",
                    question.id
                )));
            }
        }

        let mut seen = HashSet::new();
        for modifier in &self.modifiers {
            if !seen.insert(modifier.as_str()) {
                return Err(SnappError::config(format!("duplicate modifier '{modifier}'")));
            }
        }

        Ok(())
    }
}
