//! Step-by-step quiz flow: core statements, persona follow-ups, modifiers.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::{DEFAULT_ANSWER, QuizQuestion};
use super::modifiers::derive_modifiers;
use super::scoring::{RawAnswer, clamp_answer, clamp_followup_answer};
use super::teaser::teaser_after;
use crate::error::{Result, SnappError};
use crate::persona::ScoredPersona;
use crate::scorer::PersonaScorer;

/// Where a quiz session currently is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuizStage {
    Core,
    Followup,
    Modifiers,
    Complete,
}

/// Everything the curator needs from a finished quiz.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizData {
    pub quiz_answers: Vec<RawAnswer>,
    pub followup_answers: Vec<RawAnswer>,
    pub selected_modifiers: Vec<String>,
    pub assigned_persona_name: String,
}

/// Outcome of answering one core statement.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreStep {
    /// Feedback line for the answer just given
    pub feedback: String,
    /// Teaser unlocked by this answer, if it was a checkpoint
    pub teaser: Option<&'static str>,
    /// Set once the last core statement is answered
    pub assigned: Option<ScoredPersona>,
}

/// A single user's pass through the quiz.
pub struct QuizSession<'a> {
    scorer: &'a PersonaScorer,
    stage: QuizStage,
    current: usize,
    answers: Vec<RawAnswer>,
    assigned: Option<ScoredPersona>,
    followup_current: usize,
    followup_answers: Vec<RawAnswer>,
    selected_modifiers: Vec<String>,
}

impl<'a> QuizSession<'a> {
    /// Starts a session with every slider at its default position.
    pub fn new(scorer: &'a PersonaScorer) -> Self {
        let count = scorer.questions().len();
        Self {
            scorer,
            stage: QuizStage::Core,
            current: 0,
            answers: vec![DEFAULT_ANSWER as RawAnswer; count],
            assigned: None,
            followup_current: 0,
            followup_answers: Vec::new(),
            selected_modifiers: Vec::new(),
        }
    }

    pub fn stage(&self) -> QuizStage {
        self.stage
    }

    pub fn answers(&self) -> &[RawAnswer] {
        &self.answers
    }

    pub fn assigned_persona(&self) -> Option<&ScoredPersona> {
        self.assigned.as_ref()
    }

    pub fn selected_modifiers(&self) -> &[String] {
        &self.selected_modifiers
    }

    /// The core statement awaiting an answer.
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.stage {
            QuizStage::Core => self.scorer.questions().questions().get(self.current),
            _ => None,
        }
    }

    /// The follow-up statement awaiting an answer.
    pub fn current_followup(&self) -> Option<&super::model::FollowupQuestion> {
        if self.stage != QuizStage::Followup {
            return None;
        }
        let persona = self.assigned.as_ref()?;
        self.scorer
            .questions()
            .followups_for(persona.name())
            .ok()?
            .get(self.followup_current)
    }

    /// Records the answer to the current core statement and moves on.
    ///
    /// Answering the last statement assigns the persona and opens the
    /// follow-up stage.
    pub fn answer_core(&mut self, value: RawAnswer) -> Result<CoreStep> {
        self.expect_stage(QuizStage::Core)?;
        let index = self.current;
        if index >= self.answers.len() {
            return Err(SnappError::invalid_input(format!(
                "all {} core statements are already answered",
                self.answers.len()
            )));
        }
        let value = clamp_answer(index, value);
        self.answers[index] = value;

        let feedback = self.scorer.questions().feedback_for(index, value)?.to_string();
        let answered = index + 1;

        // Scoring may fail; the cursor only advances once it has not.
        let mut assigned = None;
        if answered == self.answers.len() {
            let result = self.scorer.score(&self.answers)?;
            let followup_count = self.followups_of(&result.persona).len();
            self.followup_answers = vec![DEFAULT_ANSWER as RawAnswer; followup_count];
            self.followup_current = 0;
            self.stage = if followup_count == 0 {
                QuizStage::Modifiers
            } else {
                QuizStage::Followup
            };
            self.assigned = Some(result.persona.clone());
            assigned = Some(result.persona);
        }

        self.current = answered;
        let teaser = teaser_after(self.scorer.questions().questions(), &self.answers, answered);
        debug!(question_index = index, value, "Core answer recorded");

        Ok(CoreStep {
            feedback,
            teaser,
            assigned,
        })
    }

    /// Records the answer to the current follow-up and moves on.
    pub fn answer_followup(&mut self, value: RawAnswer) -> Result<()> {
        self.expect_stage(QuizStage::Followup)?;
        let index = self.followup_current;
        self.followup_answers[index] = clamp_followup_answer(index, value);
        self.followup_current += 1;
        if self.followup_current == self.followup_answers.len() {
            self.stage = QuizStage::Modifiers;
        }
        Ok(())
    }

    /// Flips a catalog modifier on or off. Returns whether it is now selected.
    pub fn toggle_modifier(&mut self, modifier: &str) -> Result<bool> {
        self.expect_stage(QuizStage::Modifiers)?;
        if !self.scorer.questions().is_known_modifier(modifier) {
            return Err(SnappError::invalid_input(format!("unknown modifier '{modifier}'")));
        }
        if let Some(pos) = self.selected_modifiers.iter().position(|m| m == modifier) {
            self.selected_modifiers.remove(pos);
            Ok(false)
        } else {
            self.selected_modifiers.push(modifier.to_string());
            Ok(true)
        }
    }

    /// Closes the session and produces the curator payload fragment.
    pub fn finish(&mut self) -> Result<QuizData> {
        self.expect_stage(QuizStage::Modifiers)?;
        let persona = self
            .assigned
            .as_ref()
            .ok_or_else(|| SnappError::internal("modifiers stage reached without a persona"))?;
        let followups = self.followups_of(persona);
        let selected_modifiers =
            derive_modifiers(followups, &self.followup_answers, &self.selected_modifiers)?;

        self.stage = QuizStage::Complete;
        Ok(QuizData {
            quiz_answers: self.answers.clone(),
            followup_answers: self.followup_answers.clone(),
            selected_modifiers,
            assigned_persona_name: persona.name().to_string(),
        })
    }

    /// Follow-ups for a persona; a persona without a set skips straight to modifiers.
    fn followups_of(&self, persona: &ScoredPersona) -> &'a [super::model::FollowupQuestion] {
        self.scorer
            .questions()
            .followups_for(persona.name())
            .unwrap_or(&[])
    }

    fn expect_stage(&self, expected: QuizStage) -> Result<()> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(SnappError::invalid_input(format!(
                "quiz is in the {:?} stage, expected {:?}",
                self.stage, expected
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::big_five::TraitVector;
    use crate::persona::{Persona, PersonaCatalog};
    use crate::quiz::{QuestionCatalog, default_core_questions};
    use std::sync::Arc;

    fn run_core(session: &mut QuizSession<'_>, answers: &[RawAnswer]) -> Vec<CoreStep> {
        answers
            .iter()
            .map(|&a| session.answer_core(a).unwrap())
            .collect()
    }

    #[test]
    fn test_full_flow_produces_quiz_data() {
        let scorer = PersonaScorer::builtin();
        let mut session = QuizSession::new(&scorer);
        let steps = run_core(&mut session, &[100; 10]);

        assert!(steps[2].teaser.is_some());
        assert!(steps[5].teaser.is_some());
        assert!(steps[8].teaser.is_some());
        assert!(steps[9].teaser.is_none());
        assert_eq!(
            steps[9].assigned.as_ref().unwrap().name(),
            "The Wild Trailblazer"
        );
        assert_eq!(session.stage(), QuizStage::Followup);
        assert_eq!(session.current_followup().unwrap().tag, "Spontaneous Planner");

        session.answer_followup(95).unwrap();
        session.answer_followup(50).unwrap();
        session.answer_followup(5).unwrap();
        assert_eq!(session.stage(), QuizStage::Modifiers);

        assert!(session.toggle_modifier("Beach").unwrap());
        assert!(session.toggle_modifier("Foodie").unwrap());
        assert!(!session.toggle_modifier("Foodie").unwrap());

        let data = session.finish().unwrap();
        assert_eq!(session.stage(), QuizStage::Complete);
        assert_eq!(data.assigned_persona_name, "The Wild Trailblazer");
        assert_eq!(data.quiz_answers, vec![100; 10]);
        assert_eq!(data.followup_answers, vec![95, 50, 5]);
        assert_eq!(
            data.selected_modifiers,
            vec!["Beach", "Spontaneous Planner", "Night Owl"]
        );
    }

    #[test]
    fn test_core_feedback_matches_catalog() {
        let scorer = PersonaScorer::builtin();
        let mut session = QuizSession::new(&scorer);
        let step = session.answer_core(0).unwrap();
        let first = scorer.questions().question(0).unwrap();
        assert_eq!(step.feedback, first.feedback.low);
    }

    #[test]
    fn test_wrong_stage_is_rejected() {
        let scorer = PersonaScorer::builtin();
        let mut session = QuizSession::new(&scorer);
        assert!(session.answer_followup(50).is_err());
        assert!(session.toggle_modifier("Beach").is_err());
        assert!(session.finish().is_err());
    }

    #[test]
    fn test_unknown_modifier_is_rejected() {
        let scorer = PersonaScorer::builtin();
        let mut session = QuizSession::new(&scorer);
        run_core(&mut session, &[50; 10]);
        for _ in 0..3 {
            session.answer_followup(50).unwrap();
        }
        let err = session.toggle_modifier("Space Travel").unwrap_err();
        assert!(matches!(err, SnappError::InvalidInput(_)));
    }

    #[test]
    fn test_sliders_start_at_default() {
        let scorer = PersonaScorer::builtin();
        let session = QuizSession::new(&scorer);
        assert_eq!(session.answers(), &[50; 10]);
        assert_eq!(session.current_question().unwrap().id, 1);
    }

    #[test]
    fn test_persona_without_followups_skips_to_modifiers() {
        let questions = QuestionCatalog::new(
            default_core_questions(),
            Vec::new(),
            vec!["Beach".to_string()],
        );
        let personas = PersonaCatalog::new(vec![Persona {
            name: "Solo".to_string(),
            vibe: String::new(),
            tags: Vec::new(),
            weights: TraitVector::ZERO,
            description: String::new(),
            image_url: String::new(),
        }]);
        let scorer = PersonaScorer::new(Arc::new(questions), Arc::new(personas)).unwrap();
        let mut session = QuizSession::new(&scorer);

        let steps = run_core(&mut session, &[50; 10]);
        assert_eq!(steps[9].assigned.as_ref().unwrap().name(), "Solo");
        assert_eq!(session.stage(), QuizStage::Modifiers);
        assert!(session.current_followup().is_none());

        let err = session.answer_core(50).unwrap_err();
        assert!(matches!(err, SnappError::InvalidInput(_)));

        session.toggle_modifier("Beach").unwrap();
        let data = session.finish().unwrap();
        assert!(data.followup_answers.is_empty());
        assert_eq!(data.selected_modifiers, vec!["Beach"]);
    }

    #[test]
    fn test_followup_answers_are_clamped() {
        let scorer = PersonaScorer::builtin();
        let mut session = QuizSession::new(&scorer);
        run_core(&mut session, &[100; 10]);
        session.answer_followup(250).unwrap();
        session.answer_followup(-10).unwrap();
        session.answer_followup(50).unwrap();
        let data = session.finish().unwrap();
        assert_eq!(data.followup_answers, vec![100, 0, 50]);
    }
}
