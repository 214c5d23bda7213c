//! Quiz domain module.
//!
//! # Module Structure
//!
//! - `model`: questions, polarity, score categories, follow-ups
//! - `catalog`: the read-only `QuestionCatalog`
//! - `scoring`: trait aggregation and Likert bucketing
//! - `teaser`: mid-quiz teaser messages
//! - `modifiers`: follow-up answers → trip modifiers
//! - `session`: the step-by-step quiz state machine
//! - `preset`: built-in quiz content

mod catalog;
mod model;
mod modifiers;
mod preset;
mod scoring;
mod session;
mod teaser;

// Re-export public API
pub use catalog::{PersonaFollowups, QuestionCatalog};
pub use model::{
    DEFAULT_ANSWER, Feedback, FollowupQuestion, MAX_ANSWER, MIN_ANSWER, Polarity, QuizQuestion,
    ScoreCategory,
};
pub use modifiers::derive_modifiers;
pub use preset::{DEFAULT_MODIFIERS, default_core_questions, default_followups, default_question_catalog};
pub use scoring::{LIKERT_DIVISOR, RawAnswer, aggregate_traits, likert_score, score_category};
pub use session::{QuizData, QuizSession, QuizStage};
pub use teaser::{running_scores, teaser_after};
