//! Mid-quiz teasers shown after questions 3, 6 and 9.

use super::model::QuizQuestion;
use super::scoring::{RawAnswer, clamp_answer};
use crate::big_five::{Trait, TraitVector};

/// Running per-trait scores on a 0–10 scale over the answered prefix.
///
/// Each effective answer is scaled to 0–5 (`/ 20`), averaged per trait and
/// doubled. Traits with no answered question yet score `0`.
pub fn running_scores(questions: &[QuizQuestion], answers: &[RawAnswer], answered: usize) -> TraitVector {
    let mut sums = [0.0_f64; 5];
    let mut counts = [0usize; 5];
    for (index, (question, &raw)) in questions.iter().zip(answers).take(answered).enumerate() {
        let effective = question.effective_score(f64::from(clamp_answer(index, raw)));
        let slot = question.trait_.index();
        sums[slot] += effective / 20.0;
        counts[slot] += 1;
    }

    let mut scores = TraitVector::ZERO;
    for trait_ in Trait::all() {
        let slot = trait_.index();
        if counts[slot] > 0 {
            scores.set(trait_, sums[slot] / counts[slot] as f64 * 2.0);
        }
    }
    scores
}

/// The teaser to show once `answered` questions are done, if any.
pub fn teaser_after(questions: &[QuizQuestion], answers: &[RawAnswer], answered: usize) -> Option<&'static str> {
    let scores = running_scores(questions, answers, answered);
    match answered {
        3 => Some(if scores.openness >= 7.0 {
            "You’re leaning adventurous—let’s see if you’re a planner or a free spirit!"
        } else if scores.openness >= 4.0 {
            "You’re balanced—open to some new things but not too wild. Let’s keep going!"
        } else {
            "You’re a comfort-seeker—wonder if you’re a planner or a free spirit!"
        }),
        6 => Some(if scores.extraversion >= 7.0 {
            "You’re quite the social butterfly—let’s find out more!"
        } else {
            "You enjoy your own company—let’s see what else defines you!"
        }),
        9 => Some(if scores.conscientiousness >= 7.0 {
            "You’re a planner—almost there!"
        } else {
            "You go with the flow—let’s wrap this up!"
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuestionCatalog;

    #[test]
    fn test_no_teaser_between_checkpoints() {
        let questions = QuestionCatalog::builtin().questions();
        assert!(teaser_after(questions, &[50; 10], 1).is_none());
        assert!(teaser_after(questions, &[50; 10], 10).is_none());
    }

    #[test]
    fn test_openness_teaser_tiers() {
        let questions = QuestionCatalog::builtin().questions();
        // Q1 direct O at 100, Q2 reverse O at 0 → O = 10
        let adventurous = teaser_after(questions, &[100, 0, 50, 50, 50, 50, 50, 50, 50, 50], 3);
        assert!(adventurous.unwrap().contains("adventurous"));
        let balanced = teaser_after(questions, &[50; 10], 3);
        assert!(balanced.unwrap().contains("balanced"));
        let comfort = teaser_after(questions, &[0, 100, 50, 50, 50, 50, 50, 50, 50, 50], 3);
        assert!(comfort.unwrap().contains("comfort-seeker"));
    }

    #[test]
    fn test_running_scores_only_count_answered_prefix() {
        let questions = QuestionCatalog::builtin().questions();
        let scores = running_scores(questions, &[100; 10], 1);
        assert_eq!(scores.openness, 10.0);
        assert_eq!(scores.conscientiousness, 0.0);
    }

    #[test]
    fn test_planner_teaser_after_nine() {
        let questions = QuestionCatalog::builtin().questions();
        let answers = [50, 50, 100, 0, 50, 50, 50, 50, 50, 50];
        assert_eq!(
            teaser_after(questions, &answers, 9),
            Some("You’re a planner—almost there!")
        );
    }
}
