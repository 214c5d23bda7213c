//! Trait aggregation and Likert bucketing over raw slider answers.

use tracing::{debug, warn};

use super::model::{DEFAULT_ANSWER, MAX_ANSWER, MIN_ANSWER, QuizQuestion, ScoreCategory};
use crate::big_five::{Trait, TraitVector};
use crate::error::{Result, SnappError};

/// A raw slider answer. Valid answers lie in `0..=100`.
pub type RawAnswer = i32;

/// Divisor of the 0–100 → 1–5 Likert rescaling. Kept at 20.1 rather than 20
/// so that 40 still lands in the "1-2" bucket.
pub const LIKERT_DIVISOR: f64 = 20.1;

/// Clamps a raw core answer into the slider domain, logging when it had to.
pub fn clamp_answer(index: usize, raw: RawAnswer) -> RawAnswer {
    let clamped = clamp_slider(raw);
    if clamped != raw {
        warn!(
            question_index = index,
            raw, clamped, "Quiz answer outside 0..=100, clamping"
        );
    }
    clamped
}

/// Same as [`clamp_answer`] for a persona follow-up statement.
pub fn clamp_followup_answer(index: usize, raw: RawAnswer) -> RawAnswer {
    let clamped = clamp_slider(raw);
    if clamped != raw {
        warn!(
            followup_index = index,
            raw, clamped, "Follow-up answer outside 0..=100, clamping"
        );
    }
    clamped
}

fn clamp_slider(raw: RawAnswer) -> RawAnswer {
    raw.clamp(MIN_ANSWER as RawAnswer, MAX_ANSWER as RawAnswer)
}

/// Converts ordered raw answers into a normalized trait vector.
///
/// Reverse-polarity answers count as `100 - raw`; each trait's effective
/// scores are averaged and mapped onto `[-1, 1]` via `(mean - 50) / 50`.
///
/// # Errors
///
/// [`SnappError::MissingTraitData`] when `answers` does not have one entry
/// per question, or when some trait has no question in `questions`.
pub fn aggregate_traits(questions: &[QuizQuestion], answers: &[RawAnswer]) -> Result<TraitVector> {
    if answers.len() != questions.len() {
        return Err(SnappError::missing_trait_data(format!(
            "expected {} answers, got {}",
            questions.len(),
            answers.len()
        )));
    }

    let mut sums = [0.0_f64; 5];
    let mut counts = [0usize; 5];
    for (index, (question, &raw)) in questions.iter().zip(answers).enumerate() {
        let raw = clamp_answer(index, raw);
        let slot = question.trait_.index();
        sums[slot] += question.effective_score(f64::from(raw));
        counts[slot] += 1;
    }

    let mut normalized = TraitVector::ZERO;
    for trait_ in Trait::all() {
        let slot = trait_.index();
        if counts[slot] == 0 {
            return Err(SnappError::missing_trait_data(format!(
                "no question contributes to trait {trait_}"
            )));
        }
        let mean = sums[slot] / counts[slot] as f64;
        normalized.set(trait_, (mean - DEFAULT_ANSWER) / DEFAULT_ANSWER);
    }

    debug!(vector = %normalized, "Aggregated quiz answers");
    Ok(normalized)
}

/// `1 + floor(value / 20.1)`: a 1–5 Likert score for a slider value.
pub fn likert_score(value: f64) -> i32 {
    1 + (value / LIKERT_DIVISOR).floor() as i32
}

/// Buckets a slider value into `"1-2"`, `"3"` or `"4-5"`.
pub fn score_category(value: f64) -> ScoreCategory {
    match likert_score(value) {
        score if score <= 2 => ScoreCategory::Low,
        3 => ScoreCategory::Neutral,
        _ => ScoreCategory::High,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::model::{Feedback, Polarity};
    use proptest::prelude::*;

    fn question(id: u32, trait_: Trait, polarity: Polarity) -> QuizQuestion {
        QuizQuestion {
            id,
            trait_,
            polarity,
            text: format!("question {id}"),
            feedback: Feedback::default(),
        }
    }

    fn paired_catalog() -> Vec<QuizQuestion> {
        let mut questions = Vec::new();
        for (i, trait_) in Trait::all().enumerate() {
            let id = (i as u32) * 2 + 1;
            questions.push(question(id, trait_, Polarity::Direct));
            questions.push(question(id + 1, trait_, Polarity::Reverse));
        }
        questions
    }

    #[test]
    fn test_core_and_followup_clamping_agree() {
        assert_eq!(clamp_answer(0, 150), 100);
        assert_eq!(clamp_followup_answer(0, 150), 100);
        assert_eq!(clamp_answer(3, -7), 0);
        assert_eq!(clamp_followup_answer(2, -7), 0);
        assert_eq!(clamp_followup_answer(1, 42), 42);
    }

    #[test]
    fn test_all_fifty_is_neutral() {
        let vector = aggregate_traits(&paired_catalog(), &[50; 10]).unwrap();
        assert_eq!(vector, TraitVector::ZERO);
    }

    #[test]
    fn test_all_hundred_cancels_out_with_paired_polarity() {
        let vector = aggregate_traits(&paired_catalog(), &[100; 10]).unwrap();
        assert_eq!(vector, TraitVector::ZERO);
    }

    #[test]
    fn test_reverse_question_contributes_complement() {
        let questions = vec![
            question(1, Trait::Openness, Polarity::Reverse),
            question(2, Trait::Conscientiousness, Polarity::Direct),
            question(3, Trait::Extraversion, Polarity::Direct),
            question(4, Trait::Agreeableness, Polarity::Direct),
            question(5, Trait::Neuroticism, Polarity::Direct),
        ];
        let vector = aggregate_traits(&questions, &[80, 50, 50, 50, 50]).unwrap();
        // effective 20 → (20 - 50) / 50
        assert!((vector.openness - (-0.6)).abs() < 1e-12);
    }

    #[test]
    fn test_extremes_map_to_unit_bounds() {
        let questions = paired_catalog();
        let mut answers = [0; 10];
        // Direct questions at 100, reverse at 0 → every trait maxed out.
        for (i, q) in questions.iter().enumerate() {
            answers[i] = if q.polarity == Polarity::Direct { 100 } else { 0 };
        }
        let vector = aggregate_traits(&questions, &answers).unwrap();
        assert_eq!(vector, TraitVector::new(1.0, 1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_length_mismatch_is_missing_trait_data() {
        let err = aggregate_traits(&paired_catalog(), &[50; 9]).unwrap_err();
        assert!(err.is_missing_trait_data());
    }

    #[test]
    fn test_trait_without_questions_is_missing_trait_data() {
        let questions: Vec<_> = paired_catalog()
            .into_iter()
            .filter(|q| q.trait_ != Trait::Neuroticism)
            .collect();
        let err = aggregate_traits(&questions, &[50; 8]).unwrap_err();
        assert!(err.is_missing_trait_data());
        assert!(err.to_string().contains("N"));
    }

    #[test]
    fn test_out_of_range_answers_are_clamped() {
        let clamped = aggregate_traits(&paired_catalog(), &[150, -20, 50, 50, 50, 50, 50, 50, 50, 50]);
        let bounded = aggregate_traits(&paired_catalog(), &[100, 0, 50, 50, 50, 50, 50, 50, 50, 50]);
        assert_eq!(clamped.unwrap(), bounded.unwrap());
    }

    #[test]
    fn test_bucket_boundary_sits_between_forty_and_forty_one() {
        assert_eq!(likert_score(40.0), 2);
        assert_eq!(score_category(40.0), ScoreCategory::Low);
        assert_eq!(likert_score(41.0), 3);
        assert_eq!(score_category(41.0), ScoreCategory::Neutral);
    }

    #[test]
    fn test_bucket_edges() {
        assert_eq!(score_category(0.0), ScoreCategory::Low);
        assert_eq!(score_category(60.0), ScoreCategory::Neutral);
        assert_eq!(score_category(61.0), ScoreCategory::High);
        assert_eq!(likert_score(100.0), 5);
        assert_eq!(score_category(100.0), ScoreCategory::High);
    }

    proptest! {
        #[test]
        fn prop_normalized_components_stay_in_unit_range(
            answers in prop::array::uniform10(-50i32..=150)
        ) {
            let vector = aggregate_traits(&paired_catalog(), &answers).unwrap();
            for value in vector.to_array() {
                prop_assert!((-1.0..=1.0).contains(&value));
            }
        }

        #[test]
        fn prop_likert_is_monotonic(a in 0u32..=100, b in 0u32..=100) {
            let (low, high) = (a.min(b), a.max(b));
            prop_assert!(likert_score(f64::from(low)) <= likert_score(f64::from(high)));
            let score = likert_score(f64::from(high));
            prop_assert!((1..=5).contains(&score));
        }
    }
}
