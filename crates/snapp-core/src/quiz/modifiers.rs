//! Turning follow-up answers into trip modifiers.

use super::model::FollowupQuestion;
use super::scoring::{RawAnswer, likert_score};
use crate::error::{Result, SnappError};

/// Final modifier list sent to the curator.
///
/// Starts from the user's explicit selection, then appends the tag of every
/// follow-up answered with a non-neutral Likert score (anything but 3).
/// Order is preserved and duplicates are dropped.
pub fn derive_modifiers(
    followups: &[FollowupQuestion],
    followup_answers: &[RawAnswer],
    selected: &[String],
) -> Result<Vec<String>> {
    if followups.len() != followup_answers.len() {
        return Err(SnappError::invalid_input(format!(
            "expected {} follow-up answers, got {}",
            followups.len(),
            followup_answers.len()
        )));
    }

    let mut modifiers: Vec<String> = Vec::with_capacity(selected.len() + followups.len());
    for modifier in selected {
        if !modifiers.contains(modifier) {
            modifiers.push(modifier.clone());
        }
    }

    for (question, &answer) in followups.iter().zip(followup_answers) {
        if likert_score(f64::from(answer)) != 3 && !modifiers.contains(&question.tag) {
            modifiers.push(question.tag.clone());
        }
    }

    Ok(modifiers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn followups() -> Vec<FollowupQuestion> {
        vec![
            FollowupQuestion::new("I’d rather wing my plans.", "Spontaneous Planner"),
            FollowupQuestion::new("I love diving into new cultures.", "Culture Enthusiast"),
            FollowupQuestion::new("I’m always pushing to stay out late.", "Night Owl"),
        ]
    }

    #[test]
    fn test_neutral_answers_add_nothing() {
        let modifiers = derive_modifiers(&followups(), &[50, 50, 50], &[]).unwrap();
        assert!(modifiers.is_empty());
    }

    #[test]
    fn test_strong_answers_either_way_add_tags() {
        let selected = vec!["Beach".to_string()];
        let modifiers = derive_modifiers(&followups(), &[0, 50, 100], &selected).unwrap();
        assert_eq!(modifiers, vec!["Beach", "Spontaneous Planner", "Night Owl"]);
    }

    #[test]
    fn test_tags_are_not_duplicated() {
        let selected = vec!["Night Owl".to_string(), "Night Owl".to_string()];
        let modifiers = derive_modifiers(&followups(), &[50, 50, 90], &selected).unwrap();
        assert_eq!(modifiers, vec!["Night Owl"]);
    }

    #[test]
    fn test_answer_count_must_match() {
        let err = derive_modifiers(&followups(), &[50], &[]).unwrap_err();
        assert!(matches!(err, SnappError::InvalidInput(_)));
    }
}
