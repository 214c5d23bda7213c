//! Quiz domain models.

use serde::{Deserialize, Serialize};

use crate::big_five::Trait;

/// Lowest slider value.
pub const MIN_ANSWER: f64 = 0.0;
/// Highest slider value.
pub const MAX_ANSWER: f64 = 100.0;
/// Slider position every question starts at.
pub const DEFAULT_ANSWER: f64 = 50.0;

/// Whether agreeing with a statement raises or lowers its trait.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Direct,
    Reverse,
}

impl Polarity {
    /// Maps a raw slider answer to the score that counts towards the trait.
    pub fn effective_score(self, raw: f64) -> f64 {
        match self {
            Polarity::Direct => raw,
            Polarity::Reverse => MAX_ANSWER - raw,
        }
    }
}

/// Coarse Likert bucket used to pick canned feedback.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreCategory {
    #[serde(rename = "1-2")]
    Low,
    #[serde(rename = "3")]
    Neutral,
    #[serde(rename = "4-5")]
    High,
}

impl ScoreCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ScoreCategory::Low => "1-2",
            ScoreCategory::Neutral => "3",
            ScoreCategory::High => "4-5",
        }
    }
}

impl std::fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canned feedback lines, one per score category.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    #[serde(rename = "1-2")]
    pub low: String,
    #[serde(rename = "3")]
    pub neutral: String,
    #[serde(rename = "4-5")]
    pub high: String,
}

impl Feedback {
    pub fn for_category(&self, category: ScoreCategory) -> &str {
        match category {
            ScoreCategory::Low => &self.low,
            ScoreCategory::Neutral => &self.neutral,
            ScoreCategory::High => &self.high,
        }
    }
}

/// A core quiz statement scored on a 0–100 slider.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub id: u32,
    #[serde(rename = "trait")]
    pub trait_: Trait,
    #[serde(rename = "direction", default)]
    pub polarity: Polarity,
    pub text: String,
    #[serde(default)]
    pub feedback: Feedback,
}

impl QuizQuestion {
    pub fn effective_score(&self, raw: f64) -> f64 {
        self.polarity.effective_score(raw)
    }
}

/// A persona-specific statement whose strong answers become trip modifiers.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FollowupQuestion {
    pub text: String,
    pub tag: String,
}

impl FollowupQuestion {
    pub fn new(text: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tag: tag.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_polarity_flips_score() {
        assert_eq!(Polarity::Reverse.effective_score(80.0), 20.0);
        assert_eq!(Polarity::Direct.effective_score(80.0), 80.0);
    }

    #[test]
    fn test_question_deserializes_with_source_field_names() {
        let json = r#"{
            "id": 2,
            "trait": "O",
            "direction": "reverse",
            "text": "I'd rather rewatch my favorite show.",
            "feedback": { "1-2": "low", "3": "mid", "4-5": "high" }
        }"#;
        let question: QuizQuestion = serde_json::from_str(json).unwrap();
        assert_eq!(question.trait_, Trait::Openness);
        assert_eq!(question.polarity, Polarity::Reverse);
        assert_eq!(question.feedback.for_category(ScoreCategory::Neutral), "mid");
    }
}
