//! Trip settings and the user-input payload handed to the curator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnappError};
use crate::quiz::{QuizData, RawAnswer};

/// Days of slack the curator may apply around the departure date.
pub const DEFAULT_FLEX_DAYS: u32 = 2;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// What the user entered on the trip planning form.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TripSettings {
    pub departure_city: String,
    pub budget_min: u32,
    pub budget_max: u32,
    /// `YYYY-MM-DD`
    pub departure_date: String,
    pub travelers: u32,
}

impl TripSettings {
    pub fn validate(&self) -> Result<()> {
        if self.departure_city.trim().is_empty() {
            return Err(SnappError::invalid_input("departure city cannot be empty"));
        }
        if self.budget_min >= self.budget_max {
            return Err(SnappError::invalid_input(format!(
                "budget_min ({}) must be below budget_max ({})",
                self.budget_min, self.budget_max
            )));
        }
        if self.travelers == 0 {
            return Err(SnappError::invalid_input("at least one traveler is required"));
        }
        self.parsed_departure_date()?;
        Ok(())
    }

    pub fn parsed_departure_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.departure_date, DATE_FORMAT).map_err(|e| {
            SnappError::invalid_input(format!(
                "departure date '{}' is not YYYY-MM-DD: {e}",
                self.departure_date
            ))
        })
    }
}

/// The full input block embedded in the curator prompt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserInputs {
    pub departure_city: String,
    pub earliest_departure: String,
    pub flex_days: u32,
    pub budget_min: u32,
    pub budget_max: u32,
    pub travelers: u32,
    pub group_interest: bool,
    pub initial_group_size: u32,
    pub quiz_answers: Vec<RawAnswer>,
    pub followup_answers: Vec<RawAnswer>,
    pub selected_modifiers: Vec<String>,
    pub assigned_persona_name: String,
}

impl UserInputs {
    /// Combines validated trip settings with a finished quiz.
    pub fn from_quiz(settings: &TripSettings, quiz: &QuizData) -> Result<Self> {
        settings.validate()?;
        Ok(Self {
            departure_city: settings.departure_city.trim().to_string(),
            earliest_departure: settings.departure_date.clone(),
            flex_days: DEFAULT_FLEX_DAYS,
            budget_min: settings.budget_min,
            budget_max: settings.budget_max,
            travelers: settings.travelers,
            group_interest: settings.travelers > 1,
            initial_group_size: settings.travelers,
            quiz_answers: quiz.quiz_answers.clone(),
            followup_answers: quiz.followup_answers.clone(),
            selected_modifiers: quiz.selected_modifiers.clone(),
            assigned_persona_name: quiz.assigned_persona_name.clone(),
        })
    }
}
