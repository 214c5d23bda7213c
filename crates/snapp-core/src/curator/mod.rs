//! Curator payload types and the LLM seam.
//!
//! # Module Structure
//!
//! - `inputs`: `TripSettings` and the `UserInputs` payload
//! - `response`: the `CuratorResponse` document
//! - `generator`: the `TextGenerator` trait

mod generator;
mod inputs;
mod response;

// Re-export public API
pub use generator::TextGenerator;
pub use inputs::{DATE_FORMAT, DEFAULT_FLEX_DAYS, TripSettings, UserInputs};
pub use response::{
    Availability, BookingStubs, CopyBlocks, CuratorResponse, FeedbackMoment, Flight, Lodging,
    LodgingType, PersonaAssignment, QuizFlow, Shareable, SquadTier, VacationPackage,
};
