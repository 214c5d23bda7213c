//! The JSON document the curator model returns.
//!
//! Fields the model sometimes leaves out default to empty values rather than
//! failing the whole response.

use serde::{Deserialize, Serialize};

use crate::big_five::TraitVector;
use crate::quiz::{FollowupQuestion, QuizQuestion};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CuratorResponse {
    pub quiz_flow: QuizFlow,
    pub persona_assignment: PersonaAssignment,
    pub curated_packages: Vec<VacationPackage>,
    pub snapp_squad_tiers: Vec<SquadTier>,
    pub shareables_per_package: Vec<Shareable>,
    pub booking_session_stubs: BookingStubs,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct QuizFlow {
    pub core_questions: Vec<QuizQuestion>,
    pub feedback_moments: Vec<FeedbackMoment>,
    pub follow_up_questions: Vec<FollowupQuestion>,
    pub modifiers: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FeedbackMoment {
    pub after_question: u32,
    pub feedback: String,
    pub teaser: String,
}

/// The persona the model settled on, with its own reasoning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PersonaAssignment {
    pub name: String,
    pub vibe: String,
    pub tags: Vec<String>,
    pub weights: TraitVector,
    pub reasoning: String,
    pub dot_score: f64,
    pub description: String,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Availability {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct VacationPackage {
    pub name: String,
    pub total_price: f64,
    pub price_per_traveler: f64,
    pub flight: Flight,
    pub lodging: Lodging,
    pub activity: String,
    pub fit_notes: String,
    pub booking_link: String,
    pub availability: Availability,
    pub pricing_basis: String,
    pub image_url: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Flight {
    pub airline: String,
    pub flight_number: String,
    pub departure_airport: String,
    pub arrival_airport: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum LodgingType {
    #[default]
    Hotel,
    Resort,
    Hostel,
    #[serde(rename = "Vacation Rental")]
    VacationRental,
    #[serde(rename = "Boutique Hotel")]
    BoutiqueHotel,
    #[serde(rename = "Eco-Lodge")]
    EcoLodge,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Lodging {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LodgingType,
    pub rating: f64,
    pub nights: u32,
    pub price_per_night: f64,
    pub total_price: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct SquadTier {
    pub tier: u32,
    pub min_members: u32,
    pub rewards: Vec<String>,
    pub cta: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Shareable {
    pub short_blurb: String,
    pub share_cta_x: String,
    pub copy_blocks: CopyBlocks,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct CopyBlocks {
    pub title: String,
    pub subtitle: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct BookingStubs {
    pub flight_query: String,
    pub hotel_query: String,
    pub activity_query: String,
    pub affiliate_hint: String,
}
