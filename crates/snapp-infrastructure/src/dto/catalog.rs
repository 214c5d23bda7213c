//! On-disk layout of `catalog.toml`.
//!
//! ```toml
//! version = "1.0.0"
//! modifiers = ["Beach", "Mountains"]
//!
//! [[persona]]
//! name = "The Wild Trailblazer"
//! weights = { O = 0.286, C = -0.214, E = 0.286, A = -0.143, N = -0.071 }
//!
//! [[question]]
//! id = 1
//! trait = "O"
//! direction = "direct"
//! text = "..."
//!
//! [[followup]]
//! persona = "The Wild Trailblazer"
//! questions = [{ text = "...", tag = "Night Owl" }]
//!
//! [[vaycover]]
//! id = "vaycover-1"
//! ...
//! ```
//!
//! Every section is optional; a missing section falls back to the built-in
//! content. Vaycover ideal weights are not stored, they are always derived
//! from the dominant personas of the loaded catalog.

use semver::Version;
use serde::{Deserialize, Serialize};
use tracing::debug;

use snapp_core::persona::{Persona, PersonaCatalog};
use snapp_core::quiz::{PersonaFollowups, QuestionCatalog, QuizQuestion};
use snapp_core::vaycover::{ItineraryDay, RewardTier, Vaycover, VaycoverCatalog, ideal_weights_for};
use snapp_core::{Catalog, Result, SnappError};

pub const CATALOG_SCHEMA_VERSION: &str = "1.0.0";

/// Root of `catalog.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFileV1 {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifiers: Option<Vec<String>>,

    #[serde(rename = "persona", default, skip_serializing_if = "Option::is_none")]
    pub personas: Option<Vec<Persona>>,

    #[serde(rename = "question", default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<QuizQuestion>>,

    #[serde(rename = "followup", default, skip_serializing_if = "Option::is_none")]
    pub followups: Option<Vec<PersonaFollowups>>,

    #[serde(rename = "vaycover", default, skip_serializing_if = "Option::is_none")]
    pub vaycovers: Option<Vec<VaycoverDto>>,
}

/// A vaycover as stored; `ideal_weights` is recomputed on load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaycoverDto {
    pub id: String,
    #[serde(default)]
    pub is_spotlight: bool,
    pub title: String,
    pub destination: String,
    pub dates: String,
    pub price_range: String,
    #[serde(default)]
    pub hero_image: String,
    pub dominant_personas: Vec<String>,
    #[serde(default)]
    pub squad_progress: u32,
    pub squad_goal: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub lodging_info: String,
    #[serde(rename = "reward_tier", default)]
    pub reward_tiers: Vec<RewardTier>,
    #[serde(default)]
    pub itinerary: Vec<ItineraryDay>,
}

impl VaycoverDto {
    fn into_domain(self, personas: &PersonaCatalog) -> Vaycover {
        let ideal_weights = ideal_weights_for(&self.dominant_personas, personas);
        Vaycover {
            id: self.id,
            is_spotlight: self.is_spotlight,
            title: self.title,
            destination: self.destination,
            dates: self.dates,
            price_range: self.price_range,
            hero_image: self.hero_image,
            dominant_personas: self.dominant_personas,
            ideal_weights,
            squad_progress: self.squad_progress,
            squad_goal: self.squad_goal,
            reward_tiers: self.reward_tiers,
            description: self.description,
            itinerary: self.itinerary,
            lodging_info: self.lodging_info,
        }
    }
}

impl From<&Vaycover> for VaycoverDto {
    fn from(v: &Vaycover) -> Self {
        Self {
            id: v.id.clone(),
            is_spotlight: v.is_spotlight,
            title: v.title.clone(),
            destination: v.destination.clone(),
            dates: v.dates.clone(),
            price_range: v.price_range.clone(),
            hero_image: v.hero_image.clone(),
            dominant_personas: v.dominant_personas.clone(),
            squad_progress: v.squad_progress,
            squad_goal: v.squad_goal,
            description: v.description.clone(),
            lodging_info: v.lodging_info.clone(),
            reward_tiers: v.reward_tiers.clone(),
            itinerary: v.itinerary.clone(),
        }
    }
}

/// Rejects files written by an incompatible schema.
fn check_version(version: &str) -> Result<()> {
    let parsed = Version::parse(version)
        .map_err(|e| SnappError::config(format!("invalid catalog version '{version}': {e}")))?;
    let supported = Version::new(1, 0, 0);
    if parsed.major != supported.major {
        return Err(SnappError::config(format!(
            "unsupported catalog version {parsed} (expected {}.x)",
            supported.major
        )));
    }
    Ok(())
}

impl CatalogFileV1 {
    /// Converts to the domain catalog, filling missing sections from the
    /// built-in content. Does not validate.
    pub fn into_domain(self) -> Result<Catalog> {
        check_version(&self.version)?;
        let builtin = Catalog::builtin();

        let personas = match self.personas {
            Some(personas) => PersonaCatalog::new(personas),
            None => builtin.personas.clone(),
        };

        let questions = QuestionCatalog::new(
            self.questions
                .unwrap_or_else(|| builtin.questions.questions().to_vec()),
            self.followups
                .unwrap_or_else(|| builtin.questions.followups().to_vec()),
            self.modifiers
                .unwrap_or_else(|| builtin.questions.modifiers().to_vec()),
        );

        let vaycovers = match self.vaycovers {
            Some(vaycovers) => VaycoverCatalog::new(
                vaycovers
                    .into_iter()
                    .map(|dto| dto.into_domain(&personas))
                    .collect(),
            ),
            None => VaycoverCatalog::new(
                builtin
                    .vaycovers
                    .vaycovers()
                    .iter()
                    .map(|v| VaycoverDto::from(v).into_domain(&personas))
                    .collect(),
            ),
        };

        debug!(version = %self.version, "Converted catalog file");
        Ok(Catalog {
            personas,
            questions,
            vaycovers,
        })
    }

    /// Full snapshot of `catalog` at the current schema version.
    pub fn from_domain(catalog: &Catalog) -> Self {
        Self {
            version: CATALOG_SCHEMA_VERSION.to_string(),
            modifiers: Some(catalog.questions.modifiers().to_vec()),
            personas: Some(catalog.personas.personas().to_vec()),
            questions: Some(catalog.questions.questions().to_vec()),
            followups: Some(catalog.questions.followups().to_vec()),
            vaycovers: Some(
                catalog
                    .vaycovers
                    .vaycovers()
                    .iter()
                    .map(VaycoverDto::from)
                    .collect(),
            ),
        }
    }
}
