//! The catalog bundle and its persistence seam.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::error::{Result, SnappError};
use crate::persona::PersonaCatalog;
use crate::quiz::QuestionCatalog;
use crate::scorer::PersonaScorer;
use crate::vaycover::{VaycoverCatalog, default_vaycovers};

/// Everything the app reads at runtime: personas, quiz content, vaycovers.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    pub personas: PersonaCatalog,
    pub questions: QuestionCatalog,
    pub vaycovers: VaycoverCatalog,
}

/// Sizes of a loaded catalog, for display.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    pub personas: usize,
    pub questions: usize,
    pub followup_sets: usize,
    pub modifiers: usize,
    pub vaycovers: usize,
}

impl Catalog {
    /// The compiled-in content.
    pub fn builtin() -> Self {
        Self {
            personas: PersonaCatalog::builtin().clone(),
            questions: QuestionCatalog::builtin().clone(),
            vaycovers: VaycoverCatalog::new(default_vaycovers()),
        }
    }

    /// Validates each part and the references between them. Every persona
    /// must have a follow-up set, and follow-ups and vaycovers may only name
    /// known personas.
    pub fn validate(&self) -> Result<()> {
        self.personas.validate()?;
        self.questions.validate()?;
        for persona in self.personas.personas() {
            if self.questions.followups_for(&persona.name).is_err() {
                return Err(SnappError::config(format!(
                    "persona '{}' has no follow-up questions",
                    persona.name
                )));
            }
        }
        self.vaycovers.validate(&self.personas)
    }

    /// A scorer sharing this catalog's persona and question content.
    pub fn scorer(&self) -> Result<PersonaScorer> {
        PersonaScorer::new(
            Arc::new(self.questions.clone()),
            Arc::new(self.personas.clone()),
        )
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            personas: self.personas.len(),
            questions: self.questions.len(),
            followup_sets: self.questions.followups().len(),
            modifiers: self.questions.modifiers().len(),
            vaycovers: self.vaycovers.len(),
        }
    }

    /// Logs the catalog sizes at info level.
    pub fn log_loaded(&self, source: &str) {
        let summary = self.summary();
        info!(
            source,
            personas = summary.personas,
            questions = summary.questions,
            vaycovers = summary.vaycovers,
            "Catalog loaded"
        );
    }
}

/// Persistence for the catalog.
///
/// The catalog is read-only at runtime; `save` exists for exporting and
/// editing the content offline.
#[async_trait::async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Loads and validates the catalog. Returns the built-in catalog if
    /// nothing has been stored yet.
    async fn load(&self) -> Result<Catalog>;

    /// Validates and stores the catalog.
    async fn save(&self, catalog: &Catalog) -> Result<()>;
}

/// Serves the compiled-in catalog and refuses writes.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinCatalogRepository;

#[async_trait::async_trait]
impl CatalogRepository for BuiltinCatalogRepository {
    async fn load(&self) -> Result<Catalog> {
        let catalog = Catalog::builtin();
        catalog.log_loaded("builtin");
        Ok(catalog)
    }

    async fn save(&self, _catalog: &Catalog) -> Result<()> {
        Err(SnappError::config("the built-in catalog is read-only"))
    }
}
