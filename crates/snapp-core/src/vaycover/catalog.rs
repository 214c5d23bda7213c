//! The read-only vaycover catalog.

use std::collections::HashSet;

use super::matching::{RankedVaycover, rank_by_compatibility};
use super::model::Vaycover;
use crate::big_five::TraitVector;
use crate::error::{Result, SnappError};
use crate::persona::PersonaCatalog;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VaycoverCatalog {
    vaycovers: Vec<Vaycover>,
}

impl VaycoverCatalog {
    pub fn new(vaycovers: Vec<Vaycover>) -> Self {
        Self { vaycovers }
    }

    pub fn vaycovers(&self) -> &[Vaycover] {
        &self.vaycovers
    }

    pub fn len(&self) -> usize {
        self.vaycovers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vaycovers.is_empty()
    }

    pub fn find(&self, id: &str) -> Result<&Vaycover> {
        self.vaycovers
            .iter()
            .find(|v| v.id == id)
            .ok_or_else(|| SnappError::not_found("vaycover", id))
    }

    /// The spotlight vaycover, falling back to the first entry.
    pub fn spotlight(&self) -> Option<&Vaycover> {
        self.vaycovers
            .iter()
            .find(|v| v.is_spotlight)
            .or_else(|| self.vaycovers.first())
    }

    pub fn ranked(&self, user: &TraitVector) -> Vec<RankedVaycover<'_>> {
        rank_by_compatibility(user, &self.vaycovers)
    }

    /// Ids must be unique, weights valid and dominant personas known.
    pub fn validate(&self, personas: &PersonaCatalog) -> Result<()> {
        let mut ids = HashSet::new();
        for vaycover in &self.vaycovers {
            if !ids.insert(vaycover.id.as_str()) {
                return Err(SnappError::config(format!(
                    "duplicate vaycover id '{}'",
                    vaycover.id
                )));
            }
            vaycover.ideal_weights.validate().map_err(|e| {
                SnappError::invalid_vector(format!("vaycover '{}': {e}", vaycover.id))
            })?;
            if let Some(unknown) = vaycover
                .dominant_personas
                .iter()
                .find(|name| !personas.contains(name))
            {
                return Err(SnappError::config(format!(
                    "vaycover '{}' references unknown persona '{unknown}'",
                    vaycover.id
                )));
            }
        }
        Ok(())
    }
}
