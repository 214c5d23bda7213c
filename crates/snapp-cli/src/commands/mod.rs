//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context as _, Result, bail};

use snapp_core::repository::CatalogRepository;
use snapp_core::{Catalog, RawAnswer, TraitVector};
use snapp_infrastructure::TomlCatalogRepository;

pub mod catalog;
pub mod compat;
pub mod curate;
pub mod quiz;
pub mod score;
pub mod vaycover;

/// Shared state for every subcommand.
pub struct Context {
    config_dir: Option<PathBuf>,
}

impl Context {
    pub fn new(config_dir: Option<PathBuf>) -> Self {
        Self { config_dir }
    }

    pub fn config_dir(&self) -> Option<&std::path::Path> {
        self.config_dir.as_deref()
    }

    pub fn repository(&self) -> Result<TomlCatalogRepository> {
        TomlCatalogRepository::new(self.config_dir()).context("Failed to resolve catalog path")
    }

    pub async fn catalog(&self) -> Result<Catalog> {
        self.repository()?
            .load()
            .await
            .context("Failed to load catalog")
    }
}

/// Parses `"60,40,..."` style lists. Blank input yields an empty list.
pub fn parse_answers(raw: &str) -> Result<Vec<RawAnswer>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<RawAnswer>()
                .with_context(|| format!("'{s}' is not a whole number"))
        })
        .collect()
}

/// Parses `"O,C,E,A,N"` into a trait vector.
pub fn parse_vector(raw: &str) -> Result<TraitVector> {
    let values: Vec<f64> = raw
        .split(',')
        .map(|s| {
            s.trim()
                .parse::<f64>()
                .with_context(|| format!("'{}' is not a number", s.trim()))
        })
        .collect::<Result<_>>()?;
    let Ok(values) = <[f64; 5]>::try_from(values) else {
        bail!("a trait vector needs exactly five values (O,C,E,A,N)");
    };
    Ok(TraitVector::from_array(values))
}

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
