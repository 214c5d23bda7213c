//! `flightsnapp catalog`

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::Subcommand;
use colored::Colorize;

use super::{Context, print_json};
use snapp_core::Catalog;
use snapp_core::repository::CatalogRepository;
use snapp_infrastructure::SnappPaths;
use snapp_infrastructure::dto::CatalogFileV1;
use snapp_infrastructure::storage::AtomicTomlFile;

#[derive(Subcommand)]
pub enum CatalogAction {
    /// Show catalog sizes and where it was loaded from
    Show {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List persona names in catalog order
    Personas,
    /// Write the loaded catalog as TOML to a file
    Export {
        /// Destination file
        output: PathBuf,
    },
    /// Write the built-in catalog to the config directory
    Init {
        /// Overwrite an existing catalog.toml
        #[arg(long)]
        force: bool,
    },
    /// Create secret.json with an empty Gemini entry
    InitSecrets,
}

pub async fn run(ctx: &Context, action: CatalogAction) -> Result<()> {
    match action {
        CatalogAction::Show { json } => {
            let repo = ctx.repository()?;
            let catalog = ctx.catalog().await?;
            let summary = catalog.summary();
            if json {
                return print_json(&summary);
            }
            let source = if repo.path().exists() {
                repo.path().display().to_string()
            } else {
                "built-in".to_string()
            };
            println!("{} {}", "Source:".bold(), source);
            println!("  personas      {}", summary.personas);
            println!("  questions     {}", summary.questions);
            println!("  follow-ups    {}", summary.followup_sets);
            println!("  modifiers     {}", summary.modifiers);
            println!("  vaycovers     {}", summary.vaycovers);
        }
        CatalogAction::Personas => {
            let catalog = ctx.catalog().await?;
            for (i, persona) in catalog.personas.personas().iter().enumerate() {
                println!("{:>2}. {:<28} {}", i + 1, persona.name, persona.weights.to_string().dimmed());
            }
        }
        CatalogAction::Export { output } => {
            let catalog = ctx.catalog().await?;
            AtomicTomlFile::new(output.clone())
                .save(&CatalogFileV1::from_domain(&catalog))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!("Exported catalog to {}", output.display());
        }
        CatalogAction::Init { force } => {
            let repo = ctx.repository()?;
            if repo.path().exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    repo.path().display()
                );
            }
            repo.save(&Catalog::builtin()).await?;
            println!("Wrote {}", repo.path().display());
        }
        CatalogAction::InitSecrets => {
            let path = SnappPaths::new(ctx.config_dir()).ensure_secret_file()?;
            println!("Secrets file: {}", path.display());
        }
    }
    Ok(())
}
