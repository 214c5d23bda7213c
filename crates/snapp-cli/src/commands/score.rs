//! `flightsnapp score`

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use super::{Context, parse_answers, print_json};
use snapp_core::compute_compatibility;

#[derive(Args)]
pub struct ScoreArgs {
    /// Ten comma-separated slider answers (0-100), in question order
    #[arg(long, value_name = "LIST")]
    pub answers: String,

    /// Also list the next best personas
    #[arg(long, default_value_t = 3)]
    pub top: usize,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub async fn run(ctx: &Context, args: ScoreArgs) -> Result<()> {
    let answers = parse_answers(&args.answers)?;
    let catalog = ctx.catalog().await?;
    let scorer = catalog.scorer()?;
    let result = scorer.score(&answers).context("Failed to score answers")?;
    let ranked = catalog.personas.ranked(&result.traits, args.top);

    if args.json {
        return print_json(&json!({
            "traits": result.traits,
            "persona": result.persona,
            "ranked": ranked,
        }));
    }

    println!("{} {}", "Traits:".bold(), result.traits);
    println!(
        "{} {} ({})",
        "Persona:".bold(),
        result.persona.name().green().bold(),
        result.persona.persona.vibe
    );
    println!("  similarity {:.3}", result.persona.similarity_score);
    if !result.persona.persona.description.is_empty() {
        println!("  {}", result.persona.persona.description);
    }

    if !ranked.is_empty() {
        println!("\n{}", "Closest personas:".bold());
        for (rank, scored) in ranked.iter().enumerate() {
            println!(
                "  {}. {:<28} dot {:>6.3}  match {:>3}%",
                rank + 1,
                scored.name(),
                scored.similarity_score,
                compute_compatibility(&result.traits, &scored.persona.weights)
            );
        }
    }
    Ok(())
}
