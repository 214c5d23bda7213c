//! `flightsnapp compat`

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::{Context, parse_vector, print_json};
use snapp_core::{Catalog, TraitVector, compute_compatibility};

#[derive(Args)]
pub struct CompatArgs {
    /// Persona name or five comma-separated weights (O,C,E,A,N)
    pub left: String,

    /// Persona name or five comma-separated weights (O,C,E,A,N)
    pub right: String,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn resolve(catalog: &Catalog, input: &str) -> Result<TraitVector> {
    if let Ok(persona) = catalog.personas.find(input) {
        return Ok(persona.weights);
    }
    parse_vector(input)
        .map_err(|e| e.context(format!("'{input}' is neither a persona nor a trait vector")))
}

pub async fn run(ctx: &Context, args: CompatArgs) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let left = resolve(&catalog, &args.left)?;
    let right = resolve(&catalog, &args.right)?;
    let score = compute_compatibility(&left, &right);

    if args.json {
        return print_json(&serde_json::json!({
            "left": left,
            "right": right,
            "compatibility": score,
        }));
    }

    let label = format!("{score}%");
    let label = match score {
        70..=100 => label.green(),
        40..=69 => label.yellow(),
        _ => label.red(),
    };
    println!("{} {}", "Compatibility:".bold(), label.bold());
    Ok(())
}
