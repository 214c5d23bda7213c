//! `flightsnapp vaycovers` and `flightsnapp join`

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;
use serde_json::json;

use super::{Context, parse_answers, print_json};
use snapp_core::vaycover::{share_text, share_url};

#[derive(Args)]
pub struct VaycoversArgs {
    /// Ten comma-separated slider answers; without them the list is unranked
    #[arg(long, value_name = "LIST")]
    pub answers: Option<String>,

    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct JoinArgs {
    /// Vaycover id, e.g. vaycover-1
    pub id: String,
}

pub async fn list(ctx: &Context, args: VaycoversArgs) -> Result<()> {
    let catalog = ctx.catalog().await?;

    let traits = match &args.answers {
        Some(raw) => {
            let answers = parse_answers(raw)?;
            Some(catalog.scorer()?.aggregate_traits(&answers).context("Failed to score answers")?)
        }
        None => None,
    };

    let entries: Vec<_> = match &traits {
        Some(traits) => catalog
            .vaycovers
            .ranked(traits)
            .into_iter()
            .map(|r| (r.vaycover, Some(r.compatibility)))
            .collect(),
        None => catalog.vaycovers.vaycovers().iter().map(|v| (v, None)).collect(),
    };

    if args.json {
        let items: Vec<_> = entries
            .iter()
            .map(|(v, score)| {
                json!({
                    "vaycover": v,
                    "compatibility": score,
                    "share_text": share_text(v, *score),
                    "share_url": share_url(v),
                })
            })
            .collect();
        return print_json(&items);
    }

    for (vaycover, score) in entries {
        let spotlight = if vaycover.is_spotlight { " ★" } else { "" };
        println!("{}{}", vaycover.title.bold(), spotlight.yellow());
        println!("  {} · {} · {}", vaycover.destination, vaycover.dates, vaycover.price_range);
        if let Some(score) = score {
            println!("  match {}", format!("{score}%").green());
        }
        println!(
            "  squad {}/{} ({}%)",
            vaycover.squad_progress,
            vaycover.squad_goal,
            vaycover.progress_percent()
        );
        if let Some(next) = vaycover.next_reward_tier() {
            println!("  next reward at {}: {}", next.member_count, next.reward);
        }
        println!("  {}", share_text(vaycover, score).dimmed());
        println!("  {}\n", share_url(vaycover).underline());
    }
    Ok(())
}

pub async fn join(ctx: &Context, args: JoinArgs) -> Result<()> {
    let (vaycover, unlocked) = ctx
        .repository()?
        .join_vaycover(&args.id)
        .await
        .with_context(|| format!("Failed to join '{}'", args.id))?;

    println!(
        "Joined {} ({}/{})",
        vaycover.title.bold(),
        vaycover.squad_progress,
        vaycover.squad_goal
    );
    for reward in unlocked {
        println!("  {} {}", "Unlocked:".green().bold(), reward);
    }
    Ok(())
}
