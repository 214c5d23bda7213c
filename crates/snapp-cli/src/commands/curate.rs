//! `flightsnapp curate`

use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use super::{Context, parse_answers, print_json};
use snapp_core::config::SecretService;
use snapp_core::curator::{TripSettings, UserInputs};
use snapp_core::quiz::{QuizData, derive_modifiers};
use snapp_infrastructure::SecretServiceImpl;
use snapp_interaction::{CuratorService, GeminiApiAgent};

#[derive(Args)]
pub struct CurateArgs {
    /// Ten comma-separated slider answers (0-100)
    #[arg(long, value_name = "LIST")]
    pub answers: String,

    /// Answers to the assigned persona's follow-ups (default: all neutral)
    #[arg(long, value_name = "LIST")]
    pub followups: Option<String>,

    /// Comma-separated modifiers
    #[arg(long, value_name = "LIST", default_value = "")]
    pub modifiers: String,

    #[arg(long)]
    pub city: String,

    #[arg(long)]
    pub budget_min: u32,

    #[arg(long)]
    pub budget_max: u32,

    /// Earliest departure, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    #[arg(long, default_value_t = 1)]
    pub travelers: u32,

    /// Print the prompt instead of calling the model
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(ctx: &Context, args: CurateArgs) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let scorer = catalog.scorer()?;

    let quiz_answers = parse_answers(&args.answers)?;
    let result = scorer.score(&quiz_answers).context("Failed to score answers")?;
    let followups = scorer.questions().followups_for(result.persona.name())?;
    let followup_answers = match &args.followups {
        Some(raw) => parse_answers(raw)?,
        None => vec![50; followups.len()],
    };
    let selected: Vec<String> = args
        .modifiers
        .split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect();
    if let Some(unknown) = selected.iter().find(|m| !scorer.questions().is_known_modifier(m)) {
        anyhow::bail!("unknown modifier '{unknown}'");
    }

    let quiz = QuizData {
        selected_modifiers: derive_modifiers(followups, &followup_answers, &selected)?,
        quiz_answers,
        followup_answers,
        assigned_persona_name: result.persona.name().to_string(),
    };
    let settings = TripSettings {
        departure_city: args.city,
        budget_min: args.budget_min,
        budget_max: args.budget_max,
        departure_date: args.date,
        travelers: args.travelers,
    };
    let inputs = UserInputs::from_quiz(&settings, &quiz).context("Invalid trip settings")?;

    let personas = Arc::new(catalog.personas.clone());
    if args.dry_run {
        let prompt = snapp_interaction::PromptBuilder::new()?.build(&personas, &inputs)?;
        println!("{prompt}");
        return Ok(());
    }

    let secrets = SecretServiceImpl::new(ctx.config_dir())?;
    if !secrets.secret_file_exists().await {
        tracing::debug!(path = %secrets.path().display(), "No secret file, relying on environment");
    }
    let agent = GeminiApiAgent::try_from_secrets(&secrets)
        .await
        .context("Gemini is not configured")?;

    eprintln!("{}", "Curating your trip...".cyan());
    let service = CuratorService::new(Arc::new(agent), personas)?;
    let response = service.curate(&inputs).await.context("Curator request failed")?;
    print_json(&response)
}
