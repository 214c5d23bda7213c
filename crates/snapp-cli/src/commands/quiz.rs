//! `flightsnapp quiz`: the quiz on the terminal.

use std::io::{self, BufRead, Write};

use anyhow::{Context as _, Result};
use clap::Args;
use colored::Colorize;

use super::{Context, print_json};
use snapp_core::quiz::{DEFAULT_ANSWER, QuizSession, QuizStage};
use snapp_core::RawAnswer;

#[derive(Args)]
pub struct QuizArgs {
    /// Comma-separated modifiers to pick at the end (skips the prompt)
    #[arg(long, value_name = "LIST")]
    pub modifiers: Option<String>,

    /// Print the final quiz data as JSON
    #[arg(long)]
    pub json: bool,
}

/// Reads a slider value; blank input keeps the default.
fn read_answer(input: &mut impl BufRead) -> Result<RawAnswer> {
    loop {
        print!("  0-100 [{}]: ", DEFAULT_ANSWER as RawAnswer);
        io::stdout().flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(DEFAULT_ANSWER as RawAnswer);
        }
        let line = line.trim();
        if line.is_empty() {
            return Ok(DEFAULT_ANSWER as RawAnswer);
        }
        match line.parse::<RawAnswer>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("  {}", "Please enter a whole number.".red()),
        }
    }
}

fn read_line(input: &mut impl BufRead) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

pub async fn run(ctx: &Context, args: QuizArgs) -> Result<()> {
    let catalog = ctx.catalog().await?;
    let scorer = catalog.scorer()?;
    let mut session = QuizSession::new(&scorer);
    let stdin = io::stdin();
    let mut input = stdin.lock();

    println!("{}", "Rate each statement from 0 (disagree) to 100 (agree).".bold());
    while let Some(question) = session.current_question() {
        println!("\n{}. {}", question.id, question.text);
        let answer = read_answer(&mut input)?;
        let step = session.answer_core(answer)?;
        println!("  {}", step.feedback.italic());
        if let Some(teaser) = step.teaser {
            println!("\n  {}", teaser.cyan());
        }
        if let Some(persona) = step.assigned {
            println!(
                "\nYou are {} ({})",
                persona.name().green().bold(),
                persona.persona.vibe
            );
        }
    }

    while session.stage() == QuizStage::Followup {
        if let Some(followup) = session.current_followup() {
            println!("\n{}", followup.text);
        }
        let answer = read_answer(&mut input)?;
        session.answer_followup(answer)?;
    }

    let picks = match args.modifiers {
        Some(list) => list,
        None => {
            println!("\n{}", "Pick any modifiers (comma-separated, blank for none):".bold());
            println!("  {}", scorer.questions().modifiers().join(", ").dimmed());
            read_line(&mut input)?
        }
    };
    for modifier in picks.split(',').map(str::trim).filter(|m| !m.is_empty()) {
        session
            .toggle_modifier(modifier)
            .with_context(|| format!("Cannot select modifier '{modifier}'"))?;
    }

    let data = session.finish()?;
    if args.json {
        return print_json(&data);
    }
    println!("\n{} {}", "Persona:".bold(), data.assigned_persona_name.green());
    println!("{} {}", "Modifiers:".bold(), data.selected_modifiers.join(", "));
    Ok(())
}
