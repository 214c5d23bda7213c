use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

mod commands;

#[derive(Parser)]
#[command(name = "flightsnapp")]
#[command(about = "FlightSnapp CLI - travel personas, compatibility and curated trips", long_about = None)]
#[command(version)]
struct Cli {
    /// Log at debug level (otherwise RUST_LOG, defaulting to info)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this directory instead of ~/.config/flightsnapp
    #[arg(long, global = true, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score ten quiz answers and show the assigned persona
    Score(commands::score::ScoreArgs),
    /// Take the quiz interactively
    Quiz(commands::quiz::QuizArgs),
    /// Compatibility between two personas or trait vectors
    Compat(commands::compat::CompatArgs),
    /// Vaycovers ranked for a quiz result
    Vaycovers(commands::vaycover::VaycoversArgs),
    /// Join a vaycover squad
    Join(commands::vaycover::JoinArgs),
    /// Ask the curator for a trip plan
    Curate(commands::curate::CurateArgs),
    /// Inspect or export the catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::new(cli.config_dir);
    match cli.command {
        Commands::Score(args) => commands::score::run(&ctx, args).await?,
        Commands::Quiz(args) => commands::quiz::run(&ctx, args).await?,
        Commands::Compat(args) => commands::compat::run(&ctx, args).await?,
        Commands::Vaycovers(args) => commands::vaycover::list(&ctx, args).await?,
        Commands::Join(args) => commands::vaycover::join(&ctx, args).await?,
        Commands::Curate(args) => commands::curate::run(&ctx, args).await?,
        Commands::Catalog { action } => commands::catalog::run(&ctx, action).await?,
    }

    Ok(())
}
