//! Jibflags - JVM flags file layer extension
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use jibflags::cli::{Cli, Commands};
use jibflags::error::JibFlagsResult;
use jibflags::project::{Project, PROJECT_MANIFEST};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> JibFlagsResult<()> {
    let cli = Cli::parse();

    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("jibflags=warn"),
        1 => EnvFilter::new("jibflags=info"),
        _ => EnvFilter::new("jibflags=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let manifest = cli
        .project
        .clone()
        .unwrap_or_else(|| PathBuf::from(PROJECT_MANIFEST));
    let project = Project::load(&manifest).await?;

    match cli.command {
        Commands::Flags => jibflags::cli::commands::flags(&project).await,
        Commands::Render(args) => jibflags::cli::commands::render(args, &project).await,
        Commands::Apply(args) => jibflags::cli::commands::apply(args, &project).await,
    }
}
