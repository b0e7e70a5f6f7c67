//! census-curate CLI - curated Census Reporter topic tables.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();

    let result = match cli.command {
        Commands::Render {
            request,
            format,
            output,
        } => commands::render::run(request, format, output, cli.verbose),

        Commands::Raw {
            request,
            moe,
            labels,
            output,
        } => commands::raw::run(request, moe, labels, output, cli.verbose),

        Commands::Migrate { file } => commands::migrate::run(file),

        Commands::Topics { json } => commands::topics::run(json, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
