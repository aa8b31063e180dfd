//! slink CLI - manage a self-hosted URL shortener from the terminal
//!
//! This is the main entry point for the slink command-line interface.
//! All command implementations are organized in separate modules for
//! better maintainability and single responsibility.

use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use slink_core::{ApiClient, Config};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;
    configure_colors(&cli);

    execute_command(cli).await
}

fn initialize_logging(cli: &Cli) -> Result<()> {
    let level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    // Logs go to stderr so stdout stays parseable in json/jsonl modes
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn configure_colors(cli: &Cli) {
    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }
}

async fn execute_command(cli: Cli) -> Result<()> {
    let quiet = cli.quiet;
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let base_url = cli
        .server
        .unwrap_or_else(|| config.server.base_url.clone());
    let api = ApiClient::with_timeout(&base_url, Duration::from_secs(config.server.timeout_secs))?;

    match cli.command {
        Commands::Shorten { url, slug, length } => {
            let length = length.map_or(config.slugs.length, usize::from);
            commands::shorten(&api, &url, slug.as_deref(), length, quiet).await?;
        },

        Commands::List { page, format } => {
            commands::list(&api, page, format, quiet).await?;
        },

        Commands::Browse => {
            commands::browse(&api, quiet).await?;
        },

        Commands::Slug { length } => {
            let length = length.map_or(config.slugs.length, usize::from);
            commands::slug(&api, length).await?;
        },

        Commands::Expand { slug } => {
            commands::expand(&api, &slug).await?;
        },
    }

    Ok(())
}
