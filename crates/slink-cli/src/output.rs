//! # Output Formatting
//!
//! Output formatting for the `slink` CLI. Listing commands support
//! human-readable text plus JSON and newline-delimited JSON for
//! programmatic consumption:
//!
//! ```bash
//! # Human-readable output (default on a terminal)
//! slink list
//!
//! # JSON for scripts
//! slink list --format json | jq '.[] | .slug'
//!
//! # Streaming JSON for processing
//! slink list --format jsonl | while read line; do
//!     echo "$line" | jq .url
//! done
//! ```

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use is_terminal::IsTerminal;
use slink_core::UrlMapping;

/// Output format for listing commands
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON array output
    Json,
    /// Newline-delimited JSON output
    Jsonl,
}

/// Resolves the effective output format.
///
/// An explicit flag always wins. Without one, a terminal gets text and a
/// pipe gets JSON so scripts never have to strip formatting.
pub fn resolve_format(format: Option<OutputFormat>) -> OutputFormat {
    format.unwrap_or_else(|| {
        if std::io::stdout().is_terminal() {
            OutputFormat::Text
        } else {
            OutputFormat::Json
        }
    })
}

/// Prints one listing page in human-readable form with a page footer.
pub fn print_page_text(entries: &[UrlMapping], current_page: u32, total_pages: u32) {
    if entries.is_empty() {
        println!("No short links yet. Use 'slink shorten' to create one.");
    } else {
        for mapping in entries {
            println!("{} -> {}", mapping.slug.green(), mapping.url.bright_black());
        }
    }
    println!();
    println!("Page {current_page} of {total_pages}");
}

/// Prints one listing page as a JSON array.
pub fn print_page_json(entries: &[UrlMapping]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(entries)?);
    Ok(())
}

/// Prints one listing page as newline-delimited JSON, one mapping per line.
pub fn print_page_jsonl(entries: &[UrlMapping]) -> Result<()> {
    for mapping in entries {
        println!("{}", serde_json::to_string(mapping)?);
    }
    Ok(())
}

/// Creates a spinner for a server round-trip of unknown duration.
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb
}
