//! # CLI Structure and Argument Parsing
//!
//! This module defines the command-line interface for `slink`, a companion
//! for self-hosted URL shorteners. The CLI is built using `clap` with derive
//! macros for automatic help generation and argument validation.
//!
//! ## Usage Patterns
//!
//! ```bash
//! # Shorten with a server-suggested (or locally generated) slug
//! slink shorten https://example.com/some/long/path
//!
//! # Shorten with an explicit slug
//! slink shorten https://example.com/docs --slug docs
//!
//! # Page through stored URLs
//! slink list --page 2
//! slink browse
//!
//! # Slug utilities
//! slink slug --length 8
//! slink expand docs
//! ```
//!
//! ## Output Formats
//!
//! The `list` command supports multiple output formats:
//!
//! - **text**: Human-readable formatted output (default on a terminal)
//! - **json**: Machine-readable JSON for scripting
//! - **jsonl**: One JSON object per line for streaming

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

/// Main CLI structure for the `slink` command
///
/// Global options can be used with any command:
///
/// - `--server`: Point at a different shortener server (also via `SLINK_SERVER`)
/// - `--verbose`: Enable verbose logging output
/// - `--quiet`: Suppress informational messages
/// - `--no-color`: Disable ANSI colors
#[derive(Parser, Debug)]
#[command(name = "slink")]
#[command(version)]
#[command(about = "slink - manage a self-hosted URL shortener from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the shortener server (overrides the config file)
    #[arg(long, global = true, value_name = "URL", env = "SLINK_SERVER")]
    pub server: Option<String>,

    /// Path to configuration file (overrides autodiscovery). Also via `SLINK_CONFIG`.
    #[arg(long, global = true, value_name = "FILE", env = "SLINK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
}

/// Available subcommands for the `slink` CLI
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a URL
    Shorten {
        /// URL to shorten
        url: String,
        /// Slug to register (asks the server for one when omitted)
        #[arg(long)]
        slug: Option<String>,
        /// Length of the requested slug (defaults to the configured length)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        length: Option<u16>,
    },

    /// List stored URLs one page at a time
    List {
        /// Page to display, 1-based
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
        /// Output format (text, json, jsonl)
        #[arg(short = 'f', long = "format", value_enum)]
        format: Option<OutputFormat>,
    },

    /// Page through stored URLs interactively
    Browse,

    /// Print a slug without registering anything
    Slug {
        /// Length of the requested slug (defaults to the configured length)
        #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
        length: Option<u16>,
    },

    /// Look up the URL registered for a slug
    Expand {
        /// Slug to look up
        slug: String,
    },
}
