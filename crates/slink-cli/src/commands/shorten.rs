//! Shorten command implementation

use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use slink_core::{ApiClient, Error, SlugResolver};

use crate::output::create_spinner;

const SLUG_OCCUPIED: &str = "This short URL is occupied. Please try another one.";
const SHORTEN_FAILED: &str = "An unexpected error has occurred. Please try again later.";

/// Register a short URL for `url`
///
/// Without an explicit slug the server is asked to suggest one, with a
/// locally generated slug as the fallback when the server cannot help.
/// The resulting short link is printed on stdout.
pub async fn execute(
    api: &ApiClient,
    url: &str,
    slug: Option<&str>,
    length: usize,
    quiet: bool,
) -> Result<()> {
    let slug = match slug {
        Some(explicit) => explicit.to_string(),
        None => SlugResolver::new(api.clone()).resolve(length).await?,
    };

    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        create_spinner("Registering short URL...")
    };
    let outcome = api.shorten(&slug, url).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(stored) => {
            let short_link = format!("{}/{stored}", api.base_url());
            if quiet {
                println!("{short_link}");
            } else {
                println!("{} {short_link}", "✓ Shortened:".green());
            }
            Ok(())
        },
        Err(Error::SlugOccupied(_)) => anyhow::bail!(SLUG_OCCUPIED),
        Err(failure) => {
            tracing::error!(category = failure.category(), "{failure}");
            anyhow::bail!(SHORTEN_FAILED)
        },
    }
}
