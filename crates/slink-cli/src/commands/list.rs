//! List command implementation

use anyhow::Result;
use indicatif::ProgressBar;
use slink_core::{ApiClient, PageCache};
use tracing::warn;

use crate::output::{self, OutputFormat};

/// Display one page of the stored URL collection
pub async fn execute(
    api: &ApiClient,
    page: u32,
    format: Option<OutputFormat>,
    quiet: bool,
) -> Result<()> {
    let format = output::resolve_format(format);

    let spinner = if quiet || format != OutputFormat::Text {
        ProgressBar::hidden()
    } else {
        output::create_spinner("Fetching URLs...")
    };
    let mut cache = PageCache::new(api.clone()).await;
    cache.go_to(page).await;
    spinner.finish_and_clear();

    if let Some(message) = cache.error() {
        anyhow::bail!("{message}");
    }
    if page != cache.current_page() {
        warn!(
            "Page {page} is out of range, showing page {} of {}",
            cache.current_page(),
            cache.total_pages()
        );
    }

    match format {
        OutputFormat::Text => output::print_page_text(
            cache.current_entries(),
            cache.current_page(),
            cache.total_pages(),
        ),
        OutputFormat::Json => output::print_page_json(cache.current_entries())?,
        OutputFormat::Jsonl => output::print_page_jsonl(cache.current_entries())?,
    }

    Ok(())
}
