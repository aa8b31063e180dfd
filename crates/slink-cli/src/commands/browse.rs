//! Browse command implementation

use std::io::{self, BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use indicatif::ProgressBar;
use slink_core::{ApiClient, PageCache};

use crate::output;

/// Page through the stored URL collection interactively
///
/// Reads single-line commands from stdin: `n`/`next`, `p`/`prev`, a page
/// number, or `q`/`quit`. Pages already visited are shown without another
/// server round-trip.
pub async fn execute(api: &ApiClient, quiet: bool) -> Result<()> {
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        output::create_spinner("Fetching URLs...")
    };
    let mut cache = PageCache::new(api.clone()).await;
    spinner.finish_and_clear();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        render(&cache);

        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let input = line?;

        match input.trim() {
            "" => {},
            "q" | "quit" => break,
            "n" | "next" => cache.next().await,
            "p" | "prev" => cache.prev().await,
            other => {
                if let Ok(page) = other.parse::<u32>() {
                    cache.go_to(page).await;
                } else {
                    println!("Commands: n(ext), p(rev), a page number, q(uit)");
                }
            },
        }
    }

    Ok(())
}

fn render(cache: &PageCache) {
    if let Some(message) = cache.error() {
        eprintln!("{}", message.red());
    } else {
        output::print_page_text(
            cache.current_entries(),
            cache.current_page(),
            cache.total_pages(),
        );
    }
}
