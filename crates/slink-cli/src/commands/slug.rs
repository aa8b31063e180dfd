//! Slug command implementation

use anyhow::Result;
use slink_core::{ApiClient, SlugResolver};

/// Print a slug of the requested length without registering anything
///
/// Useful for scripting and for checking what the server would suggest.
pub async fn execute(api: &ApiClient, length: usize) -> Result<()> {
    let resolver = SlugResolver::new(api.clone());
    let slug = resolver.resolve(length).await?;
    println!("{slug}");
    Ok(())
}
