//! Expand command implementation

use anyhow::Result;
use slink_core::ApiClient;

/// Print the URL registered for a slug
pub async fn execute(api: &ApiClient, slug: &str) -> Result<()> {
    let url = api.expand(slug).await?;
    println!("{url}");
    Ok(())
}
