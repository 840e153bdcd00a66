//! Scrape command handler: fetch the catalog once and persist it.

use anyhow::Result;
use log::{error, info};

use crate::api::CatalogClient;
use crate::catalog::store;
use crate::config::Config;

/// Fetch the full catalog and overwrite the local catalog file. Both the
/// fetch and the write degrade on failure: the command logs and still exits
/// normally so a cron-style invocation never crashes.
pub async fn handle_scrape_command(config: &Config) -> Result<()> {
    info!("starting category fetch process");

    let client = CatalogClient::new(config)?;
    let categories = client.fetch_all_categories().await;

    let path = config.catalog_path();
    match store::save_catalog(&path, &categories) {
        Ok(()) => info!(
            "successfully saved {} categories to {}",
            categories.len(),
            path.display()
        ),
        Err(e) => {
            error!("failed to save categories: {e:#}");
            eprintln!("Error: failed to save catalog file: {e:#}");
        }
    }

    info!("scraped {} categories, process completed", categories.len());
    Ok(())
}
