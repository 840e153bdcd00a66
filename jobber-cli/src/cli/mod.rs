pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jobber-cli",
    about = "Catalog scraper and booking assistant for the AceJobber marketplace",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the service catalog from the public API and save it locally
    Scrape,
    /// Project the saved catalog into a names-only summary file
    Extract,
    /// Browse or search the catalog interactively and post a job
    Chat,
}
