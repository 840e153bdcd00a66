use anyhow::Result;
use clap::Parser;

use jobber_cli::cli::{Cli, Commands, commands};
use jobber_cli::config::Config;
use jobber_cli::logging;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    logging::init(&config.log_path());

    let cli = Cli::parse();
    match cli.command {
        Commands::Scrape => commands::handle_scrape_command(&config).await,
        Commands::Extract => commands::handle_extract_command(&config),
        Commands::Chat => commands::handle_chat_command(&config),
    }
}
