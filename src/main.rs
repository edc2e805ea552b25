mod config;
mod http;
mod models;
mod nation;
mod report;
mod roster;
mod tasks;
mod voting;

use config::Config;
use log::{error, info, warn};
use voting::fetcher::ApiVoteFetcher;

/// Loads the roster, polls every delegate and returns the report lines.
/// A roster failure aborts before any vote request is made.
async fn run(config: &Config) -> Result<Vec<String>, Box<dyn std::error::Error + Send + Sync>> {
    let client = http::build_client(config)?;

    let roster = roster::load_roster(&client, &config.roster_url).await?;
    if roster.is_empty() {
        warn!("Roster at {} lists no delegates", config.roster_url);
    }

    let fetcher = ApiVoteFetcher::from_config(client, config);
    let results = tasks::poller::poll_all(&fetcher, &roster, config.request_delay).await;

    Ok(report::render(&results))
}

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    match run(&config).await {
        Ok(lines) => {
            info!("Vote report as of {}", chrono::Utc::now().to_rfc3339());
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            error!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
