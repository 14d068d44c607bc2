//! Intercom CLI
//!
//! Command-line interface for browsing and managing an Intercom workspace.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use intercom_client::config::DEFAULT_BASE_URL;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "intercom")]
#[command(about = "Intercom REST API CLI", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "INTERCOM_URL", default_value = DEFAULT_BASE_URL)]
    url: String,

    /// Access token, sent as a bearer token
    #[arg(long, env = "INTERCOM_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, env = "INTERCOM_TIMEOUT", default_value = "30")]
    timeout: u64,

    /// Print raw JSON instead of summaries
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for --json output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "intercom=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        url: cli.url,
        token: cli.token,
        timeout: cli.timeout,
        json: cli.json,
    };

    handle_command(cli.command, &config).await
}
