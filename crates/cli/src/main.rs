mod chat;
mod cli;
mod logging;
mod serve;

use anyhow::Context;
use ar_core::config::load_config;
use ar_core::Runtime;
use ar_protocol::RuntimeConfig;
use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    run(cli).await.map_err(|e| color_eyre::eyre::eyre!("{e:#}"))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => load_config(path)
            .await
            .with_context(|| format!("failed to load configuration from {}", path.display()))?,
        None => RuntimeConfig::default(),
    };

    // Flushes the log file on exit.
    let _guard = logging::init(&config.logging)?;

    let runtime = Runtime::from_config(&config);
    runtime.bootstrap(&config.agents).await;

    match cli.command {
        Commands::Serve => {
            serve::run(&runtime, tokio::io::stdin(), tokio::io::stdout()).await
        }
        Commands::Chat { agent } => chat::run(&runtime, &agent).await,
    }
}
