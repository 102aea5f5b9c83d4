//! Doorkeeper - Minecraft join/leave announcer for Discord
//!
//! Polls a Minecraft server over RCON for the online player list, greets
//! players who join in game and announces joins and leaves in a Discord
//! channel.

mod bridge;
mod common;
mod config;
mod discord;
mod game;
mod protocol;

use anyhow::Result;
use tokio::signal;
use tracing::{error, info};

use bridge::PollLoop;
use config::load_and_validate;
use discord::DiscordNotifier;
use game::{GreetingCatalog, RconExecutor};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Doorkeeper v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = load_and_validate().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        error!("Set the DOORKEEPER_* environment variables and try again.");
        e
    })?;

    info!("Configuration loaded successfully");
    info!("  Console: {}:{}", config.console.host, config.console.port);
    info!("  Discord channel: {}", config.discord.chat_id);
    info!("  Proxy: {}", if config.discord.proxy.is_some() { "enabled" } else { "disabled" });
    info!("  Data path: {}", config.data_path.display());
    info!("  Poll interval: {:.1}s", config.poll_interval.as_secs_f64());

    let catalog = GreetingCatalog::load(config.greetings_path()).map_err(|e| {
        error!("Failed to load greetings: {}", e);
        e
    })?;

    let notifier = DiscordNotifier::connect(&config.discord).await.map_err(|e| {
        error!("Failed to set up Discord client: {}", e);
        e
    })?;

    let executor = RconExecutor::new(&config.console, config.command_timeout);
    let poll_loop = PollLoop::new(executor, notifier, catalog, config.poll_interval);

    info!("Started");

    tokio::select! {
        _ = poll_loop.run() => {},
        _ = shutdown_signal() => info!("Shutdown signal received"),
    }

    info!("Exiting...");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
