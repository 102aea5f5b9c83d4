//! Configuration type definitions.

use std::path::PathBuf;
use std::time::Duration;

/// Name of the greeting template file inside the data directory.
pub const GREETINGS_FILE: &str = "greetings.txt";

/// Root configuration structure. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord: DiscordConfig,
    pub console: ConsoleConfig,
    /// Directory holding `greetings.txt`.
    pub data_path: PathBuf,
    /// Delay between the end of one poll and the start of the next.
    pub poll_interval: Duration,
    /// Upper bound on one console round-trip. `None` waits forever.
    pub command_timeout: Option<Duration>,
}

/// Discord bot configuration.
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub token: String,
    /// Channel that receives join/leave announcements.
    pub chat_id: u64,
    /// Outbound proxy for Discord API traffic.
    pub proxy: Option<String>,
}

/// Remote console (RCON) connection parameters.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub host: String,
    pub port: u16,
    pub password: String,
}

impl Config {
    /// Full path of the greeting template file.
    pub fn greetings_path(&self) -> PathBuf {
        self.data_path.join(GREETINGS_FILE)
    }
}
