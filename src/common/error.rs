//! Error types for the application.

use thiserror::Error;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {field}")]
    MissingField { field: String },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Greeting catalog loading errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read greetings file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Greetings file '{path}' contains no greetings")]
    Empty { path: String },
}

/// RCON wire protocol errors.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Invalid packet: {message}")]
    InvalidPacket { message: String },

    #[error("Packet too large: {size} bytes (max {max})")]
    PacketTooLarge { size: usize, max: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a single console command round-trip.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to connect to {host}:{port}: {source}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("Console authorization failed: {reason}")]
    Auth { reason: String },

    #[error("Failed to execute command '{command}': {reason}")]
    Exec { command: String, reason: String },

    #[error("Console command timed out after {0:?}")]
    Timeout(std::time::Duration),
}

/// Console response parsing errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Player list response has no ': ' separator: {response:?}")]
    MissingSeparator { response: String },
}

/// Discord-related errors.
#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Invalid proxy URL '{url}': {message}")]
    InvalidProxy { url: String, message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Serenity error: {0}")]
    Serenity(#[from] serenity::Error),
}

/// Iteration-local error. Logged by the poll loop, never fatal.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Discord error: {0}")]
    Discord(#[from] DiscordError),
}

/// Result type alias for console operations.
pub type ConsoleResult<T> = std::result::Result<T, ConsoleError>;

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = std::result::Result<T, ProtocolError>;

/// Result type alias for Discord operations.
pub type DiscordResult<T> = std::result::Result<T, DiscordError>;
