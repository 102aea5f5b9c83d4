//! Configuration from environment variables.
//!
//! Every setting is read from a `DOORKEEPER_`-prefixed variable:
//! - `DOORKEEPER_BOT_TOKEN` - Discord bot token (required)
//! - `DOORKEEPER_CHAT_ID` - Discord channel id (required)
//! - `DOORKEEPER_PROXY` - Proxy URL for Discord traffic
//! - `DOORKEEPER_RCON_HOST` - Console host (required)
//! - `DOORKEEPER_RCON_PORT` - Console port (required)
//! - `DOORKEEPER_RCON_PASS` - Console password (required)
//! - `DOORKEEPER_DATA_PATH` - Directory with `greetings.txt` (default `./data`)
//! - `DOORKEEPER_POLL_INTERVAL` - Delay between polls (default `5s`)
//! - `DOORKEEPER_COMMAND_TIMEOUT` - Console round-trip timeout (default none)

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::common::error::ConfigError;
use crate::config::types::{Config, ConsoleConfig, DiscordConfig};

/// Environment variable prefix for all settings.
const ENV_PREFIX: &str = "DOORKEEPER";

pub const DEFAULT_DATA_PATH: &str = "./data";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Load configuration from the process environment.
pub fn load_from_env() -> Result<Config, ConfigError> {
    load_with(|name| env::var(name).ok())
}

/// Load configuration using `lookup` to resolve full variable names.
pub fn load_with<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |suffix: &str| lookup(&var_name(suffix));

    let required = |suffix: &str| {
        get(suffix).ok_or_else(|| ConfigError::MissingField {
            field: var_name(suffix),
        })
    };

    let discord = DiscordConfig {
        token: required("BOT_TOKEN")?,
        chat_id: parse_value("CHAT_ID", &required("CHAT_ID")?)?,
        proxy: get("PROXY").filter(|p| !p.trim().is_empty()),
    };

    let console = ConsoleConfig {
        host: required("RCON_HOST")?,
        port: parse_value("RCON_PORT", &required("RCON_PORT")?)?,
        password: required("RCON_PASS")?,
    };

    let data_path = get("DATA_PATH")
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

    let poll_interval = match get("POLL_INTERVAL") {
        Some(value) => duration_value("POLL_INTERVAL", &value)?,
        None => DEFAULT_POLL_INTERVAL,
    };

    let command_timeout = match get("COMMAND_TIMEOUT") {
        Some(value) if !value.trim().is_empty() => Some(duration_value("COMMAND_TIMEOUT", &value)?),
        _ => None,
    };

    Ok(Config {
        discord,
        console,
        data_path: PathBuf::from(data_path),
        poll_interval,
        command_timeout,
    })
}

fn var_name(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}

fn parse_value<T>(suffix: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
        field: var_name(suffix),
        message: format!("'{}': {}", value, e),
    })
}

fn duration_value(suffix: &str, value: &str) -> Result<Duration, ConfigError> {
    parse_duration(value).ok_or_else(|| ConfigError::InvalidValue {
        field: var_name(suffix),
        message: format!("'{}' is not a duration (expected e.g. 500ms, 5s, 1m30s)", value),
    })
}

/// Parse a duration like `500ms`, `5s`, `2m`, `1h` or `1m30s`.
///
/// Every number needs a unit. Returns `None` for anything else.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return None;
    }

    let mut total_millis: u64 = 0;
    let mut current_num = String::new();
    let mut chars = s.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch.is_ascii_digit() {
            current_num.push(ch);
            continue;
        }

        if current_num.is_empty() {
            return None; // unit without number
        }
        let value: u64 = current_num.parse().ok()?;
        current_num.clear();

        let unit_millis = match ch {
            'h' => 3_600_000,
            'm' if chars.peek() == Some(&'s') => {
                chars.next();
                1
            }
            'm' => 60_000,
            's' => 1_000,
            _ => return None,
        };
        total_millis = total_millis.checked_add(value.checked_mul(unit_millis)?)?;
    }

    // Trailing number without unit
    if !current_num.is_empty() {
        return None;
    }

    Some(Duration::from_millis(total_millis))
}
