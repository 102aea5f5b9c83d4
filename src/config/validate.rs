//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Token value shipped in example environment files.
const PLACEHOLDER_TOKEN: &str = "YOUR_DISCORD_TOKEN_HERE";

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    // Validate Discord config
    if config.discord.token.trim().is_empty() {
        errors.push("DOORKEEPER_BOT_TOKEN is required".to_string());
    }
    if config.discord.token == PLACEHOLDER_TOKEN {
        errors.push("DOORKEEPER_BOT_TOKEN has not been configured (still using placeholder)".to_string());
    }
    if config.discord.chat_id == 0 {
        errors.push("DOORKEEPER_CHAT_ID must be non-zero".to_string());
    }
    if let Some(ref proxy) = config.discord.proxy {
        if let Err(e) = reqwest::Url::parse(proxy) {
            errors.push(format!("DOORKEEPER_PROXY '{}' is not a valid URL: {}", proxy, e));
        }
    }

    // Validate console config
    if config.console.host.trim().is_empty() {
        errors.push("DOORKEEPER_RCON_HOST is required".to_string());
    }
    if config.console.port == 0 {
        errors.push("DOORKEEPER_RCON_PORT must be non-zero".to_string());
    }
    if config.console.password.is_empty() {
        errors.push("DOORKEEPER_RCON_PASS is required".to_string());
    }

    // Validate timing
    if config.poll_interval.is_zero() {
        errors.push("DOORKEEPER_POLL_INTERVAL must be greater than zero".to_string());
    }
    if config.command_timeout.is_some_and(|t| t.is_zero()) {
        errors.push("DOORKEEPER_COMMAND_TIMEOUT must be greater than zero".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn make_valid_config() -> Config {
        Config {
            discord: DiscordConfig {
                token: "valid_token_here".to_string(),
                chat_id: 987654321,
                proxy: None,
            },
            console: ConsoleConfig {
                host: "localhost".to_string(),
                port: 25575,
                password: "secret".to_string(),
            },
            data_path: PathBuf::from("./data"),
            poll_interval: Duration::from_secs(5),
            command_timeout: None,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = make_valid_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_token_fails() {
        let mut config = make_valid_config();
        config.discord.token = String::new();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("DOORKEEPER_BOT_TOKEN"));
    }

    #[test]
    fn test_placeholder_token_fails() {
        let mut config = make_valid_config();
        config.discord.token = "YOUR_DISCORD_TOKEN_HERE".to_string();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("placeholder"));
    }

    #[test]
    fn test_invalid_proxy_fails() {
        let mut config = make_valid_config();
        config.discord.proxy = Some("not a url".to_string());

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("DOORKEEPER_PROXY"));
    }

    #[test]
    fn test_valid_proxy_passes() {
        let mut config = make_valid_config();
        config.discord.proxy = Some("http://127.0.0.1:3128".to_string());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_errors_are_collected() {
        let mut config = make_valid_config();
        config.console.host = String::new();
        config.console.port = 0;
        config.poll_interval = Duration::ZERO;

        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("DOORKEEPER_RCON_HOST"));
        assert!(message.contains("DOORKEEPER_RCON_PORT"));
        assert!(message.contains("DOORKEEPER_POLL_INTERVAL"));
    }

    #[test]
    fn test_zero_timeout_fails() {
        let mut config = make_valid_config();
        config.command_timeout = Some(Duration::ZERO);
        assert!(validate_config(&config).is_err());
    }
}
