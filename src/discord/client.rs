//! Discord REST client.
//!
//! Only outgoing messages are needed, so no gateway connection is opened:
//! the bot posts to one channel through serenity's HTTP client.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use serenity::http::{Http, HttpBuilder};
use serenity::model::id::ChannelId;
use tracing::{debug, info};

use crate::common::error::{DiscordError, DiscordResult};
use crate::config::types::DiscordConfig;

/// Sends rendered text to the external chat channel.
pub trait ChatNotifier {
    fn send(&self, text: &str) -> impl Future<Output = DiscordResult<()>> + Send;
}

impl<T: ChatNotifier + ?Sized> ChatNotifier for &T {
    fn send(&self, text: &str) -> impl Future<Output = DiscordResult<()>> + Send {
        (**self).send(text)
    }
}

/// Posts messages to a single Discord channel.
#[derive(Clone)]
pub struct DiscordNotifier {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordNotifier {
    /// Build the HTTP client and verify the token.
    ///
    /// Fails when the proxy URL is unusable or Discord rejects the token.
    pub async fn connect(config: &DiscordConfig) -> DiscordResult<Self> {
        let http = build_http(config)?;

        let user = http.get_current_user().await?;
        info!("Discord bot authenticated as {}", user.name);

        Ok(Self {
            http: Arc::new(http),
            channel_id: ChannelId::new(config.chat_id),
        })
    }
}

impl ChatNotifier for DiscordNotifier {
    async fn send(&self, text: &str) -> DiscordResult<()> {
        debug!("Sending to Discord channel {}: {}", self.channel_id, text);
        self.channel_id.say(&self.http, text).await?;
        Ok(())
    }
}

fn build_http(config: &DiscordConfig) -> DiscordResult<Http> {
    // Build a custom reqwest client with timeout settings
    let mut builder = reqwest::Client::builder()
        .timeout(Duration::from_secs(15))
        .connect_timeout(Duration::from_secs(10));

    if let Some(ref url) = config.proxy {
        let proxy = reqwest::Proxy::all(url.as_str()).map_err(|e| DiscordError::InvalidProxy {
            url: url.clone(),
            message: e.to_string(),
        })?;
        builder = builder.proxy(proxy);
        info!("Discord traffic goes through the configured proxy");
    }

    let reqwest_client = builder.build()?;

    // Build the Serenity HTTP client with our custom reqwest client
    Ok(HttpBuilder::new(&config.token)
        .client(reqwest_client)
        .build())
}


#[cfg(test)]
mod tests {
    use super::*;

    fn discord_config(proxy: Option<&str>) -> DiscordConfig {
        DiscordConfig {
            token: "token".to_string(),
            chat_id: 42,
            proxy: proxy.map(str::to_string),
        }
    }

    #[test]
    fn test_build_http_without_proxy() {
        assert!(build_http(&discord_config(None)).is_ok());
    }

    #[test]
    fn test_build_http_with_proxy() {
        assert!(build_http(&discord_config(Some("http://127.0.0.1:3128"))).is_ok());
    }

    #[test]
    fn test_build_http_rejects_bad_proxy() {
        let result = build_http(&discord_config(Some("http://[invalid")));
        assert!(matches!(result, Err(DiscordError::InvalidProxy { .. })));
    }

    #[tokio::test]
    async fn test_mock_chat_failing_after() {
        let chat = mock::MockChat::failing_after(1);
        assert!(chat.send("first").await.is_ok());
        assert!(chat.send("second").await.is_err());
        assert_eq!(chat.sent(), vec!["first"]);
    }
}
