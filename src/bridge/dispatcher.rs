//! Join/leave notification delivery.
//!
//! A joining player is greeted in game, by the nearest named entity when
//! there is one, and announced in Discord. A leaving player is only
//! announced in Discord.

use tracing::{debug, info};

use crate::common::error::BridgeError;
use crate::common::{Destination, Notification, PresenceDiff};
use crate::discord::formatter;
use crate::discord::ChatNotifier;
use crate::game::greetings::{self, GreetingCatalog};
use crate::game::{commands, CommandExecutor, GreeterResolver, ResponseParser};

/// Sends notifications for one iteration's presence changes.
pub struct NotificationDispatcher<'a, E, N> {
    executor: &'a E,
    notifier: &'a N,
    catalog: &'a GreetingCatalog,
    parser: &'a ResponseParser,
}

impl<'a, E, N> NotificationDispatcher<'a, E, N>
where
    E: CommandExecutor,
    N: ChatNotifier,
{
    pub fn new(
        executor: &'a E,
        notifier: &'a N,
        catalog: &'a GreetingCatalog,
        parser: &'a ResponseParser,
    ) -> Self {
        Self {
            executor,
            notifier,
            catalog,
            parser,
        }
    }

    /// Announce every joined player, then every left player.
    ///
    /// Stops at the first failed send; later entries are not announced.
    pub async fn dispatch(&self, changes: &PresenceDiff) -> Result<(), BridgeError> {
        for player in &changes.joined {
            self.announce_join(player).await?;
        }
        for player in &changes.left {
            self.announce_leave(player).await?;
        }
        Ok(())
    }

    pub async fn announce_join(&self, player: &str) -> Result<(), BridgeError> {
        let greeter = GreeterResolver::new(self.executor, self.parser)
            .resolve(player)
            .await;
        let greeting = greetings::render(self.catalog.pick(), player);

        info!(
            "{} joined; greeting by {}: {}",
            player,
            greeter.as_deref().unwrap_or("server"),
            greeting
        );

        self.deliver(&Notification::game_chat(greeter, greeting)).await?;
        self.deliver(&Notification::external(formatter::joined_message(player)))
            .await
    }

    pub async fn announce_leave(&self, player: &str) -> Result<(), BridgeError> {
        info!("{} left", player);
        self.deliver(&Notification::external(formatter::left_message(player)))
            .await
    }

    /// Send one notification to its destination.
    pub async fn deliver(&self, notification: &Notification) -> Result<(), BridgeError> {
        match notification.destination {
            Destination::GameChat { speaker: Some(ref greeter) } => {
                let command = commands::say_as(greeter, &notification.text);
                self.executor.execute(&command).await?;
            }
            Destination::GameChat { speaker: None } => {
                let command = commands::broadcast(&notification.text);
                self.executor.execute(&command).await?;
            }
            Destination::ExternalChat => {
                self.notifier.send(&notification.text).await?;
            }
        }
        debug!("Delivered to {:?}: {}", notification.destination, notification.text);
        Ok(())
    }
}
