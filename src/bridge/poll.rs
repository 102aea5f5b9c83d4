//! The poll loop: query, parse, diff, notify, sleep, repeat.

use std::time::Duration;

use tracing::{debug, error, info};

use crate::bridge::{NotificationDispatcher, SessionState};
use crate::common::error::BridgeError;
use crate::common::PlayerSnapshot;
use crate::discord::ChatNotifier;
use crate::game::{commands, CommandExecutor, GreetingCatalog, ResponseParser};

/// Drives presence detection against one server and one chat channel.
pub struct PollLoop<E, N> {
    executor: E,
    notifier: N,
    catalog: GreetingCatalog,
    parser: ResponseParser,
    interval: Duration,
}

impl<E, N> PollLoop<E, N>
where
    E: CommandExecutor,
    N: ChatNotifier,
{
    pub fn new(executor: E, notifier: N, catalog: GreetingCatalog, interval: Duration) -> Self {
        Self {
            executor,
            notifier,
            catalog,
            parser: ResponseParser::new(),
            interval,
        }
    }

    /// Poll forever, sleeping `interval` after each iteration.
    pub async fn run(&self) {
        info!("Polling for players every {:.1}s", self.interval.as_secs_f64());

        let mut state = SessionState::new();
        loop {
            state = self.iterate(state).await;
            tokio::time::sleep(self.interval).await;
        }
    }

    /// Run one iteration and return the state for the next one.
    ///
    /// A failed poll leaves the state untouched. Once a snapshot is parsed
    /// it becomes the new baseline, even if announcing the changes fails.
    pub async fn iterate(&self, state: SessionState) -> SessionState {
        let snapshot = match self.poll().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                error!("Player poll failed: {}", e);
                return state;
            }
        };

        debug!("Players: {}", snapshot);
        let (next, changes) = state.advance(snapshot);

        match changes {
            None => info!(
                "Initial player list recorded: {}",
                next.last_snapshot()
            ),
            Some(changes) if changes.is_empty() => {}
            Some(changes) => {
                info!("Players online: {}", next.last_snapshot());
                let dispatcher = NotificationDispatcher::new(
                    &self.executor,
                    &self.notifier,
                    &self.catalog,
                    &self.parser,
                );
                if let Err(e) = dispatcher.dispatch(&changes).await {
                    error!("Notification failed, skipping the rest of this iteration: {}", e);
                }
            }
        }

        next
    }

    async fn poll(&self) -> Result<PlayerSnapshot, BridgeError> {
        let response = self.executor.execute(commands::LIST_PLAYERS).await?;
        Ok(self.parser.player_list(&response)?)
    }
}
