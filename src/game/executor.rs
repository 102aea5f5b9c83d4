//! Console command execution.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::common::error::{ConsoleError, ConsoleResult};
use crate::config::types::ConsoleConfig;
use crate::protocol::rcon;

/// Runs one console command and returns its raw text output.
pub trait CommandExecutor {
    fn execute(&self, command: &str) -> impl Future<Output = ConsoleResult<String>> + Send;
}

impl<T: CommandExecutor + ?Sized> CommandExecutor for &T {
    fn execute(&self, command: &str) -> impl Future<Output = ConsoleResult<String>> + Send {
        (**self).execute(command)
    }
}

/// Executes commands over RCON, opening a fresh session for every call.
#[derive(Debug, Clone)]
pub struct RconExecutor {
    host: String,
    port: u16,
    password: String,
    timeout: Option<Duration>,
}

impl RconExecutor {
    pub fn new(config: &ConsoleConfig, timeout: Option<Duration>) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
            password: config.password.clone(),
            timeout,
        }
    }

    async fn round_trip(&self, command: &str) -> ConsoleResult<String> {
        let mut session = rcon::connect(&self.host, self.port).await?;
        session.authorize(&self.password).await?;
        let response = session.execute(command).await?;
        debug!("Console session for '{}' complete", command);
        Ok(response)
    }
}

impl CommandExecutor for RconExecutor {
    async fn execute(&self, command: &str) -> ConsoleResult<String> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.round_trip(command))
                .await
                .map_err(|_| ConsoleError::Timeout(limit))?,
            None => self.round_trip(command).await,
        }
    }
}

#[cfg(test)]
pub mod mock {
    //! Scripted executor for tests.

    use std::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    enum Reply {
        Text(String),
        Fail,
    }

    /// Answers commands by prefix and records every command it receives.
    #[derive(Debug, Default)]
    pub struct MockConsole {
        rules: Mutex<Vec<(String, Reply)>>,
        commands: Mutex<Vec<String>>,
    }

    impl MockConsole {
        pub fn new() -> Self {
            Self::default()
        }

        /// Answer commands starting with `prefix` with `text`.
        pub fn respond(self, prefix: &str, text: &str) -> Self {
            self.set_response(prefix, text);
            self
        }

        /// Fail commands starting with `prefix`.
        pub fn fail(self, prefix: &str) -> Self {
            self.set_rule(prefix, Reply::Fail);
            self
        }

        /// Replace the answer for `prefix`.
        pub fn set_response(&self, prefix: &str, text: &str) {
            self.set_rule(prefix, Reply::Text(text.to_string()));
        }

        fn set_rule(&self, prefix: &str, reply: Reply) {
            let mut rules = self.rules.lock().unwrap();
            rules.retain(|(p, _)| p != prefix);
            rules.push((prefix.to_string(), reply));
        }

        pub fn commands(&self) -> Vec<String> {
            self.commands.lock().unwrap().clone()
        }

        pub fn clear_commands(&self) {
            self.commands.lock().unwrap().clear();
        }
    }

    impl CommandExecutor for MockConsole {
        async fn execute(&self, command: &str) -> ConsoleResult<String> {
            self.commands.lock().unwrap().push(command.to_string());

            let reply = self
                .rules
                .lock()
                .unwrap()
                .iter()
                .find(|(prefix, _)| command.starts_with(prefix.as_str()))
                .map(|(_, reply)| reply.clone());

            match reply {
                Some(Reply::Text(text)) => Ok(text),
                Some(Reply::Fail) => Err(ConsoleError::Exec {
                    command: command.to_string(),
                    reason: "mock failure".to_string(),
                }),
                None => Ok(String::new()),
            }
        }
    }
}
