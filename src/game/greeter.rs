//! Greeter resolution.
//!
//! A greeter is the nearest custom-named entity to a joining player. When
//! one exists it speaks the greeting instead of the server.

use tracing::{debug, warn};

use crate::game::commands;
use crate::game::executor::CommandExecutor;
use crate::game::parser::ResponseParser;

/// Finds the greeter for a joining player.
pub struct GreeterResolver<'a, E> {
    executor: &'a E,
    parser: &'a ResponseParser,
}

impl<'a, E: CommandExecutor> GreeterResolver<'a, E> {
    pub fn new(executor: &'a E, parser: &'a ResponseParser) -> Self {
        Self { executor, parser }
    }

    /// Name of the nearest custom-named entity to `player`, if any.
    ///
    /// A failed lookup is logged and treated like "none found" so the
    /// greeting falls back to a server broadcast.
    pub async fn resolve(&self, player: &str) -> Option<String> {
        let response = match self.executor.execute(&commands::find_greeter(player)).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Greeter lookup for {} failed: {}", player, e);
                return None;
            }
        };

        let greeter = self.parser.greeter_name(&response);
        match greeter {
            Some(ref name) => debug!("Nearest named entity to {} is {}", player, name),
            None => debug!("No named entity near {}", player),
        }
        greeter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::executor::mock::MockConsole;

    #[tokio::test]
    async fn test_resolves_named_entity() {
        let console = MockConsole::new().respond(
            "/execute at Bob",
            r#"Steve has the following entity data: '{"text":"Steve"}'"#,
        );
        let parser = ResponseParser::new();
        let resolver = GreeterResolver::new(&console, &parser);

        assert_eq!(resolver.resolve("Bob").await, Some("Steve".to_string()));
        assert_eq!(
            console.commands(),
            vec![commands::find_greeter("Bob")]
        );
    }

    #[tokio::test]
    async fn test_no_named_entity() {
        let console = MockConsole::new().respond(
            "/execute at Bob",
            "Found no elements matching CustomName",
        );
        let parser = ResponseParser::new();
        let resolver = GreeterResolver::new(&console, &parser);

        assert_eq!(resolver.resolve("Bob").await, None);
    }

    #[tokio::test]
    async fn test_console_failure_means_no_greeter() {
        let console = MockConsole::new().fail("/execute");
        let parser = ResponseParser::new();
        let resolver = GreeterResolver::new(&console, &parser);

        assert_eq!(resolver.resolve("Bob").await, None);
    }
}
