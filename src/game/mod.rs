//! Game server side: console commands and their responses.
//!
//! This module contains:
//! - Console command execution over RCON
//! - Command strings and response parsing
//! - Greeting templates and greeter resolution

pub mod commands;
pub mod executor;
pub mod greeter;
pub mod greetings;
pub mod parser;

// Re-export commonly used types
pub use executor::{CommandExecutor, RconExecutor};
pub use greeter::GreeterResolver;
pub use greetings::GreetingCatalog;
pub use parser::ResponseParser;
