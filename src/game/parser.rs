//! Parsing of console command output.
//!
//! Both formats are defined by the Minecraft server, not by us:
//! - `/list`: `There are 2 of a max of 20 players online: Alice, Bob`
//! - `data get entity @s CustomName`: `Steve has the following entity data: ...`

use fancy_regex::Regex;
use tracing::warn;

use crate::common::error::ParseError;
use crate::common::PlayerSnapshot;

/// Separates the `/list` preamble from the names.
const LIST_SEPARATOR: &str = ": ";
/// Separates individual names.
const NAME_SEPARATOR: &str = ", ";

/// Parser for console responses.
#[derive(Debug, Clone)]
pub struct ResponseParser {
    greeter_pattern: Regex,
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseParser {
    pub fn new() -> Self {
        Self {
            greeter_pattern: Regex::new(r"(.*?) has the following").unwrap(),
        }
    }

    /// Parse a `/list` response into the set of online players.
    ///
    /// Only the first `": "` separates the preamble, so names are never
    /// cut by later colons. A missing separator is an error.
    pub fn player_list(&self, response: &str) -> Result<PlayerSnapshot, ParseError> {
        let (_, names) = response
            .split_once(LIST_SEPARATOR)
            .ok_or_else(|| ParseError::MissingSeparator {
                response: response.to_string(),
            })?;

        let names = names.trim_end();
        if names.is_empty() {
            return Ok(PlayerSnapshot::empty());
        }

        Ok(PlayerSnapshot::from_names(
            names.split(NAME_SEPARATOR).filter(|name| !name.is_empty()),
        ))
    }

    /// Extract the custom name from a nearest-named-entity query.
    ///
    /// Returns `None` when no entity reported a name.
    pub fn greeter_name(&self, response: &str) -> Option<String> {
        let captures = match self.greeter_pattern.captures(response) {
            Ok(captures) => captures?,
            Err(e) => {
                warn!("Greeter pattern failed on response {:?}: {}", response, e);
                return None;
            }
        };

        captures
            .get(1)
            .map(|name| name.as_str().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }
}
