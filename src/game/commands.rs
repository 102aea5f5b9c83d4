//! Console command strings.
//!
//! The exact wording is dictated by the Minecraft server.

use serde_json::json;

/// Lists online players.
pub const LIST_PLAYERS: &str = "/list";

/// From `player`'s position, report the custom name of every entity,
/// nearest first.
pub fn find_greeter(player: &str) -> String {
    format!(
        "/execute at {player} run execute as @e[sort=nearest] at {player} run data get entity @s CustomName"
    )
}

/// Make the first entity whose custom name is `greeter` say `text`.
pub fn say_as(greeter: &str, text: &str) -> String {
    let custom_name = json!({ "text": greeter }).to_string();
    format!(
        "/execute as @e[nbt={{CustomName: '{}'}},limit=1] run say {}",
        escape_single_quoted(&custom_name),
        text
    )
}

/// Broadcast `text` to the whole server chat.
pub fn broadcast(text: &str) -> String {
    format!("/say {}", text)
}

/// Escape a value for an SNBT single-quoted string.
fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_greeter() {
        assert_eq!(
            find_greeter("Bob"),
            "/execute at Bob run execute as @e[sort=nearest] at Bob run data get entity @s CustomName"
        );
    }

    #[test]
    fn test_say_as() {
        assert_eq!(
            say_as("Steve", "Welcome, Bob!"),
            r#"/execute as @e[nbt={CustomName: '{"text":"Steve"}'},limit=1] run say Welcome, Bob!"#
        );
    }

    #[test]
    fn test_say_as_escapes_quotes() {
        assert_eq!(
            say_as("Bob's \"Pal\"", "hi"),
            r#"/execute as @e[nbt={CustomName: '{"text":"Bob\'s \\"Pal\\""}'},limit=1] run say hi"#
        );
    }

    #[test]
    fn test_broadcast() {
        assert_eq!(broadcast("Welcome, Bob!"), "/say Welcome, Bob!");
    }
}
