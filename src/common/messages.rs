//! Canonical data types passed between the poll loop and its collaborators.

use std::collections::HashSet;
use std::fmt;

/// Set of player names reported online by one `/list` poll.
///
/// Names keep the order the server reported them in, but only membership
/// is meaningful. Duplicates collapse to their first occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerSnapshot {
    names: Vec<String>,
}

impl PlayerSnapshot {
    /// Create an empty snapshot.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from names, dropping repeated entries.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Membership equality, ignoring order.
    pub fn same_players(&self, other: &PlayerSnapshot) -> bool {
        self.len() == other.len() && self.names.iter().all(|n| other.contains(n))
    }
}

impl fmt::Display for PlayerSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.names.join(", "))
    }
}

/// Players who joined and left between two snapshots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PresenceDiff {
    pub joined: Vec<String>,
    pub left: Vec<String>,
}

impl PresenceDiff {
    pub fn is_empty(&self) -> bool {
        self.joined.is_empty() && self.left.is_empty()
    }
}

/// Where a notification is delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// In-game chat. With a speaker, the named entity says the text;
    /// without one, the server broadcasts it.
    GameChat { speaker: Option<String> },
    /// The external Discord channel.
    ExternalChat,
}

/// A rendered message bound for one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub destination: Destination,
    pub text: String,
}

impl Notification {
    pub fn game_chat(speaker: Option<String>, text: impl Into<String>) -> Self {
        Self {
            destination: Destination::GameChat { speaker },
            text: text.into(),
        }
    }

    pub fn external(text: impl Into<String>) -> Self {
        Self {
            destination: Destination::ExternalChat,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_dedups_keeping_first_order() {
        let snapshot = PlayerSnapshot::from_names(["Bob", "Alice", "Bob"]);
        assert_eq!(snapshot.names(), &["Bob".to_string(), "Alice".to_string()]);
    }

    #[test]
    fn test_same_players_ignores_order() {
        let a = PlayerSnapshot::from_names(["Alice", "Bob"]);
        let b = PlayerSnapshot::from_names(["Bob", "Alice"]);
        assert!(a.same_players(&b));
        assert!(!a.same_players(&PlayerSnapshot::from_names(["Alice"])));
    }

    #[test]
    fn test_display() {
        assert_eq!(PlayerSnapshot::empty().to_string(), "[]");
        assert_eq!(
            PlayerSnapshot::from_names(["Alice", "Bob"]).to_string(),
            "[Alice, Bob]"
        );
    }
}
