//! Snapshot differencing.

use std::collections::HashSet;

use crate::common::{PlayerSnapshot, PresenceDiff};

/// Names in `a` that are not in `b`, in `a`'s order.
pub fn difference(a: &[String], b: &[String]) -> Vec<String> {
    let index: HashSet<&str> = b.iter().map(String::as_str).collect();
    a.iter()
        .filter(|name| !index.contains(name.as_str()))
        .cloned()
        .collect()
}

/// Who joined and who left between `previous` and `current`.
///
/// The output is not sorted: it follows the order the server reported.
pub fn diff(current: &PlayerSnapshot, previous: &PlayerSnapshot) -> PresenceDiff {
    PresenceDiff {
        joined: difference(current.names(), previous.names()),
        left: difference(previous.names(), current.names()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(names: &[&str]) -> PlayerSnapshot {
        PlayerSnapshot::from_names(names.iter().copied())
    }

    fn sorted(mut names: Vec<String>) -> Vec<String> {
        names.sort();
        names
    }

    fn cases() -> Vec<(PlayerSnapshot, PlayerSnapshot)> {
        vec![
            (snapshot(&[]), snapshot(&[])),
            (snapshot(&["Alice"]), snapshot(&[])),
            (snapshot(&[]), snapshot(&["Alice"])),
            (snapshot(&["Alice", "Bob"]), snapshot(&["Bob", "Alice"])),
            (snapshot(&["Alice", "Bob", "Carol"]), snapshot(&["Bob", "Dave"])),
            (snapshot(&["Eve"]), snapshot(&["Mallory", "Trent"])),
        ]
    }

    #[test]
    fn test_joined_only() {
        let changes = diff(&snapshot(&["Alice", "Bob"]), &snapshot(&["Alice"]));
        assert_eq!(changes.joined, vec!["Bob"]);
        assert!(changes.left.is_empty());
    }

    #[test]
    fn test_left_only() {
        let changes = diff(&snapshot(&["Alice"]), &snapshot(&["Alice", "Bob"]));
        assert!(changes.joined.is_empty());
        assert_eq!(changes.left, vec!["Bob"]);
    }

    #[test]
    fn test_joined_and_left() {
        let changes = diff(
            &snapshot(&["Alice", "Bob", "Carol"]),
            &snapshot(&["Bob", "Dave"]),
        );
        assert_eq!(sorted(changes.joined), vec!["Alice", "Carol"]);
        assert_eq!(changes.left, vec!["Dave"]);
    }

    #[test]
    fn test_order_follows_first_argument() {
        let result = difference(
            &["Zed".to_string(), "Amy".to_string(), "Kim".to_string()],
            &["Kim".to_string()],
        );
        assert_eq!(result, vec!["Zed", "Amy"]);
    }

    #[test]
    fn test_set_difference_property() {
        for (a, b) in cases() {
            let changes = diff(&a, &b);
            for name in &changes.joined {
                assert!(a.contains(name) && !b.contains(name));
            }
            for name in &changes.left {
                assert!(b.contains(name) && !a.contains(name));
            }
            let expected_joined = a.names().iter().filter(|n| !b.contains(n)).count();
            let expected_left = b.names().iter().filter(|n| !a.contains(n)).count();
            assert_eq!(changes.joined.len(), expected_joined);
            assert_eq!(changes.left.len(), expected_left);
        }
    }

    #[test]
    fn test_empty_iff_equal_sets() {
        for (a, b) in cases() {
            assert_eq!(diff(&a, &b).is_empty(), a.same_players(&b));
        }
    }

    #[test]
    fn test_swapping_arguments_swaps_results() {
        for (a, b) in cases() {
            let forward = diff(&a, &b);
            let backward = diff(&b, &a);
            assert_eq!(sorted(forward.joined), sorted(backward.left));
            assert_eq!(sorted(forward.left), sorted(backward.joined));
        }
    }
}
