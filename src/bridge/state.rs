//! Poll loop state carried from one iteration to the next.

use crate::bridge::diff::diff;
use crate::common::{PlayerSnapshot, PresenceDiff};

/// What the previous poll saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    last_snapshot: PlayerSnapshot,
    first_run: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// State before the first poll. There is no baseline yet.
    pub fn new() -> Self {
        Self {
            last_snapshot: PlayerSnapshot::empty(),
            first_run: true,
        }
    }

    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    pub fn last_snapshot(&self) -> &PlayerSnapshot {
        &self.last_snapshot
    }

    /// Record `snapshot` as the new baseline.
    ///
    /// Returns the next state and the changes to announce. The first
    /// snapshot only establishes the baseline, so it yields no changes.
    pub fn advance(self, snapshot: PlayerSnapshot) -> (SessionState, Option<PresenceDiff>) {
        let changes = if self.first_run {
            None
        } else {
            Some(diff(&snapshot, &self.last_snapshot))
        };

        let next = SessionState {
            last_snapshot: snapshot,
            first_run: false,
        };

        (next, changes)
    }
}
