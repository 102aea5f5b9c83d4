//! Presence bridge between the game console and Discord.
//!
//! ## Module Structure
//!
//! - `diff`: Snapshot differencing
//! - `state`: State carried between poll iterations (`SessionState`)
//! - `dispatcher`: Join/leave notification delivery
//! - `poll`: The poll loop (`PollLoop`)

pub mod diff;
pub mod dispatcher;
pub mod poll;
pub mod state;

// Re-export main types for convenience
pub use dispatcher::NotificationDispatcher;
pub use poll::PollLoop;
pub use state::SessionState;
