//! Discord integration.
//!
//! This module posts join/leave announcements to a Discord channel.

pub mod client;
pub mod formatter;

// Re-export main types for external use
pub use client::{ChatNotifier, DiscordNotifier};
