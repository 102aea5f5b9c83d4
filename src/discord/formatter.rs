//! Discord message rendering.

/// Escape Discord markdown special characters.
pub fn escape_markdown(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('`', "\\`")
        .replace('*', "\\*")
        .replace('_', "\\_")
        .replace('~', "\\~")
        .replace('|', "\\|")
}

/// Announcement for a player who came online.
pub fn joined_message(player: &str) -> String {
    format!("**{}** joined the server", escape_markdown(player))
}

/// Announcement for a player who went offline.
pub fn left_message(player: &str) -> String {
    format!("**{}** left the server", escape_markdown(player))
}
