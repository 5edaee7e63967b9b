//! Utility functions.
//!
//! HTML helpers shared by caption rendering.

use teloxide::types::UserId;

/// Escape text for Telegram's HTML parse mode.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Build an HTML mention link for a user.
pub fn mention_html(user_id: UserId, name: &str) -> String {
    format!(
        "<a href=\"tg://user?id={}\">{}</a>",
        user_id,
        html_escape(name)
    )
}

/// Format a chat username for display, with a fallback for chats without one.
pub fn format_username(username: Option<&str>, fallback: &str) -> String {
    match username {
        Some(u) => format!("@{}", html_escape(u)),
        None => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<b>Tom & Jerry</b>"), "&lt;b&gt;Tom &amp; Jerry&lt;/b&gt;");
        assert_eq!(html_escape("plain"), "plain");
    }

    #[test]
    fn test_mention_escapes_name() {
        let mention = mention_html(UserId(42), "A<B>");
        assert_eq!(mention, "<a href=\"tg://user?id=42\">A&lt;B&gt;</a>");
    }

    #[test]
    fn test_format_username() {
        assert_eq!(format_username(Some("rustaceans"), "none"), "@rustaceans");
        assert_eq!(format_username(None, "Private Chat"), "Private Chat");
    }
}
