//! Caption rendering for log posts.
//!
//! Captions are HTML; every user-controlled value is escaped here.

use teloxide::types::ChatId;

use crate::utils::{format_username, html_escape};

/// Shown when no user can be attributed to an event.
pub const UNKNOWN_USER: &str = "Unknown User";

/// Shown when the chat has no public username.
pub const PRIVATE_CHAT: &str = "Private Chat";

/// Shown when the chat has no title.
pub const UNKNOWN_GROUP: &str = "Unknown Group";

/// Values rendered into the "bot added" caption.
#[derive(Debug, Clone)]
pub struct JoinDetails<'a> {
    pub title: Option<&'a str>,
    pub chat_id: ChatId,
    pub username: Option<&'a str>,
    pub invite_link: &'a str,
    pub member_count: u32,
    /// Pre-rendered HTML mention of the inviter.
    pub added_by: Option<String>,
}

/// Values rendered into the "bot removed" caption.
#[derive(Debug, Clone)]
pub struct LeaveDetails<'a> {
    pub title: Option<&'a str>,
    pub chat_id: ChatId,
    pub username: Option<&'a str>,
    /// Pre-rendered HTML mention of whoever removed the bot.
    pub removed_by: Option<String>,
    pub bot_name: &'a str,
}

pub fn join_caption(details: &JoinDetails<'_>) -> String {
    format!(
        "❖ <b>Bot added to a #new_group</b> ❖\n\n\
         ● <b>Group name:</b> {}\n\
         ● <b>Group ID:</b> <code>{}</code>\n\
         ● <b>Group username:</b> {}\n\
         ● <b>Group link:</b> {}\n\
         ● <b>Group members:</b> {}\n\n\
         ❖ <b>Added by:</b> {}",
        html_escape(details.title.unwrap_or(UNKNOWN_GROUP)),
        details.chat_id,
        format_username(details.username, PRIVATE_CHAT),
        html_escape(details.invite_link),
        details.member_count,
        details.added_by.as_deref().unwrap_or(UNKNOWN_USER),
    )
}

pub fn leave_caption(details: &LeaveDetails<'_>) -> String {
    format!(
        "❖ <b>Bot #left_group</b> ❖\n\n\
         ● <b>Group name:</b> {}\n\n\
         ● <b>Group ID:</b> <code>{}</code>\n\n\
         ● <b>Group username:</b> {}\n\n\
         ● <b>Removed by:</b> {}\n\n\
         ❖ <b>Bot name:</b> {}",
        html_escape(details.title.unwrap_or(UNKNOWN_GROUP)),
        details.chat_id,
        format_username(details.username, PRIVATE_CHAT),
        details.removed_by.as_deref().unwrap_or(UNKNOWN_USER),
        html_escape(details.bot_name),
    )
}
