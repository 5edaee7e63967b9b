//! Domain types for chat log events.

use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, Message, User, UserId};
use url::Url;

use crate::utils::mention_html;

/// Chat metadata carried by a join/leave event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatInfo {
    pub id: ChatId,
    pub title: Option<String>,
    pub username: Option<String>,
}

impl ChatInfo {
    pub fn from_message(msg: &Message) -> Self {
        Self {
            id: msg.chat.id,
            title: msg.chat.title().map(str::to_string),
            username: msg.chat.username().map(str::to_string),
        }
    }
}

/// The user who triggered an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub name: String,
}

impl Actor {
    /// HTML mention link for this user.
    pub fn mention(&self) -> String {
        mention_html(self.id, &self.name)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.full_name(),
        }
    }
}

/// Members were added to a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinEvent {
    pub chat: ChatInfo,
    pub new_members: Vec<UserId>,
    pub added_by: Option<Actor>,
}

impl JoinEvent {
    /// Extract a join event from a "new chat members" service message.
    pub fn from_message(msg: Message) -> Option<Self> {
        let members = msg.new_chat_members()?;

        Some(Self {
            chat: ChatInfo::from_message(&msg),
            new_members: members.iter().map(|u| u.id).collect(),
            added_by: msg.from.as_ref().map(Actor::from),
        })
    }
}

/// A member left (or was removed from) a chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveEvent {
    pub chat: ChatInfo,
    pub left_member: UserId,
    pub removed_by: Option<Actor>,
}

impl LeaveEvent {
    /// Extract a leave event from a "left chat member" service message.
    pub fn from_message(msg: Message) -> Option<Self> {
        let left = msg.left_chat_member()?;

        Some(Self {
            chat: ChatInfo::from_message(&msg),
            left_member: left.id,
            removed_by: msg.from.as_ref().map(Actor::from),
        })
    }
}

/// The bot's own identity, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotIdentity {
    pub id: UserId,
    /// Username without @.
    pub username: String,
    /// Name shown in removal captions.
    pub display_name: String,
}

impl BotIdentity {
    /// Deep link that opens the "add to group" picker for this bot.
    pub fn add_to_group_url(&self) -> anyhow::Result<Url> {
        let url = format!("https://t.me/{}?startgroup=true", self.username);
        Ok(Url::parse(&url)?)
    }
}

/// A single URL button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkButton {
    pub text: String,
    pub url: Url,
}

/// A photo post destined for the logging channel.
///
/// Holds exactly one button, so the rendered keyboard is always a single
/// row with a single URL button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogPost {
    pub chat_id: ChatId,
    pub photo: String,
    pub caption: String,
    pub button: LinkButton,
}

impl LogPost {
    pub fn keyboard(&self) -> InlineKeyboardMarkup {
        InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
            self.button.text.clone(),
            self.button.url.clone(),
        )]])
    }
}
