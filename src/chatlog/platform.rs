//! Outbound Telegram calls used by the chat logger.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{ChatId, ParseMode};

use super::model::LogPost;
use super::photos::input_file;
use crate::bot::dispatcher::ThrottledBot;

/// The subset of the Bot API the chat logger needs.
///
/// Implemented for the real bot and for in-memory fakes in tests.
#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Export the primary invite link of a chat.
    async fn export_invite_link(&self, chat_id: ChatId) -> anyhow::Result<String>;

    /// Current number of members in a chat.
    async fn member_count(&self, chat_id: ChatId) -> anyhow::Result<u32>;

    /// Send a log post as a captioned photo with its inline button.
    async fn send_log_photo(&self, post: LogPost) -> anyhow::Result<()>;
}

#[async_trait]
impl ChatPlatform for ThrottledBot {
    async fn export_invite_link(&self, chat_id: ChatId) -> anyhow::Result<String> {
        Ok(self.export_chat_invite_link(chat_id).await?)
    }

    async fn member_count(&self, chat_id: ChatId) -> anyhow::Result<u32> {
        Ok(self.get_chat_member_count(chat_id).await?)
    }

    async fn send_log_photo(&self, post: LogPost) -> anyhow::Result<()> {
        let keyboard = post.keyboard();

        self.send_photo(post.chat_id, input_file(&post.photo))
            .caption(post.caption)
            .parse_mode(ParseMode::Html)
            .reply_markup(keyboard)
            .await?;

        Ok(())
    }
}
