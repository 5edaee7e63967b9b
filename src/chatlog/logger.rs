//! Chat logger: decides whether an event concerns the bot and posts it.

use teloxide::types::ChatId;
use tracing::{debug, info};
use url::Url;

use super::caption::{JoinDetails, LeaveDetails, join_caption, leave_caption};
use super::model::{BotIdentity, JoinEvent, LeaveEvent, LinkButton, LogPost};
use super::photos::PhotoPool;
use super::platform::ChatPlatform;

const JOIN_BUTTON_TEXT: &str = "See the group";
const LEAVE_BUTTON_TEXT: &str = "Add me to a group";

/// Posts join/leave notifications for the bot itself to a logging channel.
#[derive(Debug, Clone)]
pub struct ChatLogger {
    logger_id: ChatId,
    photos: PhotoPool,
    me: BotIdentity,
}

impl ChatLogger {
    pub fn new(logger_id: ChatId, photos: PhotoPool, me: BotIdentity) -> Self {
        Self {
            logger_id,
            photos,
            me,
        }
    }

    /// Handle a "new chat members" event.
    ///
    /// Returns `true` if a log post was sent. Nothing is requested from the
    /// platform unless the bot is among the new members.
    pub async fn on_join<P>(&self, platform: &P, event: JoinEvent) -> anyhow::Result<bool>
    where
        P: ChatPlatform + ?Sized,
    {
        if !event.new_members.contains(&self.me.id) {
            debug!("Join in chat {} does not involve the bot", event.chat.id);
            return Ok(false);
        }

        let chat = &event.chat;
        let invite_link = platform.export_invite_link(chat.id).await?;
        let member_count = platform.member_count(chat.id).await?;

        let caption = join_caption(&JoinDetails {
            title: chat.title.as_deref(),
            chat_id: chat.id,
            username: chat.username.as_deref(),
            invite_link: &invite_link,
            member_count,
            added_by: event.added_by.as_ref().map(|a| a.mention()),
        });

        let post = LogPost {
            chat_id: self.logger_id,
            photo: self.photos.pick().to_string(),
            caption,
            button: LinkButton {
                text: JOIN_BUTTON_TEXT.to_string(),
                url: Url::parse(&invite_link)?,
            },
        };

        platform.send_log_photo(post).await?;

        info!(
            "Logged bot added to chat {} ({} members)",
            chat.id, member_count
        );

        Ok(true)
    }

    /// Handle a "left chat member" event.
    ///
    /// Returns `true` if a log post was sent.
    pub async fn on_leave<P>(&self, platform: &P, event: LeaveEvent) -> anyhow::Result<bool>
    where
        P: ChatPlatform + ?Sized,
    {
        if event.left_member != self.me.id {
            debug!("Leave in chat {} does not involve the bot", event.chat.id);
            return Ok(false);
        }

        let chat = &event.chat;
        let caption = leave_caption(&LeaveDetails {
            title: chat.title.as_deref(),
            chat_id: chat.id,
            username: chat.username.as_deref(),
            removed_by: event.removed_by.as_ref().map(|a| a.mention()),
            bot_name: &self.me.display_name,
        });

        let post = LogPost {
            chat_id: self.logger_id,
            photo: self.photos.pick().to_string(),
            caption,
            button: LinkButton {
                text: LEAVE_BUTTON_TEXT.to_string(),
                url: self.me.add_to_group_url()?,
            },
        };

        platform.send_log_photo(post).await?;

        info!("Logged bot removed from chat {}", chat.id);

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use teloxide::types::UserId;

    use super::*;
    use crate::chatlog::caption::{PRIVATE_CHAT, UNKNOWN_USER};
    use crate::chatlog::model::{Actor, ChatInfo};
    use crate::chatlog::platform::testing::{Call, RecordingPlatform};

    const BOT_ID: UserId = UserId(777);
    const LOGGER_ID: ChatId = ChatId(-1009999);
    const PHOTOS: [&str; 2] = ["https://example.org/a.jpg", "https://example.org/b.jpg"];

    fn logger() -> ChatLogger {
        ChatLogger::new(
            LOGGER_ID,
            PhotoPool::new(PHOTOS.iter().map(|p| p.to_string()).collect()).unwrap(),
            BotIdentity {
                id: BOT_ID,
                username: "chatlog_bot".to_string(),
                display_name: "Chatlog".to_string(),
            },
        )
    }

    fn chat() -> ChatInfo {
        ChatInfo {
            id: ChatId(-100123),
            title: Some("Ferris Fans".to_string()),
            username: None,
        }
    }

    fn someone() -> Actor {
        Actor {
            id: UserId(5),
            name: "Alice".to_string(),
        }
    }

    fn join(new_members: Vec<UserId>) -> JoinEvent {
        JoinEvent {
            chat: chat(),
            new_members,
            added_by: Some(someone()),
        }
    }

    fn leave(left_member: UserId, removed_by: Option<Actor>) -> LeaveEvent {
        LeaveEvent {
            chat: chat(),
            left_member,
            removed_by,
        }
    }

    #[tokio::test]
    async fn test_join_of_bot_posts_once() {
        let platform = RecordingPlatform::new("https://t.me/+invite", 42);

        let sent = logger()
            .on_join(&platform, join(vec![UserId(1), BOT_ID, BOT_ID]))
            .await
            .unwrap();
        assert!(sent);

        let posts = platform.posts();
        assert_eq!(posts.len(), 1);

        let post = &posts[0];
        assert_eq!(post.chat_id, LOGGER_ID);
        assert!(post.caption.contains("Ferris Fans"));
        assert!(post.caption.contains("-100123"));
        assert!(post.caption.contains("42"));
        assert!(post.caption.contains(PRIVATE_CHAT));
        assert!(post.caption.contains("tg://user?id=5"));
        assert!(PHOTOS.contains(&post.photo.as_str()));
        assert_eq!(post.button.url.as_str(), "https://t.me/+invite");
        assert_eq!(post.keyboard().inline_keyboard.concat().len(), 1);
    }

    #[tokio::test]
    async fn test_join_of_other_member_is_silent() {
        let platform = RecordingPlatform::new("https://t.me/+invite", 42);

        let sent = logger()
            .on_join(&platform, join(vec![UserId(1), UserId(2)]))
            .await
            .unwrap();

        assert!(!sent);
        assert!(platform.calls().is_empty());
    }

    #[tokio::test]
    async fn test_join_lookup_failure_propagates() {
        let platform = RecordingPlatform {
            fail_invite_link: true,
            ..RecordingPlatform::new("https://t.me/+invite", 42)
        };

        let result = logger().on_join(&platform, join(vec![BOT_ID])).await;

        assert!(result.is_err());
        assert_eq!(platform.calls(), vec![Call::ExportInviteLink(ChatId(-100123))]);
    }

    #[tokio::test]
    async fn test_join_member_count_failure_propagates() {
        let platform = RecordingPlatform {
            fail_member_count: true,
            ..RecordingPlatform::new("https://t.me/+invite", 42)
        };

        let result = logger().on_join(&platform, join(vec![BOT_ID])).await;

        assert!(result.is_err());
        assert_eq!(
            platform.calls(),
            vec![
                Call::ExportInviteLink(ChatId(-100123)),
                Call::MemberCount(ChatId(-100123)),
            ]
        );
        assert!(platform.posts().is_empty());
    }

    #[tokio::test]
    async fn test_join_send_failure_propagates() {
        let platform = RecordingPlatform {
            fail_send: true,
            ..RecordingPlatform::new("https://t.me/+invite", 42)
        };

        let result = logger().on_join(&platform, join(vec![BOT_ID])).await;

        assert!(result.is_err());
        let calls = platform.calls();
        assert_eq!(calls.len(), 3);
        assert!(matches!(calls[2], Call::SendLogPhoto(_)));
    }

    #[tokio::test]
    async fn test_leave_send_failure_propagates() {
        let platform = RecordingPlatform {
            fail_send: true,
            ..RecordingPlatform::default()
        };

        let result = logger().on_leave(&platform, leave(BOT_ID, None)).await;

        assert!(result.is_err());
        let calls = platform.calls();
        assert_eq!(calls.len(), 1);
        assert!(matches!(calls[0], Call::SendLogPhoto(_)));
    }

    #[tokio::test]
    async fn test_leave_of_bot_without_actor() {
        let platform = RecordingPlatform::default();

        let sent = logger()
            .on_leave(&platform, leave(BOT_ID, None))
            .await
            .unwrap();
        assert!(sent);

        let posts = platform.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(platform.calls().len(), 1);

        let post = &posts[0];
        assert_eq!(post.chat_id, LOGGER_ID);
        assert!(post.caption.contains(UNKNOWN_USER));
        assert!(post.caption.contains("Chatlog"));
        assert!(PHOTOS.contains(&post.photo.as_str()));
        assert_eq!(
            post.button.url.as_str(),
            "https://t.me/chatlog_bot?startgroup=true"
        );
        assert_eq!(post.keyboard().inline_keyboard.concat().len(), 1);
    }

    #[tokio::test]
    async fn test_leave_of_bot_with_actor() {
        let platform = RecordingPlatform::default();

        logger()
            .on_leave(&platform, leave(BOT_ID, Some(someone())))
            .await
            .unwrap();

        let posts = platform.posts();
        assert!(posts[0].caption.contains("tg://user?id=5"));
        assert!(!posts[0].caption.contains(UNKNOWN_USER));
    }

    #[tokio::test]
    async fn test_leave_of_other_member_is_silent() {
        let platform = RecordingPlatform::default();

        let sent = logger()
            .on_leave(&platform, leave(UserId(1), None))
            .await
            .unwrap();

        assert!(!sent);
        assert!(platform.calls().is_empty());
    }
}
