//! Join watcher.
//!
//! Logs when the bot is added to a new group.

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::debug;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::chatlog::JoinEvent;

/// Returns the handler for "new chat members" messages.
pub fn handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter_map(JoinEvent::from_message).endpoint(join_watcher)
}

/// Handle new members in a chat.
async fn join_watcher(
    bot: ThrottledBot,
    event: JoinEvent,
    state: AppState,
) -> anyhow::Result<()> {
    debug!(
        "{} new member(s) in chat {}",
        event.new_members.len(),
        event.chat.id
    );

    state.logger.on_join(&bot, event).await?;

    Ok(())
}
