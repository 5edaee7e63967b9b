//! Leave watcher.
//!
//! Logs when the bot is removed from a group.

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::debug;

use crate::bot::dispatcher::{AppState, ThrottledBot};
use crate::chatlog::LeaveEvent;

/// Returns the handler for "left chat member" messages.
pub fn handler() -> UpdateHandler<anyhow::Error> {
    dptree::filter_map(LeaveEvent::from_message).endpoint(leave_watcher)
}

/// Handle a member leaving a chat.
async fn leave_watcher(
    bot: ThrottledBot,
    event: LeaveEvent,
    state: AppState,
) -> anyhow::Result<()> {
    debug!("Member {} left chat {}", event.left_member, event.chat.id);

    state.logger.on_leave(&bot, event).await?;

    Ok(())
}
