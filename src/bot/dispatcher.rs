//! Message dispatcher setup.
//!
//! Builds the dispatcher with the membership event handlers.

use std::sync::Arc;

use teloxide::adaptors::Throttle;
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use tracing::debug;

use crate::chatlog::ChatLogger;
use crate::events;

/// Bot type with Throttle adaptor for automatic rate limiting.
pub type ThrottledBot = Throttle<Bot>;

/// Dispatcher type shared by the polling and webhook runners.
pub type ChatlogDispatcher =
    Dispatcher<ThrottledBot, anyhow::Error, teloxide::dispatching::DefaultKey>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Posts join/leave notifications to the logging channel.
    pub logger: Arc<ChatLogger>,
}

impl AppState {
    pub fn new(logger: ChatLogger) -> Self {
        Self {
            logger: Arc::new(logger),
        }
    }
}

/// Build the dispatcher with all handlers.
pub fn build_dispatcher(bot: ThrottledBot, logger: ChatLogger) -> ChatlogDispatcher {
    let state = AppState::new(logger);

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![state])
        // Most updates are not membership changes; keep them out of the warn log
        .default_handler(|upd| async move {
            debug!("Ignoring update {}", upd.id.0);
        })
        .enable_ctrlc_handler()
        .build()
}

/// Build the handler schema.
fn schema() -> UpdateHandler<anyhow::Error> {
    use teloxide::dispatching::UpdateFilterExt;

    // Membership changes arrive as service messages
    Update::filter_message().branch(events::event_handler())
}
