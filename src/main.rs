//! Chatlog - Telegram group join/leave logger
//!
//! Posts a photo notification to a logging channel whenever the bot is
//! added to or removed from a group.
//!
//! ## Architecture
//!
//! - `config` - Environment configuration
//! - `bot` - Dispatcher and runtime (with Throttle for API rate limiting)
//! - `events` - Membership event handlers
//! - `chatlog` - Caption building and posting logic
//! - `utils` - Utility functions

mod bot;
mod chatlog;
mod config;
mod events;
mod utils;

use teloxide::adaptors::throttle::Limits;
use teloxide::prelude::*;
use teloxide::types::ChatId;
use tracing::info;
use tracing_subscriber::EnvFilter;

use bot::ThrottledBot;
use chatlog::{BotIdentity, ChatLogger, PhotoPool};
use config::Config;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // If RUST_LOG is not set, default to "info" level for our crate
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("chatlog=info,teloxide=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .init();

    info!("Starting chatlog bot...");

    let config = Config::from_env()?;
    info!("Configuration loaded successfully");
    info!("Bot mode: {:?}", config.bot_mode);
    info!("Logging channel: {}", config.logger_id);
    info!("Photo pool size: {}", config.photos.len());

    // Throttle respects Telegram's rate limits:
    // - 30 messages per second globally
    // - 1 message per second to the same chat
    // - 20 messages per minute to the same group
    let bot: ThrottledBot = Bot::new(&config.bot_token).throttle(Limits::default());
    info!("Bot initialized with rate limiting (Throttle)");

    let me = bot.get_me().await?;
    info!("Bot username: @{}", me.username());

    let identity = BotIdentity {
        id: me.id,
        username: config
            .bot_username
            .clone()
            .unwrap_or_else(|| me.username().to_string()),
        display_name: config
            .bot_name
            .clone()
            .unwrap_or_else(|| me.first_name.clone()),
    };
    info!("Using bot username: @{}", identity.username);

    let photos = PhotoPool::new(config.photos.clone())?;
    let logger = ChatLogger::new(ChatId(config.logger_id), photos, identity);

    let dispatcher = bot::build_dispatcher(bot.clone(), logger);

    bot::run(&config, dispatcher, bot).await
}
