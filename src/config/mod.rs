//! Configuration module for the chatlog bot.
//!
//! Loads configuration from environment variables.

use serde::Deserialize;
use std::env;
use thiserror::Error;
use tracing::warn;
use url::Url;

/// Default port for the webhook listener.
const DEFAULT_WEBHOOK_PORT: u16 = 8443;

/// Bot running mode
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BotMode {
    #[default]
    Polling,
    Webhook,
}

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} is not a valid integer: {value:?}")]
    InvalidInteger { name: &'static str, value: String },

    #[error("{name} is not a valid URL: {value:?}")]
    InvalidUrl { name: &'static str, value: String },

    #[error("PHOTOS must contain at least one photo")]
    NoPhotos,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    // Telegram
    pub bot_token: String,
    pub bot_mode: BotMode,
    pub webhook_url: Option<Url>,
    pub webhook_port: u16,
    pub webhook_secret: Option<String>,

    /// Bot username (without @) for the "add me" deep link.
    /// Optional - will be fetched via getMe if not set.
    pub bot_username: Option<String>,

    /// Display name used in removal captions.
    /// Optional - defaults to the bot's first name.
    pub bot_name: Option<String>,

    /// Channel that receives join/leave log posts.
    pub logger_id: i64,

    /// Photo URLs or file ids, one is picked per log post.
    pub photos: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Expects `.env` to be loaded already.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Treat blank values as unset
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = get("BOT_TOKEN").ok_or(ConfigError::Missing("BOT_TOKEN"))?;

        let bot_mode = match get("BOT_MODE").map(|m| m.to_lowercase()).as_deref() {
            Some("webhook") => BotMode::Webhook,
            Some("polling") | None => BotMode::Polling,
            Some(other) => {
                warn!("Unknown BOT_MODE {:?}, falling back to polling", other);
                BotMode::Polling
            }
        };

        let webhook_url = get("WEBHOOK_URL")
            .map(|raw| {
                Url::parse(&raw).map_err(|_| ConfigError::InvalidUrl {
                    name: "WEBHOOK_URL",
                    value: raw,
                })
            })
            .transpose()?;

        // Validate webhook URL is set if mode is webhook
        if bot_mode == BotMode::Webhook && webhook_url.is_none() {
            return Err(ConfigError::Missing("WEBHOOK_URL"));
        }

        let webhook_port = match get("WEBHOOK_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidInteger {
                name: "WEBHOOK_PORT",
                value: raw,
            })?,
            None => DEFAULT_WEBHOOK_PORT,
        };

        let logger_id = get("LOGGER_ID").ok_or(ConfigError::Missing("LOGGER_ID"))?;
        let logger_id = logger_id
            .parse::<i64>()
            .map_err(|_| ConfigError::InvalidInteger {
                name: "LOGGER_ID",
                value: logger_id,
            })?;

        let photos: Vec<String> = get("PHOTOS")
            .ok_or(ConfigError::Missing("PHOTOS"))?
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        if photos.is_empty() {
            return Err(ConfigError::NoPhotos);
        }

        // Parse bot username (strip @ if present)
        let bot_username = get("BOT_USERNAME")
            .map(|s| s.trim_start_matches('@').to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            bot_token,
            bot_mode,
            webhook_url,
            webhook_port,
            webhook_secret: get("WEBHOOK_SECRET"),
            bot_username,
            bot_name: get("BOT_NAME"),
            logger_id,
            photos,
        })
    }
}
