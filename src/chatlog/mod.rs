//! Chat log core.
//!
//! Framework-independent logic for posting "bot added" / "bot removed"
//! notifications to a logging channel.
//!
//! ## Layout
//!
//! - `model` - Event and post types
//! - `photos` - Photo pool
//! - `caption` - HTML caption rendering
//! - `platform` - Outbound Bot API seam
//! - `logger` - The `ChatLogger` that ties them together

pub mod caption;
pub mod logger;
pub mod model;
pub mod photos;
pub mod platform;

pub use logger::ChatLogger;
pub use model::{BotIdentity, JoinEvent, LeaveEvent};
pub use photos::PhotoPool;
