//! Event handler system.
//!
//! Add new event handlers by:
//! 1. Creating a new file in this directory
//! 2. Adding `pub mod your_event;` below
//! 3. Adding the handler to `event_handler()`

pub mod join;
pub mod leave;

use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;

/// Build the combined handler for membership service messages.
pub fn event_handler() -> UpdateHandler<anyhow::Error> {
    dptree::entry()
        .branch(join::handler())
        .branch(leave::handler())
}
