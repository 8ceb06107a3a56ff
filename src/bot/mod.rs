//! Discord bot integration.
//!
//! The bot keeps a single FAQ menu message current in the designated channel,
//! removes every other post there, and answers dropdown selections and the `/faq`
//! command privately.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Resolve the FAQ channel and receive interaction context
//! - `GUILD_MESSAGES` - Receive message events for the channel guard
//!
//! `MESSAGE_CONTENT` is not needed: the recovery scan only reads the bot's own
//! messages, whose content Discord always delivers.

pub mod channel;
pub mod command;
pub mod handler;
pub mod start;
