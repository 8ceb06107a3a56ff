//! Domain models for the FAQ bot.
//!
//! - `faq` - The fixed FAQ topics, their answers, and the banner text
//! - `menu` - Builders for the banner message and its topic dropdown
//! - `message` - Platform-neutral view of a channel message

pub mod faq;
pub mod menu;
pub mod message;
