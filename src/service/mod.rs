//! Business logic for the FAQ channel.
//!
//! - `channel` - The operations the bot needs from the designated channel
//! - `faq_menu` - Reconciliation of the single FAQ menu message
//! - `channel_guard` - Removal of stray posts from the FAQ channel
//!
//! Services work against the `FaqChannel` trait rather than Serenity's HTTP client
//! directly, which keeps them testable with an in-memory channel.

pub mod channel;
pub mod channel_guard;
pub mod faq_menu;

#[cfg(test)]
mod test;
