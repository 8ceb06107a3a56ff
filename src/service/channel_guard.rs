//! Keeps the FAQ channel clean.
//!
//! Every message posted in the FAQ channel by anyone other than this bot is
//! deleted. Messages in other channels are left alone. Each event is handled on its
//! own with no memory of earlier ones.

use serenity::all::UserId;

use crate::{error::AppError, model::message::ChannelMessage, service::channel::FaqChannel};

/// What the guard did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardAction {
    /// Message is outside the FAQ channel.
    Ignored,
    /// Message is this bot's own post in the FAQ channel.
    Kept,
    /// Message was removed from the FAQ channel.
    Deleted,
}

pub struct ChannelGuardService<'a, C: FaqChannel> {
    channel: &'a C,
}

impl<'a, C: FaqChannel> ChannelGuardService<'a, C> {
    pub fn new(channel: &'a C) -> Self {
        Self { channel }
    }

    /// Deletes `message` if it is a stray post in the FAQ channel.
    ///
    /// A permission denial on delete is swallowed and reported as `Kept`.
    ///
    /// # Arguments
    /// - `message` - Newly created message from any channel
    /// - `bot_id` - User id of this bot
    ///
    /// # Returns
    /// - `Ok(GuardAction)` - What happened to the message
    /// - `Err(AppError)` - Delete failed for a reason other than missing permission
    pub async fn guard(
        &self,
        message: &ChannelMessage,
        bot_id: UserId,
    ) -> Result<GuardAction, AppError> {
        if message.channel_id != self.channel.id() {
            return Ok(GuardAction::Ignored);
        }

        if message.author_id == bot_id {
            return Ok(GuardAction::Kept);
        }

        match self.channel.delete_message(message.id).await {
            Ok(()) => Ok(GuardAction::Deleted),
            Err(e) if e.is_forbidden() => {
                tracing::debug!(
                    "Missing permission to delete message {} in FAQ channel {}",
                    message.id,
                    message.channel_id
                );
                Ok(GuardAction::Kept)
            }
            Err(e) => Err(e),
        }
    }
}
