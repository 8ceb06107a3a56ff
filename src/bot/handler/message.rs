use serenity::all::{Context, Message};

use crate::{
    model::message::ChannelMessage,
    service::{
        channel::FaqChannel,
        channel_guard::{ChannelGuardService, GuardAction},
    },
};

/// Handle message creation in a channel
///
/// Deletes anything posted in the FAQ channel by someone other than this bot.
/// Messages elsewhere pass through untouched.
pub async fn handle_message<C: FaqChannel>(channel: &C, ctx: Context, message: Message) {
    let bot_id = ctx.cache.current_user().id;

    match ChannelGuardService::new(channel)
        .guard(&ChannelMessage::from(&message), bot_id)
        .await
    {
        Ok(GuardAction::Deleted) => {
            tracing::debug!(
                "Deleted message {} by {} from FAQ channel",
                message.id,
                message.author.id
            );
        }
        Ok(GuardAction::Ignored | GuardAction::Kept) => {}
        Err(e) => {
            tracing::warn!(
                "Failed to delete message {} from FAQ channel: {}",
                message.id,
                e
            );
        }
    }
}
