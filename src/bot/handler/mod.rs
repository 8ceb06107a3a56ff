use serenity::all::{ChannelId, Context, EventHandler, Interaction, Message, Ready};
use serenity::async_trait;

use crate::{bot::channel::DiscordFaqChannel, config::Config, data::message_id::MessageIdCache};

pub mod interaction;
pub mod message;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub faq_channel_id: ChannelId,
    pub message_id_cache: MessageIdCache,
}

impl Handler {
    pub fn new(config: &Config) -> Self {
        Self {
            faq_channel_id: config.faq_channel_id,
            message_id_cache: MessageIdCache::new(&config.faq_message_id_file),
        }
    }

    fn faq_channel(&self, ctx: &Context) -> DiscordFaqChannel {
        DiscordFaqChannel::new(ctx.http.clone(), self.faq_channel_id)
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        let channel = self.faq_channel(&ctx);
        ready::handle_ready(&channel, &self.message_id_cache, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        let channel = self.faq_channel(&ctx);
        message::handle_message(&channel, ctx, message).await;
    }

    /// Called when a user runs a command or uses a message component
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        interaction::handle_interaction(ctx, interaction).await;
    }
}
