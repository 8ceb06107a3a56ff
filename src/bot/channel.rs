//! Serenity-backed implementation of the FAQ channel.

use std::sync::Arc;

use serenity::all::{ChannelId, GetMessages, MessageId};
use serenity::async_trait;
use serenity::http::Http;

use crate::{
    error::AppError,
    model::{menu::FaqMenu, message::ChannelMessage},
    service::channel::FaqChannel,
};

/// The designated FAQ channel, reached through Discord's HTTP API.
pub struct DiscordFaqChannel {
    http: Arc<Http>,
    channel_id: ChannelId,
}

impl DiscordFaqChannel {
    /// Creates a new DiscordFaqChannel instance.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `channel_id` - Designated FAQ channel
    pub fn new(http: Arc<Http>, channel_id: ChannelId) -> Self {
        Self { http, channel_id }
    }
}

#[async_trait]
impl FaqChannel for DiscordFaqChannel {
    fn id(&self) -> ChannelId {
        self.channel_id
    }

    async fn resolve(&self) -> Result<(), AppError> {
        self.http.get_channel(self.channel_id).await?;
        Ok(())
    }

    async fn edit_menu(&self, message_id: MessageId, menu: &FaqMenu) -> Result<(), AppError> {
        // Fetch first so a stale id fails with 404 before any edit is attempted
        self.http.get_message(self.channel_id, message_id).await?;

        self.http
            .edit_message(self.channel_id, message_id, &menu.edit_message(), vec![])
            .await?;

        Ok(())
    }

    async fn send_menu(&self, menu: &FaqMenu) -> Result<MessageId, AppError> {
        let message = self
            .channel_id
            .send_message(&self.http, menu.create_message())
            .await?;

        Ok(message.id)
    }

    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, AppError> {
        let messages = self
            .channel_id
            .messages(&self.http, GetMessages::new().limit(limit))
            .await?;

        Ok(messages.iter().map(ChannelMessage::from).collect())
    }

    async fn delete_message(&self, message_id: MessageId) -> Result<(), AppError> {
        self.http
            .delete_message(self.channel_id, message_id, None)
            .await?;

        Ok(())
    }
}
