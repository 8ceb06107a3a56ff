use serenity::all::{ChannelId, MessageId};
use serenity::async_trait;

use crate::{
    error::AppError,
    model::{menu::FaqMenu, message::ChannelMessage},
};

/// Operations on the designated FAQ channel.
///
/// Implementations report HTTP 403 as `AppError::Forbidden` and HTTP 404 as
/// `AppError::NotFound` so callers can pick their recovery path.
#[async_trait]
pub trait FaqChannel: Send + Sync {
    /// Id of the channel this handle operates on.
    fn id(&self) -> ChannelId;

    /// Confirms the channel exists and is visible to the bot.
    async fn resolve(&self) -> Result<(), AppError>;

    /// Fetches `message_id` and overwrites it with the menu.
    async fn edit_menu(&self, message_id: MessageId, menu: &FaqMenu) -> Result<(), AppError>;

    /// Posts the menu as a new message and returns its id.
    async fn send_menu(&self, menu: &FaqMenu) -> Result<MessageId, AppError>;

    /// Returns up to `limit` of the most recent messages, newest first.
    async fn recent_messages(&self, limit: u8) -> Result<Vec<ChannelMessage>, AppError>;

    async fn delete_message(&self, message_id: MessageId) -> Result<(), AppError>;
}
