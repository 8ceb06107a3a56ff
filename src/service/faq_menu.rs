//! FAQ menu reconciliation.
//!
//! Ensures exactly one current menu message exists in the FAQ channel. The saved
//! message id is tried first; if it is missing or stale, recent channel history is
//! scanned for a message by this bot that opens with the banner marker; if none is
//! found, a new message is posted. Running it again against the same channel edits
//! the same message instead of posting another.

use serenity::all::{MessageId, UserId};

use crate::{
    data::message_id::MessageIdCache,
    error::{menu::MenuError, AppError},
    model::{faq::FAQ_BANNER_MARKER, menu::FaqMenu, message::ChannelMessage},
    service::channel::FaqChannel,
};

/// Number of recent messages searched when the saved id does not work.
pub const RECOVERY_SCAN_LIMIT: u8 = 50;

/// How reconciliation brought the menu up to date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// The message referenced by the saved id was edited.
    RefreshedSaved(MessageId),
    /// An existing menu message was found in channel history and edited.
    RefreshedRecovered(MessageId),
    /// No menu message existed, so a new one was posted.
    Posted(MessageId),
}

impl ReconcileOutcome {
    pub fn message_id(self) -> MessageId {
        match self {
            ReconcileOutcome::RefreshedSaved(id)
            | ReconcileOutcome::RefreshedRecovered(id)
            | ReconcileOutcome::Posted(id) => id,
        }
    }
}

/// Service keeping the FAQ menu message current.
pub struct FaqMenuService<'a, C: FaqChannel> {
    channel: &'a C,
    cache: &'a MessageIdCache,
}

impl<'a, C: FaqChannel> FaqMenuService<'a, C> {
    /// Creates a new FaqMenuService instance.
    ///
    /// # Arguments
    /// - `channel` - The designated FAQ channel
    /// - `cache` - Best-effort store of the menu message id
    pub fn new(channel: &'a C, cache: &'a MessageIdCache) -> Self {
        Self { channel, cache }
    }

    /// Ensures the FAQ channel holds exactly one up-to-date menu message.
    ///
    /// Steps, stopping at the first that succeeds:
    /// 1. Resolve the channel; failure ends reconciliation for this session
    /// 2. Edit the message referenced by the saved id
    /// 3. Scan the last `RECOVERY_SCAN_LIMIT` messages for a menu posted by `bot_id`,
    ///    edit it, and save its id
    /// 4. Post a new menu message and save its id
    ///
    /// Cache write failures are logged and dropped.
    ///
    /// # Arguments
    /// - `bot_id` - User id of this bot, used to recognise its own menu message
    ///
    /// # Returns
    /// - `Ok(ReconcileOutcome)` - Which path brought the menu up to date
    /// - `Err(AppError::MenuErr(MenuError::ChannelUnavailable))` - Channel could not be resolved
    /// - `Err(AppError::MenuErr(MenuError::HistoryForbidden))` - Recovery scan was denied
    /// - `Err(AppError::MenuErr(MenuError::SendForbidden))` - Posting or editing was denied
    /// - `Err(AppError)` - Any other Discord failure during the scan, edit, or post
    pub async fn reconcile(&self, bot_id: UserId) -> Result<ReconcileOutcome, AppError> {
        let channel_id = self.channel.id();

        if let Err(e) = self.channel.resolve().await {
            tracing::debug!("Failed to resolve FAQ channel {}: {}", channel_id, e);
            return Err(MenuError::ChannelUnavailable(channel_id).into());
        }

        let menu = FaqMenu::new();

        if let Some(saved_id) = self.cache.load().await {
            match self.channel.edit_menu(saved_id, &menu).await {
                Ok(()) => return Ok(ReconcileOutcome::RefreshedSaved(saved_id)),
                Err(e) => {
                    tracing::warn!(
                        "Could not fetch/edit saved FAQ message {} (will recover): {}",
                        saved_id,
                        e
                    );
                }
            }
        }

        let existing = self.find_existing_menu(bot_id).await?;

        let outcome = match existing {
            Some(message_id) => {
                self.channel
                    .edit_menu(message_id, &menu)
                    .await
                    .map_err(|e| self.send_error(e))?;
                ReconcileOutcome::RefreshedRecovered(message_id)
            }
            None => {
                let message_id = self
                    .channel
                    .send_menu(&menu)
                    .await
                    .map_err(|e| self.send_error(e))?;
                ReconcileOutcome::Posted(message_id)
            }
        };

        if let Err(e) = self.cache.save(outcome.message_id()).await {
            tracing::debug!(
                "Could not save FAQ message id to {}: {}",
                self.cache.path().display(),
                e
            );
        }

        Ok(outcome)
    }

    /// Scans recent history for a menu message posted by this bot.
    ///
    /// # Returns
    /// - `Ok(Some(MessageId))` - Newest message by `bot_id` opening with the banner marker
    /// - `Ok(None)` - No such message in the scanned window
    /// - `Err(AppError::MenuErr(MenuError::HistoryForbidden))` - History access denied
    async fn find_existing_menu(&self, bot_id: UserId) -> Result<Option<MessageId>, AppError> {
        let messages = self
            .channel
            .recent_messages(RECOVERY_SCAN_LIMIT)
            .await
            .map_err(|e| {
                if e.is_forbidden() {
                    MenuError::HistoryForbidden(self.channel.id()).into()
                } else {
                    e
                }
            })?;

        Ok(messages
            .iter()
            .find(|message| is_menu_message(message, bot_id))
            .map(|message| message.id))
    }

    fn send_error(&self, e: AppError) -> AppError {
        if e.is_forbidden() {
            MenuError::SendForbidden(self.channel.id()).into()
        } else {
            e
        }
    }
}

/// Whether `message` is a menu message posted by `bot_id`.
pub fn is_menu_message(message: &ChannelMessage, bot_id: UserId) -> bool {
    message.author_id == bot_id && message.content.starts_with(FAQ_BANNER_MARKER)
}
