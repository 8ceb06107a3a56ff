use serenity::all::ChannelId;
use thiserror::Error;

/// Diagnostics that end menu reconciliation for the current gateway session.
///
/// None of these are retried. The bot keeps guarding the channel and serving the
/// command; the next session runs reconciliation again.
#[derive(Error, Debug)]
pub enum MenuError {
    /// The designated channel could not be fetched.
    #[error("Could not find FAQ channel {0}. Check the channel id and bot permissions.")]
    ChannelUnavailable(ChannelId),

    /// Recovery scan was denied access to channel history.
    #[error("Missing Read Message History permission in FAQ channel {0}")]
    HistoryForbidden(ChannelId),

    /// Posting or editing the menu message was denied.
    #[error("Missing Send Messages permission in FAQ channel {0}")]
    SendForbidden(ChannelId),
}
