//! Ready event handler for bot initialization.
//!
//! Fired once per gateway session after authentication. Logs the bot identity,
//! registers the `/faq` command, and reconciles the FAQ menu message. Nothing here
//! is retried; the next session runs it again.

use serenity::all::{Command, Context, Ready};

use crate::{
    bot::command::faq,
    data::message_id::MessageIdCache,
    service::{
        channel::FaqChannel,
        faq_menu::{FaqMenuService, ReconcileOutcome},
    },
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `channel` - The designated FAQ channel
/// - `cache` - Saved menu message id
/// - `ctx` - Discord context for command registration
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready<C: FaqChannel>(
    channel: &C,
    cache: &MessageIdCache,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("Logged in as {} (id={})", ready.user.name, ready.user.id);

    if let Err(e) = Command::create_global_command(&ctx.http, faq::register()).await {
        tracing::error!("Failed to register /{} command: {}", faq::NAME, e);
    }

    match FaqMenuService::new(channel, cache)
        .reconcile(ready.user.id)
        .await
    {
        Ok(ReconcileOutcome::RefreshedSaved(id)) => {
            tracing::info!("Refreshed FAQ message {} by saved ID", id);
        }
        Ok(ReconcileOutcome::RefreshedRecovered(id)) => {
            tracing::info!("Refreshed existing FAQ message {} (found by content)", id);
        }
        Ok(ReconcileOutcome::Posted(id)) => {
            tracing::info!("Posted new FAQ message {} and saved ID", id);
        }
        Err(e) => {
            tracing::error!("Could not post/refresh FAQ: {}", e);
        }
    }
}
