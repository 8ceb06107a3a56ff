use serenity::all::{Client, GatewayIntents};

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;

/// Starts the Discord bot in a blocking manner
///
/// Builds the client with the FAQ event handler and runs it until the gateway
/// connection ends for good.
///
/// # Arguments
/// - `config` - Application configuration with the bot token and FAQ channel
///
/// # Returns
/// - `Ok(())` if the client shuts down cleanly
/// - `Err(AppError)` if client construction, authentication, or the gateway fails
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES;

    let handler = Handler::new(config);

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
