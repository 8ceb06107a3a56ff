use std::path::PathBuf;

use serenity::all::ChannelId;

use crate::error::{config::ConfigError, AppError};

/// Environment variable holding the bot token.
const BOT_TOKEN_VAR: &str = "BOT";
const FAQ_CHANNEL_ID_VAR: &str = "FAQ_CHANNEL_ID";
const FAQ_MESSAGE_ID_FILE_VAR: &str = "FAQ_MESSAGE_ID_FILE";

/// Tokens shorter than this are rejected before connecting.
pub const MIN_TOKEN_LEN: usize = 50;

const DEFAULT_FAQ_CHANNEL_ID: u64 = 1465977472125374527;
const DEFAULT_FAQ_MESSAGE_ID_FILE: &str = "/tmp/faq_message_id.txt";

/// Startup configuration, built once and passed to the bot.
#[derive(Debug, Clone)]
pub struct Config {
    pub discord_bot_token: String,
    /// Channel holding the FAQ menu message. All other posts there are removed.
    pub faq_channel_id: ChannelId,
    /// Best-effort cache of the menu message id.
    pub faq_message_id_file: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let token = std::env::var(BOT_TOKEN_VAR)
            .map_err(|_| ConfigError::MissingEnvVar(BOT_TOKEN_VAR.to_string()))?;

        let faq_channel_id = match std::env::var(FAQ_CHANNEL_ID_VAR) {
            Ok(value) => parse_channel_id(&value)?,
            Err(_) => ChannelId::new(DEFAULT_FAQ_CHANNEL_ID),
        };

        let faq_message_id_file = std::env::var(FAQ_MESSAGE_ID_FILE_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FAQ_MESSAGE_ID_FILE));

        Ok(Self::new(token, faq_channel_id, faq_message_id_file)?)
    }

    /// Builds a config from explicit values, validating the token.
    ///
    /// # Arguments
    /// - `discord_bot_token` - Bot token used to authenticate with the gateway
    /// - `faq_channel_id` - Designated FAQ channel
    /// - `faq_message_id_file` - Path of the message id cache file
    ///
    /// # Returns
    /// - `Ok(Config)` - Token passed the length check
    /// - `Err(ConfigError::InvalidToken)` - Token shorter than `MIN_TOKEN_LEN`
    pub fn new(
        discord_bot_token: String,
        faq_channel_id: ChannelId,
        faq_message_id_file: PathBuf,
    ) -> Result<Self, ConfigError> {
        validate_token(&discord_bot_token)?;

        Ok(Self {
            discord_bot_token,
            faq_channel_id,
            faq_message_id_file,
        })
    }
}

fn validate_token(token: &str) -> Result<(), ConfigError> {
    let len = token.chars().count();
    if len < MIN_TOKEN_LEN {
        return Err(ConfigError::InvalidToken {
            len,
            min_len: MIN_TOKEN_LEN,
        });
    }

    Ok(())
}

fn parse_channel_id(value: &str) -> Result<ChannelId, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidEnvVar {
        name: FAQ_CHANNEL_ID_VAR.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u64>() {
        Ok(0) => Err(invalid("channel id cannot be 0")),
        Ok(id) => Ok(ChannelId::new(id)),
        Err(e) => Err(invalid(&e.to_string())),
    }
}
