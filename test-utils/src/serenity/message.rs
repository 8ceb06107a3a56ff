//! Test factory for creating Serenity Message objects.

use serenity::all::{Message, User};

/// Creates a test Serenity Message.
///
/// Creates a Message object by deserializing JSON shaped like a Discord
/// MESSAGE_CREATE payload for a plain guild text message. Mentions, attachments,
/// embeds, and components are empty.
///
/// # Arguments
/// - `message_id` - Discord message ID (snowflake)
/// - `channel_id` - Channel the message was posted in
/// - `author` - Message author, see `create_test_user`
/// - `content` - Message text
///
/// # Returns
/// - `Message` - A valid Serenity Message struct for testing
///
/// # Panics
/// - If the JSON cannot be deserialized into a Message (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// use test_utils::serenity::{create_test_message, create_test_user};
///
/// let author = create_test_user(42, "member", false);
/// let message = create_test_message(1001, 2002, &author, "where do I log food?");
/// assert_eq!(message.author.id.get(), 42);
/// ```
pub fn create_test_message(message_id: u64, channel_id: u64, author: &User, content: &str) -> Message {
    serde_json::from_value(serde_json::json!({
        "id": message_id.to_string(),
        "channel_id": channel_id.to_string(),
        "author": author,
        "content": content,
        "timestamp": "2025-01-01T12:00:00.000000+00:00",
        "edited_timestamp": null,
        "tts": false,
        "mention_everyone": false,
        "mentions": [],
        "mention_roles": [],
        "attachments": [],
        "embeds": [],
        "pinned": false,
        "type": 0,
        "flags": 0,
        "components": [],
    }))
    .expect("Failed to create test message - invalid JSON structure")
}
