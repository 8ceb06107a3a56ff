//! Platform-neutral view of a channel message.

use serenity::all::{ChannelId, Message, MessageId, UserId};

/// The parts of a Discord message the reconciler and channel guard look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author_id: UserId,
    pub content: String,
}

impl From<&Message> for ChannelMessage {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id,
            channel_id: message.channel_id,
            author_id: message.author.id,
            content: message.content.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::serenity::{create_test_message, create_test_user};

    use super::*;

    /// Tests conversion from a serenity message.
    ///
    /// Expected: id, channel, author, and content carried over
    #[test]
    fn converts_from_serenity_message() {
        let author = create_test_user(42, "member", false);
        let message = create_test_message(1001, 2002, &author, "hello faq");

        let converted = ChannelMessage::from(&message);

        assert_eq!(converted.id, MessageId::new(1001));
        assert_eq!(converted.channel_id, ChannelId::new(2002));
        assert_eq!(converted.author_id, UserId::new(42));
        assert_eq!(converted.content, "hello faq");
    }
}
