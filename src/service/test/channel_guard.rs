use test_utils::serenity::{create_test_message, create_test_user};

use super::*;

fn member_message(id: u64, channel: u64, content: &str) -> ChannelMessage {
    let author = create_test_user(MEMBER, "member", false);
    ChannelMessage::from(&create_test_message(id, channel, &author, content))
}

/// Tests that a member's post in the FAQ channel is deleted.
///
/// Expected: Ok(Deleted) and the message is gone
#[tokio::test]
async fn deletes_member_post_in_faq_channel() -> Result<(), AppError> {
    let channel = FakeChannel::new(FAQ_CHANNEL, BOT);
    let posted = channel.post(MEMBER, "how do I log food?");
    let message = member_message(posted.get(), FAQ_CHANNEL, "how do I log food?");

    let action = ChannelGuardService::new(&channel)
        .guard(&message, UserId::new(BOT))
        .await?;

    assert_eq!(action, GuardAction::Deleted);
    assert!(channel.message(posted).is_none());

    Ok(())
}

/// Tests that posts by other bots are deleted too.
///
/// Expected: Ok(Deleted)
#[tokio::test]
async fn deletes_other_bot_post() -> Result<(), AppError> {
    let channel = FakeChannel::new(FAQ_CHANNEL, BOT);
    let other_bot = 900000000000000002;
    let posted = channel.post(other_bot, "beep");
    let author = create_test_user(other_bot, "other-bot", true);
    let message = ChannelMessage::from(&create_test_message(
        posted.get(),
        FAQ_CHANNEL,
        &author,
        "beep",
    ));

    let action = ChannelGuardService::new(&channel)
        .guard(&message, UserId::new(BOT))
        .await?;

    assert_eq!(action, GuardAction::Deleted);

    Ok(())
}

/// Tests that the bot's own posts survive.
///
/// Expected: Ok(Kept) and the message still exists
#[tokio::test]
async fn keeps_own_post() -> Result<(), AppError> {
    let channel = FakeChannel::new(FAQ_CHANNEL, BOT);
    let posted = channel.post(BOT, FAQ_BANNER);
    let author = create_test_user(BOT, "faq-bot", true);
    let message = ChannelMessage::from(&create_test_message(
        posted.get(),
        FAQ_CHANNEL,
        &author,
        FAQ_BANNER,
    ));

    let action = ChannelGuardService::new(&channel)
        .guard(&message, UserId::new(BOT))
        .await?;

    assert_eq!(action, GuardAction::Kept);
    assert!(channel.message(posted).is_some());

    Ok(())
}

/// Tests that messages in other channels are left alone.
///
/// Verifies several channel ids other than the FAQ channel, including ones
/// adjacent to it.
///
/// Expected: Ok(Ignored) for each and nothing deleted
#[tokio::test]
async fn ignores_other_channels() -> Result<(), AppError> {
    let channel = FakeChannel::new(FAQ_CHANNEL, BOT);
    channel.post(MEMBER, "kept");

    for other in [OTHER_CHANNEL, FAQ_CHANNEL - 1, FAQ_CHANNEL + 1, 1] {
        let message = member_message(5_000, other, "general chatter");

        let action = ChannelGuardService::new(&channel)
            .guard(&message, UserId::new(BOT))
            .await?;

        assert_eq!(action, GuardAction::Ignored, "channel {}", other);
    }
    assert_eq!(channel.messages().len(), 1);

    Ok(())
}

/// Tests that a denied delete is swallowed.
///
/// Expected: Ok(Kept) and the message still exists
#[tokio::test]
async fn forbidden_delete_is_swallowed() -> Result<(), AppError> {
    let channel = FakeChannel::new(FAQ_CHANNEL, BOT);
    channel.forbid_delete();
    let posted = channel.post(MEMBER, "spam");
    let message = member_message(posted.get(), FAQ_CHANNEL, "spam");

    let action = ChannelGuardService::new(&channel)
        .guard(&message, UserId::new(BOT))
        .await?;

    assert_eq!(action, GuardAction::Kept);
    assert!(channel.message(posted).is_some());

    Ok(())
}

/// Tests that other delete failures are returned.
///
/// Verifies that deleting a message someone else already removed surfaces the
/// 404 to the caller for logging.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn missing_message_is_returned() {
    let channel = FakeChannel::new(FAQ_CHANNEL, BOT);
    let message = member_message(77, FAQ_CHANNEL, "already gone");

    let result = ChannelGuardService::new(&channel)
        .guard(&message, UserId::new(BOT))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}
