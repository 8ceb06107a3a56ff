//! Interaction routing.
//!
//! Routes the `/faq` command and selections from any FAQ dropdown, including
//! menus posted by earlier runs of the bot. Other interactions are ignored.

use serenity::all::{
    ComponentInteraction, ComponentInteractionDataKind, Context, CreateInteractionResponse,
    Interaction,
};

use crate::{
    bot::command::faq,
    model::{
        faq::FaqTopic,
        menu::{topic_response, FAQ_SELECT_ID},
    },
};

pub async fn handle_interaction(ctx: Context, interaction: Interaction) {
    match interaction {
        Interaction::Command(command) if command.data.name == faq::NAME => {
            faq::run(&ctx, &command).await;
        }
        Interaction::Component(component) if component.data.custom_id == FAQ_SELECT_ID => {
            handle_faq_select(&ctx, &component).await;
        }
        _ => {}
    }
}

/// Answers a dropdown selection privately with the chosen topic.
///
/// Values that no longer map to a topic are logged and left unanswered.
async fn handle_faq_select(ctx: &Context, component: &ComponentInteraction) {
    let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
        tracing::debug!("Ignoring non-select interaction on {}", FAQ_SELECT_ID);
        return;
    };

    let Some(topic) = selected_topic(values) else {
        tracing::debug!("Ignoring unknown FAQ selection {:?}", values);
        return;
    };

    let response = CreateInteractionResponse::Message(topic_response(topic));
    if let Err(e) = component.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to answer FAQ selection {} for user {}: {}",
            topic.key(),
            component.user.id,
            e
        );
    }
}

/// Resolves the dropdown values to a topic. Exactly one value is expected.
pub fn selected_topic(values: &[String]) -> Option<FaqTopic> {
    match values {
        [value] => FaqTopic::from_key(value),
        _ => None,
    }
}
