//! `/faq` command.
//!
//! Replies privately with the banner and a fresh topic dropdown. Takes no options.

use serenity::all::{CommandInteraction, Context, CreateCommand, CreateInteractionResponse};

use crate::model::menu::FaqMenu;

pub const NAME: &str = "faq";

const DESCRIPTION: &str = "Show the Metryc FAQ menu (ephemeral)";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME).description(DESCRIPTION)
}

/// Responds to a `/faq` invocation with the private FAQ menu.
///
/// Failures are logged; the user never sees an error message.
///
/// # Arguments
/// - `ctx` - Discord context for the HTTP client
/// - `command` - The command interaction to answer
pub async fn run(ctx: &Context, command: &CommandInteraction) {
    let response = CreateInteractionResponse::Message(FaqMenu::new().interaction_response());

    if let Err(e) = command.create_response(&ctx.http, response).await {
        tracing::error!(
            "Failed to respond to /{} from user {}: {}",
            NAME,
            command.user.id,
            e
        );
    }
}
