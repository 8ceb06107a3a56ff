//! Builders for the FAQ menu message and its responses.
//!
//! The menu is the banner text plus a single string select whose options are the
//! FAQ topics. A fresh copy of the components is built for every send, edit, and
//! command reply. Selections are routed by `FAQ_SELECT_ID` from the gateway's
//! interaction events, so a menu posted by an earlier process keeps working.

use serenity::all::{
    CreateActionRow, CreateInteractionResponseMessage, CreateMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, EditMessage,
};

use crate::model::faq::{FaqTopic, FAQ_BANNER};

/// Custom id of the topic dropdown.
pub const FAQ_SELECT_ID: &str = "faq_select";

const FAQ_SELECT_PLACEHOLDER: &str = "Select a topic to get quick answers";

/// Banner content and dropdown, ready to be sent, edited in, or returned privately.
#[derive(Debug, Clone)]
pub struct FaqMenu {
    content: &'static str,
    components: Vec<CreateActionRow>,
}

impl FaqMenu {
    /// Builds the current banner and a new topic dropdown.
    pub fn new() -> Self {
        Self {
            content: FAQ_BANNER,
            components: vec![CreateActionRow::SelectMenu(topic_select())],
        }
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Message builder for posting a new menu message.
    pub fn create_message(&self) -> CreateMessage {
        CreateMessage::new()
            .content(self.content)
            .components(self.components.clone())
    }

    /// Edit builder that overwrites an existing message with the current menu.
    pub fn edit_message(&self) -> EditMessage {
        EditMessage::new()
            .content(self.content)
            .components(self.components.clone())
    }

    /// Private reply carrying the banner and dropdown, used by the `/faq` command.
    pub fn interaction_response(&self) -> CreateInteractionResponseMessage {
        CreateInteractionResponseMessage::new()
            .content(self.content)
            .components(self.components.clone())
            .ephemeral(true)
    }
}

impl Default for FaqMenu {
    fn default() -> Self {
        Self::new()
    }
}

/// Private reply carrying the answer for a selected topic.
///
/// # Arguments
/// - `topic` - Topic chosen in the dropdown
///
/// # Returns
/// - `CreateInteractionResponseMessage` - Ephemeral message containing the topic's answer
pub fn topic_response(topic: FaqTopic) -> CreateInteractionResponseMessage {
    CreateInteractionResponseMessage::new()
        .content(topic.answer())
        .ephemeral(true)
}

fn topic_select() -> CreateSelectMenu {
    let options = FaqTopic::ALL
        .into_iter()
        .map(|topic| {
            let option = CreateSelectMenuOption::new(topic.label(), topic.key());
            match topic.description() {
                Some(description) => option.description(description),
                None => option,
            }
        })
        .collect();

    CreateSelectMenu::new(FAQ_SELECT_ID, CreateSelectMenuKind::String { options })
        .placeholder(FAQ_SELECT_PLACEHOLDER)
        .min_values(1)
        .max_values(1)
}
