//! FAQ content store.
//!
//! Topics form a closed set. Every topic offered by the dropdown maps to an answer
//! through an exhaustive `match`, so a topic without an answer fails to compile.
//! Changing the copy means shipping a new binary.

/// Fixed opening of the banner. Used to rediscover the menu message in channel history.
pub const FAQ_BANNER_MARKER: &str = "**Metryc FAQ**";

/// Body of the menu message posted in the FAQ channel.
pub const FAQ_BANNER: &str = concat!(
    "**Metryc FAQ**\n",
    "Use the menu below to get quick answers to common questions.\n\n",
    "If your question isn’t listed, check out the Help Center."
);

/// A single FAQ topic offered in the dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaqTopic {
    WhatIsMetryc,
    DiscordRoles,
    WorkoutPlanning,
    FoodLogging,
    Pricing,
}

impl FaqTopic {
    /// Every topic, in the order the dropdown lists them.
    pub const ALL: [FaqTopic; 5] = [
        FaqTopic::WhatIsMetryc,
        FaqTopic::DiscordRoles,
        FaqTopic::WorkoutPlanning,
        FaqTopic::FoodLogging,
        FaqTopic::Pricing,
    ];

    /// Option value sent back by Discord when the topic is selected.
    pub fn key(self) -> &'static str {
        match self {
            FaqTopic::WhatIsMetryc => "what_is_metryc",
            FaqTopic::DiscordRoles => "discord_roles",
            FaqTopic::WorkoutPlanning => "workout_planning",
            FaqTopic::FoodLogging => "food_logging",
            FaqTopic::Pricing => "pricing",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FaqTopic::WhatIsMetryc => "What is Metryc?",
            FaqTopic::DiscordRoles => "What do the Discord roles mean?",
            FaqTopic::WorkoutPlanning => "Workout planning",
            FaqTopic::FoodLogging => "Food logging",
            FaqTopic::Pricing => "Pricing & free trial",
        }
    }

    /// Secondary line shown under the label in the dropdown, if any.
    pub fn description(self) -> Option<&'static str> {
        match self {
            FaqTopic::WhatIsMetryc => Some("Learn what Metryc does and why it’s different"),
            FaqTopic::DiscordRoles => Some("A guide to some roles in the Metryc Discord"),
            FaqTopic::WorkoutPlanning | FaqTopic::FoodLogging | FaqTopic::Pricing => None,
        }
    }

    /// Formatted answer sent privately when the topic is selected.
    pub fn answer(self) -> &'static str {
        match self {
            FaqTopic::WhatIsMetryc => WHAT_IS_METRYC,
            FaqTopic::DiscordRoles => DISCORD_ROLES,
            FaqTopic::WorkoutPlanning => {
                "**Workout planning**\nSet a plan once. Metryc adjusts future sessions as you log."
            }
            FaqTopic::FoodLogging => {
                "**Food logging**\nLog by text, photo, barcode, or voice. Metryc keeps context."
            }
            FaqTopic::Pricing => "**Pricing & free trial**\nFree trial, then monthly or yearly plans.",
        }
    }

    /// Resolves an option value back to its topic.
    ///
    /// # Arguments
    /// - `key` - Option value received from a dropdown interaction
    ///
    /// # Returns
    /// - `Some(FaqTopic)` - The topic owning this key
    /// - `None` - The key is not offered by the current menu
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|topic| topic.key() == key)
    }
}

const WHAT_IS_METRYC: &str = concat!(
    "**What is Metryc?**\n\n",
    "Metryc is a conversational AI nutrition and fitness coach designed to help you stay consistent in real life. ",
    "You can talk to Metryc just like a normal coach—plan workouts and meals, log what you actually do (by text, photo, barcode, or voice), ",
    "and get guidance without rigid flows or manual tracking.\n\n",
    "**Why choose Metryc?**\n",
    "There are fitness and nutrition apps, and then there’s Metryc. Here’s what makes it different:\n",
    "• **A coach you can actually talk to**\n",
    "  Chat like a real coach—ask questions, explain what happened, and get clear guidance in natural language.\n",
    "• **Plan, log, and adjust in one place**\n",
    "  Planning and tracking aren’t separate modes. As you talk about meals or workouts, Metryc updates your plan automatically.\n",
    "• **Less friction, more consistency**\n",
    "  Metryc remembers context, uses reliable nutrition data, and reduces the need to fix or re-enter information.\n",
    "• **Coaching, not just logging**\n",
    "  Metryc helps you decide what to do next, not just record what already happened."
);

const DISCORD_ROLES: &str = concat!(
    "**What do the Discord roles mean?**\n",
    "Here’s how you can earn different community roles on the Metryc Discord. ",
    "These are badges of appreciation — not staff roles — and reflect your contributions or engagement!\n\n",
    "🌐 **Pro**\n",
    "If you’re a Metryc Pro subscriber, click the **Go to Discord** button in your Metryc settings to receive the **@Pro** role.\n",
    "If it doesn’t sync, tag a moderator for help.\n\n",
    "🧭 **Pathfinder**\n",
    "Receive **5 ⭐ reactions** on a message or thread to earn the **@Pathfinder** role.\n",
    "Your post will be featured in **#⭐starred**.\n\n",
    "🐛 **Bug Sniper**\n",
    "Report **5 confirmed bugs** in **#🐛bug-reports** and we’ll assign the **@Bug Sniper** role once your reports are reviewed.\n\n",
    "💡 **Visionary**\n",
    "The **@Visionary** role is for members who share standout product ideas, feature suggestions, or thoughtful feedback.\n",
    "**This role is hand-picked by the Metryc team for creativity and impact.**\n\n",
    "📏 **Metryst**\n",
    "Share a Metryc thread link in **#💌sharing** and you'll automatically be assigned **@Metryst**.\n\n",
    "**Let a moderator know if you believe you earned a role but didn't receive it!**"
);
