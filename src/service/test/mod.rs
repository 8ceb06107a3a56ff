use serenity::all::{ChannelId, UserId};
use test_utils::builder::TestBuilder;

use crate::{
    data::message_id::MessageIdCache,
    error::{menu::MenuError, AppError},
    model::{
        faq::{FAQ_BANNER, FAQ_BANNER_MARKER},
        message::ChannelMessage,
    },
    service::{
        channel_guard::{ChannelGuardService, GuardAction},
        faq_menu::{FaqMenuService, ReconcileOutcome, RECOVERY_SCAN_LIMIT},
    },
};

use fake::FakeChannel;

mod channel_guard;

const FAQ_CHANNEL: u64 = 1465977472125374527;
const OTHER_CHANNEL: u64 = 1465977472125370000;
const BOT: u64 = 900000000000000001;
const MEMBER: u64 = 800000000000000001;
