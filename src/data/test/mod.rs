use serenity::all::MessageId;
use test_utils::builder::TestBuilder;

use crate::data::message_id::MessageIdCache;

mod message_id;
