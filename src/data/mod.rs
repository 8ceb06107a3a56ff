//! Persistence for the bot's only piece of state.
//!
//! The FAQ menu message id is kept in a plain file. The file is an optimization:
//! it may be missing, stale, or unwritable at any time, and reconciliation recovers
//! by scanning channel history when it is.

pub mod message_id;

#[cfg(test)]
mod test;
