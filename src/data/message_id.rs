//! File-backed cache of the FAQ menu message id.
//!
//! The file holds the decimal form of a single Discord message id and nothing else.
//! Reads never fail: any problem yields `None`. Writes return the I/O result so the
//! caller decides, visibly, to log and drop it.

use std::io;
use std::path::{Path, PathBuf};

use serenity::all::MessageId;

/// Best-effort store for the id of the last known menu message.
#[derive(Debug, Clone)]
pub struct MessageIdCache {
    path: PathBuf,
}

impl MessageIdCache {
    /// Creates a cache backed by the file at `path`. The file need not exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the saved message id.
    ///
    /// Surrounding whitespace is ignored. A missing file, unreadable file, or
    /// content that is not a non-zero integer all count as no saved id.
    ///
    /// # Returns
    /// - `Some(MessageId)` - A valid id was read
    /// - `None` - Nothing usable is saved
    pub async fn load(&self) -> Option<MessageId> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(
                    "No saved FAQ message id at {}: {}",
                    self.path.display(),
                    e
                );
                return None;
            }
        };

        match contents.trim().parse::<u64>() {
            Ok(0) => None,
            Ok(id) => Some(MessageId::new(id)),
            Err(e) => {
                tracing::debug!(
                    "Ignoring unparsable FAQ message id file {}: {}",
                    self.path.display(),
                    e
                );
                None
            }
        }
    }

    /// Overwrites the file with `message_id`.
    ///
    /// # Arguments
    /// - `message_id` - Id of the current menu message
    ///
    /// # Returns
    /// - `Ok(())` - Id written
    /// - `Err(io::Error)` - Write failed; the cache is left as it was or absent
    pub async fn save(&self, message_id: MessageId) -> io::Result<()> {
        tokio::fs::write(&self.path, message_id.get().to_string()).await
    }
}
