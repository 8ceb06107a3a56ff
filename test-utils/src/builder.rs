use crate::{context::TestContext, error::TestError};

/// Initial state of the message id cache file.
enum CacheState {
    Absent,
    Contents(String),
    Unwritable,
}

/// Builder for creating test contexts with a prepared cache file.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
///
/// let test = TestBuilder::new()
///     .with_saved_message_id(987654321)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    cache: CacheState,
}

impl TestBuilder {
    /// Creates a new test builder. By default no cache file exists.
    pub fn new() -> Self {
        Self {
            cache: CacheState::Absent,
        }
    }

    /// Writes `message_id` to the cache file, as a previous run would have.
    ///
    /// # Arguments
    /// - `message_id` - Discord message id to save
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_saved_message_id(self, message_id: u64) -> Self {
        self.with_cache_contents(&message_id.to_string())
    }

    /// Writes arbitrary raw contents to the cache file.
    ///
    /// Useful for corrupt or hand-edited files.
    pub fn with_cache_contents(mut self, contents: &str) -> Self {
        self.cache = CacheState::Contents(contents.to_string());
        self
    }

    /// Points the cache path into a directory that does not exist, so every
    /// write fails.
    pub fn with_unwritable_cache(mut self) -> Self {
        self.cache = CacheState::Unwritable;
        self
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the cache file in the configured state
    /// - `Err(TestError::Io)` - Failed to create the directory or write the file
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new()?;

        match self.cache {
            CacheState::Absent => {}
            CacheState::Contents(contents) => {
                tokio::fs::write(&context.message_id_path, contents).await?;
            }
            CacheState::Unwritable => {
                context.message_id_path = context
                    .dir
                    .path()
                    .join("missing")
                    .join("faq_message_id.txt");
            }
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
