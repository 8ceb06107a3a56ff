use std::path::PathBuf;

use tempfile::TempDir;

/// Test context owning an isolated temporary directory.
///
/// The directory and everything in it is removed when the context is dropped, so
/// keep the context alive for the whole test.
pub struct TestContext {
    /// Temporary directory backing this test.
    pub dir: TempDir,

    /// Path of the message id cache file.
    ///
    /// Depending on how the builder was configured the file may not exist, and its
    /// parent directory may not exist either.
    pub message_id_path: PathBuf,
}

impl TestContext {
    /// Creates a new test context with an empty temporary directory.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context whose cache path points at a file that does not exist yet
    /// - `Err(std::io::Error)` - Temporary directory could not be created
    pub fn new() -> Result<Self, std::io::Error> {
        let dir = tempfile::tempdir()?;
        let message_id_path = dir.path().join("faq_message_id.txt");

        Ok(Self {
            dir,
            message_id_path,
        })
    }

    /// Reads the raw cache file contents.
    ///
    /// # Returns
    /// - `Some(String)` - File contents
    /// - `None` - File does not exist or cannot be read
    pub async fn read_cache(&self) -> Option<String> {
        tokio::fs::read_to_string(&self.message_id_path).await.ok()
    }
}
