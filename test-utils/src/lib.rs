//! FAQ Bot Test Utils
//!
//! Provides shared testing utilities for the FAQ bot. This crate offers a builder
//! pattern for creating test contexts with an isolated temporary directory holding
//! the message id cache file, plus factories for Serenity model objects.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for choosing the initial cache file state
//! - **TestContext**: Test environment owning the temporary directory
//! - **TestError**: Error types that can occur during test setup
//! - **serenity**: Factories for Serenity `User` and `Message` objects
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_reconcile_with_saved_id() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_saved_message_id(123456789)
//!         .build()
//!         .await?;
//!
//!     let cache = MessageIdCache::new(&test.message_id_path);
//!     // Run code under test...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod serenity;
