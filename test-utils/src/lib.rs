//! Megasena Test Utils
//!
//! Provides shared testing utilities for the volante board. This crate offers a builder
//! pattern for creating test contexts backed by in-memory SQLite databases, plus factories
//! for inserting volantes and configuration rows with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Helpers that insert rows directly through SeaORM
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_volante_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_volante_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
