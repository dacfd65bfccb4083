//! GalaxyBot Test Utils
//!
//! Shared testing utilities for the GalaxyBot crate. Provides a builder for test contexts
//! backed by an in-memory SQLite database, factories for seeding settings, warnings and
//! bot status rows, and factories for Serenity objects the bot receives from Discord.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn warns_member() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_moderation_tables()
//!         .build()
//!         .await?;
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::create_guild_settings(db, 1).await?;
//!     // Perform operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
