//! Test factories for creating Serenity API objects.
//!
//! Objects are built by deserializing JSON shaped like Discord's API payloads, so the
//! resulting structs are exactly what the bot receives at runtime.
//!
//! # Available Factories
//!
//! - `member::create_test_member` - Guild members as attached to interactions
//! - `user::create_test_user` - Discord users

pub mod member;
pub mod user;

pub use member::create_test_member;
pub use user::create_test_user;
