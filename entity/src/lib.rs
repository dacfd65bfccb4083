//! SeaORM entity models for the guild configuration store.
//!
//! Both the bot process and the dashboard process open the same database and
//! read/write these three relations.

pub mod prelude;

pub mod bot_status;
pub mod guild_settings;
pub mod warning;
