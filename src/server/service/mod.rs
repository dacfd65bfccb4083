//! Service layer shared by the bot commands and the dashboard controllers.
//!
//! Services borrow the database connection and any collaborators they need for the
//! duration of one operation. Moderation and configuration writes pass the maintenance
//! and authorization gates here, so neither surface can skip them. Dashboard login
//! and guild lookups against Discord's OAuth API live in `auth` and `identity`.

pub mod auth;
pub mod authorization;
pub mod configuration;
pub mod identity;
pub mod maintenance;
pub mod moderation;
pub mod platform;
pub mod translation;
