//! Data transfer objects shared by the dashboard API.

pub mod admin;
pub mod api;
pub mod discord;
pub mod serde_id;
pub mod settings;
pub mod user;
