//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer. Domain models
//! are converted from entity models at the repository boundary and transformed to DTOs
//! at the controller boundary, keeping Discord snowflakes as `u64` everywhere in between.

pub mod actor;
pub mod audit;
pub mod bot_status;
pub mod discord;
pub mod moderation;
pub mod settings;
pub mod user;
pub mod warning;
