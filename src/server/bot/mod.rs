//! Discord bot: slash commands for moderation and guild configuration.
//!
//! The bot runs as its own process (`galaxybot bot`) and shares the SQLite store with
//! the dashboard. Every command passes the maintenance gate before it runs; commands
//! that change state also pass the authorization gate inside their service.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and keep the cache populated for guild names
//! - `GUILD_MEMBERS` - Resolve members targeted by moderation commands (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
