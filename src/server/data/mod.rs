//! Database repository layer.
//!
//! Repositories wrap SeaORM queries for each table and return domain models from
//! `server::model`. Snowflakes are stored as strings and converted at this boundary.
//! Every write that must be atomic (settings batches, warning append and count,
//! maintenance toggle) is expressed as a single statement or a single transaction
//! here, so the bot and dashboard processes can share the store safely.

pub mod bot_status;
pub mod guild_settings;
pub mod warning;

#[cfg(test)]
mod test;
