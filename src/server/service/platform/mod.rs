//! Chat platform client seam.
//!
//! Moderation needs a handful of platform side effects: direct messages, kicks, bans,
//! timeouts, message purges and audit posts, plus a member's current privileges. They sit behind `PlatformClient` so the moderation
//! pipeline can run against Discord in production and against a recording fake in
//! tests.

pub mod discord;

#[cfg(test)]
pub mod fake;

use chrono::{DateTime, Utc};
use serenity::async_trait;

use crate::server::{
    error::platform::PlatformError,
    model::{actor::Actor, audit::AuditEntry},
};

#[async_trait]
pub trait PlatformClient: Send + Sync {
    /// Resolves a guild member's current privileges.
    ///
    /// # Returns
    /// - `Ok(Actor)` - The member's administrator flag and role ids
    /// - `Err(PlatformError::NotFound)` - Unknown guild, or the user is not a member
    async fn resolve_actor(&self, guild_id: u64, user_id: u64) -> Result<Actor, PlatformError>;

    /// Sends a direct message to a user.
    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), PlatformError>;

    async fn kick_member(&self, guild_id: u64, user_id: u64, reason: &str)
        -> Result<(), PlatformError>;

    async fn ban_member(&self, guild_id: u64, user_id: u64, reason: &str)
        -> Result<(), PlatformError>;

    /// Prevents a member from communicating until `until`.
    async fn timeout_member(
        &self,
        guild_id: u64,
        user_id: u64,
        until: DateTime<Utc>,
        reason: &str,
    ) -> Result<(), PlatformError>;

    /// Lifts an active timeout.
    async fn clear_timeout(&self, guild_id: u64, user_id: u64, reason: &str)
        -> Result<(), PlatformError>;

    /// Deletes up to `amount` of the most recent messages in a channel.
    ///
    /// Returns how many messages were actually deleted, which may be fewer when the
    /// channel is short or messages are too old to bulk delete.
    async fn purge_messages(&self, channel_id: u64, amount: u8) -> Result<u64, PlatformError>;

    /// Posts an audit entry to a channel.
    async fn send_audit_entry(&self, channel_id: u64, entry: &AuditEntry)
        -> Result<(), PlatformError>;
}
