use thiserror::Error;

/// Denials produced by the maintenance and authorization gates.
///
/// Neither variant has side effects: the gates only read the store, and callers
/// are expected to stop before touching the platform or the ledger.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccessError {
    /// The bot is in maintenance mode and the actor is not the owner.
    #[error("Bot is in maintenance mode")]
    MaintenanceActive,

    /// The actor is neither an administrator nor holds the configured staff role.
    ///
    /// # Fields
    /// - `user_id` - Actor that was denied
    /// - `guild_id` - Guild the operation targeted
    #[error("User {user_id} is not allowed to perform privileged operations in guild {guild_id}")]
    Forbidden { user_id: u64, guild_id: u64 },

    /// Operator-only operation attempted by someone other than the bot owner.
    #[error("User {0} is not the bot owner")]
    NotOwner(u64),
}
