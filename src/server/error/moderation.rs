use thiserror::Error;

use crate::server::error::platform::PlatformError;

#[derive(Error, Debug)]
pub enum ModerationError {
    /// Mute duration outside `[MIN_MUTE_HOURS, MAX_MUTE_HOURS]`.
    #[error("Mute duration of {0} hours is outside the allowed range")]
    InvalidDuration(i64),

    /// Message purge amount outside `[MIN_PURGE_AMOUNT, MAX_PURGE_AMOUNT]`.
    #[error("Cannot delete {0} messages at once")]
    InvalidAmount(i64),

    /// Warnings require an explicit, non-blank reason.
    #[error("A reason is required")]
    EmptyReason,

    /// The platform refused the kick/ban/timeout itself.
    ///
    /// Raised before any local state is written, so the ledger never holds a
    /// record for an action that did not happen.
    #[error("Failed to {action} user {target_id}: {source}")]
    ExternalActionFailed {
        /// Action label, e.g. `kick`
        action: &'static str,
        /// Member the action targeted
        target_id: u64,
        /// Underlying platform failure
        #[source]
        source: PlatformError,
    },

    /// The platform refused to delete messages in a channel.
    #[error("Failed to delete messages in channel {channel_id}: {source}")]
    PurgeFailed {
        channel_id: u64,
        #[source]
        source: PlatformError,
    },
}
