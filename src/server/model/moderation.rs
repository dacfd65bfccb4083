//! Moderation request and outcome models.

use chrono::{DateTime, Utc};

use crate::server::{error::moderation::ModerationError, model::actor::Actor};

/// Shortest allowed timeout, in hours.
pub const MIN_MUTE_HOURS: i64 = 1;

/// Longest allowed timeout, in hours. Discord caps timeouts at 28 days.
pub const MAX_MUTE_HOURS: i64 = 24 * 28;

/// Fewest messages a single purge deletes.
pub const MIN_PURGE_AMOUNT: i64 = 1;

/// Most messages a single purge deletes, the bulk delete endpoint's limit.
pub const MAX_PURGE_AMOUNT: i64 = 100;

/// Reason recorded for actions that carry no reason of their own.
pub const NO_REASON: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Kick,
    Ban,
    Mute { duration_hours: i64 },
    Unmute,
    Warn,
    ClearWarnings,
}

impl ModerationAction {
    /// Short label used in logs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Kick => "kick",
            Self::Ban => "ban",
            Self::Mute { .. } => "mute",
            Self::Unmute => "unmute",
            Self::Warn => "warn",
            Self::ClearWarnings => "clearwarns",
        }
    }

    /// Translation key of the action name shown in audit entries.
    pub fn audit_label_key(&self) -> &'static str {
        match self {
            Self::Kick => "log_action_kick",
            Self::Ban => "log_action_ban",
            Self::Mute { .. } => "log_action_mute",
            Self::Unmute => "log_action_unmute",
            Self::Warn => "log_action_warn",
            Self::ClearWarnings => "log_action_clearwarns",
        }
    }

    /// Translation key of the reason used when the moderator gave none.
    ///
    /// `None` for actions where a default reason makes no sense: warnings require
    /// an explicit reason and clearing warnings records `NO_REASON`.
    pub fn default_reason_key(&self) -> Option<&'static str> {
        match self {
            Self::Kick => Some("kick_reason_default"),
            Self::Ban => Some("ban_reason_default"),
            Self::Mute { .. } => Some("mute_reason_default"),
            Self::Unmute => Some("unmute_reason_default"),
            Self::Warn | Self::ClearWarnings => None,
        }
    }

    /// Translation key of the direct message sent to the target, if the action notifies.
    pub fn notice_key(&self) -> Option<&'static str> {
        match self {
            Self::Kick => Some("kick_success_dm"),
            Self::Ban => Some("ban_success_dm"),
            Self::Mute { .. } => Some("mute_success_dm"),
            Self::Warn => Some("warn_success_dm"),
            Self::Unmute | Self::ClearWarnings => None,
        }
    }
}

/// Checks a timeout length against `[MIN_MUTE_HOURS, MAX_MUTE_HOURS]`.
pub fn validate_mute_duration(duration_hours: i64) -> Result<(), ModerationError> {
    if (MIN_MUTE_HOURS..=MAX_MUTE_HOURS).contains(&duration_hours) {
        Ok(())
    } else {
        Err(ModerationError::InvalidDuration(duration_hours))
    }
}

/// Checks a purge amount against `[MIN_PURGE_AMOUNT, MAX_PURGE_AMOUNT]`.
pub fn validate_purge_amount(amount: i64) -> Result<u8, ModerationError> {
    match u8::try_from(amount) {
        Ok(count) if (MIN_PURGE_AMOUNT..=MAX_PURGE_AMOUNT).contains(&amount) => Ok(count),
        _ => Err(ModerationError::InvalidAmount(amount)),
    }
}

/// Member a moderation action is aimed at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationTarget {
    pub user_id: u64,
    /// Name used in replies and audit entries.
    pub display_name: String,
}

/// A moderation action requested by an actor.
#[derive(Debug, Clone)]
pub struct ModerationRequest {
    pub guild_id: u64,
    /// Guild name quoted in the direct message to the target.
    pub guild_name: String,
    pub actor: Actor,
    pub target: ModerationTarget,
    pub action: ModerationAction,
    /// Free-text reason, `None` or blank when the moderator gave none.
    pub reason: Option<String>,
}

/// Stages a moderation request passes through.
///
/// `Requested` moves to `Authorized` once the gates pass, then to `Applied` once the
/// action or ledger write succeeded. `Logged` follows when the audit entry was posted,
/// and `Done` ends every successful request. `Denied` is reached from `Requested` when
/// a gate refuses the request; `Failed` is reached from `Authorized` when the platform
/// refuses the action. Both are terminal and leave no trace in the ledger or the audit
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationState {
    Requested,
    Authorized,
    Applied,
    Logged,
    Done,
    Denied,
    Failed,
}

/// What a completed moderation request did.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationOutcome {
    pub action: ModerationAction,
    pub target: ModerationTarget,
    /// Reason as recorded, after defaults were applied.
    pub reason: String,
    /// Guild language, for the caller's confirmation message.
    pub language: String,
    /// Warning count after a `Warn`.
    pub warning_count: Option<u64>,
    /// Number of warnings removed by `ClearWarnings`.
    pub removed_warnings: Option<u64>,
    /// End of the timeout applied by `Mute`.
    pub timeout_until: Option<DateTime<Utc>>,
    /// Whether the target received the direct message.
    pub notified: bool,
    /// Whether an audit entry reached the log channel.
    pub logged: bool,
    pub state: ModerationState,
}
