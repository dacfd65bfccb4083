use chrono::{DateTime, Utc};

/// Translated field labels of an audit entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditLabels {
    pub title: String,
    pub action: String,
    pub user: String,
    pub moderator: String,
    pub reason: String,
}

/// Audit record posted to a guild's log channel after a moderation action.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub labels: AuditLabels,
    /// Translated name of the action, e.g. "Kick".
    pub action: String,
    pub target_id: u64,
    pub target_name: String,
    pub moderator_id: u64,
    pub reason: String,
    pub timestamp: DateTime<Utc>,
}
