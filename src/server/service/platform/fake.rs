//! Recording platform client for tests.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serenity::async_trait;

use crate::server::{
    error::platform::PlatformError,
    model::{actor::Actor, audit::AuditEntry},
    service::platform::PlatformClient,
};

/// A platform call as observed by `RecordingPlatform`.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    ResolveActor { guild_id: u64, user_id: u64 },
    DirectMessage { user_id: u64, content: String },
    Kick { guild_id: u64, user_id: u64, reason: String },
    Ban { guild_id: u64, user_id: u64, reason: String },
    Timeout { guild_id: u64, user_id: u64, until: DateTime<Utc>, reason: String },
    ClearTimeout { guild_id: u64, user_id: u64, reason: String },
    Purge { channel_id: u64, amount: u8 },
    Audit { channel_id: u64, entry: AuditEntry },
}

/// Platform client that records every call and fails on demand.
#[derive(Default)]
pub struct RecordingPlatform {
    calls: Mutex<Vec<PlatformCall>>,
    /// Direct messages fail as if the user blocked them.
    fail_direct_messages: bool,
    /// Kicks, bans, timeouts and purges fail as if the bot lacked permissions.
    fail_actions: bool,
    /// Audit posts fail as if the log channel was deleted.
    fail_audit: bool,
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_direct_messages() -> Self {
        Self {
            fail_direct_messages: true,
            ..Self::default()
        }
    }

    pub fn failing_actions() -> Self {
        Self {
            fail_actions: true,
            ..Self::default()
        }
    }

    pub fn failing_audit() -> Self {
        Self {
            fail_audit: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn direct_messages(&self) -> Vec<(u64, String)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::DirectMessage { user_id, content } => Some((user_id, content)),
                _ => None,
            })
            .collect()
    }

    pub fn audit_entries(&self) -> Vec<(u64, AuditEntry)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::Audit { channel_id, entry } => Some((channel_id, entry)),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: PlatformCall) {
        self.calls.lock().unwrap().push(call);
    }

    fn action_result(&self) -> Result<(), PlatformError> {
        if self.fail_actions {
            Err(PlatformError::Rejected("Missing Permissions".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PlatformClient for RecordingPlatform {
    /// Every resolved member is a guild administrator without roles.
    async fn resolve_actor(&self, guild_id: u64, user_id: u64) -> Result<Actor, PlatformError> {
        self.record(PlatformCall::ResolveActor { guild_id, user_id });
        Ok(Actor::new(user_id, true, vec![]))
    }

    async fn send_direct_message(&self, user_id: u64, content: &str) -> Result<(), PlatformError> {
        if self.fail_direct_messages {
            return Err(PlatformError::Unreachable(
                "Cannot send messages to this user".to_string(),
            ));
        }
        self.record(PlatformCall::DirectMessage {
            user_id,
            content: content.to_string(),
        });
        Ok(())
    }

    async fn kick_member(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<(), PlatformError> {
        self.action_result()?;
        self.record(PlatformCall::Kick {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn ban_member(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<(), PlatformError> {
        self.action_result()?;
        self.record(PlatformCall::Ban {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn timeout_member(
        &self,
        guild_id: u64,
        user_id: u64,
        until: DateTime<Utc>,
        reason: &str,
    ) -> Result<(), PlatformError> {
        self.action_result()?;
        self.record(PlatformCall::Timeout {
            guild_id,
            user_id,
            until,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn clear_timeout(
        &self,
        guild_id: u64,
        user_id: u64,
        reason: &str,
    ) -> Result<(), PlatformError> {
        self.action_result()?;
        self.record(PlatformCall::ClearTimeout {
            guild_id,
            user_id,
            reason: reason.to_string(),
        });
        Ok(())
    }

    async fn purge_messages(&self, channel_id: u64, amount: u8) -> Result<u64, PlatformError> {
        self.action_result()?;
        self.record(PlatformCall::Purge { channel_id, amount });
        Ok(u64::from(amount))
    }

    async fn send_audit_entry(
        &self,
        channel_id: u64,
        entry: &AuditEntry,
    ) -> Result<(), PlatformError> {
        if self.fail_audit {
            return Err(PlatformError::Unreachable("Unknown Channel".to_string()));
        }
        self.record(PlatformCall::Audit {
            channel_id,
            entry: entry.clone(),
        });
        Ok(())
    }
}
