//! Audit emission for completed moderation actions.
//!
//! Audit entries are best effort: the action already happened by the time an entry is
//! emitted, so a guild without a log channel, an unreadable settings row or a channel
//! the bot cannot post in only produces a log line.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    i18n::Catalog,
    model::{
        audit::{AuditEntry, AuditLabels},
        moderation::{ModerationAction, ModerationTarget},
    },
    service::platform::PlatformClient,
};

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn PlatformClient,
    catalog: &'a Catalog,
}

impl<'a> AuditService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn PlatformClient,
        catalog: &'a Catalog,
    ) -> Self {
        Self {
            db,
            platform,
            catalog,
        }
    }

    /// Posts an audit entry to the guild's log channel in the guild's language.
    ///
    /// # Returns
    /// - `true` - The entry reached the log channel
    /// - `false` - No log channel is configured or posting failed
    pub async fn emit(
        &self,
        guild_id: u64,
        action: ModerationAction,
        target: &ModerationTarget,
        moderator_id: u64,
        reason: &str,
    ) -> bool {
        let settings = match GuildSettingsRepository::new(self.db).get(guild_id).await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    "Failed to read settings of guild {} for {} audit entry: {}",
                    guild_id,
                    action.label(),
                    e
                );
                return false;
            }
        };

        let Some(channel_id) = settings.log_channel_id else {
            tracing::debug!(
                "No log channel configured for guild {}, dropping {} audit entry",
                guild_id,
                action.label()
            );
            return false;
        };

        let language = settings.language.as_str();
        let text = |key: &str| self.catalog.text(language, key, &[]);
        let entry = AuditEntry {
            labels: AuditLabels {
                title: text("log_title"),
                action: text("log_action"),
                user: text("log_user"),
                moderator: text("log_moderator"),
                reason: text("log_reason"),
            },
            action: text(action.audit_label_key()),
            target_id: target.user_id,
            target_name: target.display_name.clone(),
            moderator_id,
            reason: reason.to_string(),
            timestamp: Utc::now(),
        };

        match self.platform.send_audit_entry(channel_id, &entry).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Failed to post {} audit entry to channel {} of guild {}: {}",
                    action.label(),
                    channel_id,
                    guild_id,
                    e
                );
                false
            }
        }
    }
}
