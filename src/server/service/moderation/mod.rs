//! Moderation pipeline.
//!
//! Every moderation request runs the same sequence:
//!
//! 1. Maintenance gate, then mute duration bounds.
//! 2. Authorization gate.
//! 3. Reason resolution: warnings need an explicit reason, other actions fall back to a
//!    translated default, clearing warnings records `N/A`.
//! 4. Best-effort direct message to the target, sent before the action so a kicked or
//!    banned member can still receive it.
//! 5. The platform action or the ledger mutation. A refused platform action aborts the
//!    request before anything is recorded.
//! 6. Best-effort audit entry.
//!
//! Denials in steps 1 and 2 happen before any side effect. Message purges run the same
//! gates, then delete messages without notifying anyone.

pub mod audit;

#[cfg(test)]
mod test;

use chrono::{DateTime, Duration, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{guild_settings::GuildSettingsRepository, warning::WarningRepository},
    error::{moderation::ModerationError, AppError},
    i18n::Catalog,
    model::{
        actor::Actor,
        moderation::{
            validate_mute_duration, validate_purge_amount, ModerationAction, ModerationOutcome,
            ModerationRequest, ModerationState, ModerationTarget, NO_REASON,
        },
        warning::{CreateWarningParam, Warning},
    },
    service::{
        authorization::AuthorizationService, maintenance::MaintenanceService,
        moderation::audit::AuditService, platform::PlatformClient,
    },
};

/// Effects of step 5 reported back to the caller.
#[derive(Default)]
struct AppliedAction {
    warning_count: Option<u64>,
    removed_warnings: Option<u64>,
    timeout_until: Option<DateTime<Utc>>,
}

pub struct ModerationService<'a> {
    db: &'a DatabaseConnection,
    platform: &'a dyn PlatformClient,
    catalog: &'a Catalog,
    owner_id: u64,
}

impl<'a> ModerationService<'a> {
    /// Creates a new ModerationService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `platform` - Client performing direct messages, member actions and audit posts
    /// - `catalog` - Translations for reasons, direct messages and audit labels
    /// - `owner_id` - Discord ID of the bot owner, who bypasses maintenance mode
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn PlatformClient,
        catalog: &'a Catalog,
        owner_id: u64,
    ) -> Self {
        Self {
            db,
            platform,
            catalog,
            owner_id,
        }
    }

    /// Runs a moderation request through the full pipeline.
    ///
    /// # Returns
    /// - `Ok(ModerationOutcome)` - Action applied; delivery of the direct message and audit
    ///   entry is reported in the outcome
    /// - `Err(AppError::AccessErr(MaintenanceActive))` - Maintenance mode blocks the actor
    /// - `Err(AppError::ModerationErr(InvalidDuration))` - Mute length out of bounds
    /// - `Err(AppError::AccessErr(Forbidden))` - Actor lacks privileges
    /// - `Err(AppError::ModerationErr(EmptyReason))` - Warning without a reason
    /// - `Err(AppError::ModerationErr(ExternalActionFailed))` - Platform refused the action
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn execute(&self, request: ModerationRequest) -> Result<ModerationOutcome, AppError> {
        let ModerationRequest {
            guild_id,
            guild_name,
            actor,
            target,
            action,
            reason,
        } = request;

        let trace = |state: ModerationState| {
            tracing::debug!(
                "{} of user {} in guild {} by {}: {:?}",
                action.label(),
                target.user_id,
                guild_id,
                actor.user_id,
                state
            )
        };

        let mut state = ModerationState::Requested;
        trace(state);

        self.admit(&actor, guild_id, action).await?;
        state = ModerationState::Authorized;
        trace(state);

        let settings = GuildSettingsRepository::new(self.db).get(guild_id).await?;
        let language = settings.language;
        let reason = self.resolve_reason(&language, action, reason)?;

        let timeout_until = match action {
            ModerationAction::Mute { duration_hours } => {
                Some(Utc::now() + Duration::hours(duration_hours))
            }
            _ => None,
        };

        let notified = self
            .notify_target(&language, &guild_name, &target, action, &reason, timeout_until)
            .await;

        let applied = self
            .apply(guild_id, &actor, &target, action, &reason, timeout_until)
            .await
            .inspect_err(|e| {
                tracing::debug!(
                    "{} of user {} in guild {}: {:?} ({})",
                    action.label(),
                    target.user_id,
                    guild_id,
                    ModerationState::Failed,
                    e
                )
            })?;
        state = ModerationState::Applied;
        trace(state);

        let logged = AuditService::new(self.db, self.platform, self.catalog)
            .emit(guild_id, action, &target, actor.user_id, &reason)
            .await;
        if logged {
            state = ModerationState::Logged;
            trace(state);
        }

        tracing::info!(
            "User {} applied {} to user {} in guild {}",
            actor.user_id,
            action.label(),
            target.user_id,
            guild_id
        );
        state = ModerationState::Done;
        trace(state);

        Ok(ModerationOutcome {
            action,
            target,
            reason,
            language,
            warning_count: applied.warning_count,
            removed_warnings: applied.removed_warnings,
            timeout_until: applied.timeout_until,
            notified,
            logged,
            state,
        })
    }

    /// Lists a member's warnings on behalf of an actor.
    ///
    /// A privileged read: it passes the same gates as the mutating actions but has no
    /// side effects and emits no audit entry.
    pub async fn list_warnings(
        &self,
        actor: &Actor,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Vec<Warning>, AppError> {
        MaintenanceService::new(self.db, self.owner_id)
            .check(actor.user_id)
            .await?;
        AuthorizationService::new(self.db)
            .authorize(actor, guild_id)
            .await?;

        WarningRepository::new(self.db).list(guild_id, user_id).await
    }

    /// Deletes the most recent messages of a channel on behalf of an actor.
    ///
    /// Passes the same gates as the member actions, with the amount bounds in place of
    /// the mute duration. Purges touch no member, so they send no direct message and
    /// emit no audit entry.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of messages deleted
    /// - `Err(AppError::AccessErr(MaintenanceActive))` - Maintenance mode blocks the actor
    /// - `Err(AppError::ModerationErr(InvalidAmount))` - Amount outside 1 to 100
    /// - `Err(AppError::AccessErr(Forbidden))` - Actor lacks privileges
    /// - `Err(AppError::ModerationErr(PurgeFailed))` - Platform refused the deletion
    pub async fn purge(
        &self,
        actor: &Actor,
        guild_id: u64,
        channel_id: u64,
        amount: i64,
    ) -> Result<u64, AppError> {
        MaintenanceService::new(self.db, self.owner_id)
            .check(actor.user_id)
            .await?;
        let amount = validate_purge_amount(amount)?;
        AuthorizationService::new(self.db)
            .authorize(actor, guild_id)
            .await?;

        let deleted = self
            .platform
            .purge_messages(channel_id, amount)
            .await
            .map_err(|source| ModerationError::PurgeFailed { channel_id, source })?;

        tracing::info!(
            "User {} deleted {} message(s) in channel {} of guild {}",
            actor.user_id,
            deleted,
            channel_id,
            guild_id
        );

        Ok(deleted)
    }

    /// Steps 1 and 2: maintenance, duration bounds, then authorization.
    async fn admit(
        &self,
        actor: &Actor,
        guild_id: u64,
        action: ModerationAction,
    ) -> Result<(), AppError> {
        let denied = |e: &AppError| {
            tracing::debug!(
                "{} in guild {} by {}: {:?} ({})",
                action.label(),
                guild_id,
                actor.user_id,
                ModerationState::Denied,
                e
            )
        };

        MaintenanceService::new(self.db, self.owner_id)
            .check(actor.user_id)
            .await
            .inspect_err(denied)?;

        if let ModerationAction::Mute { duration_hours } = action {
            validate_mute_duration(duration_hours)?;
        }

        AuthorizationService::new(self.db)
            .authorize(actor, guild_id)
            .await
            .inspect_err(denied)
    }

    fn resolve_reason(
        &self,
        language: &str,
        action: ModerationAction,
        reason: Option<String>,
    ) -> Result<String, ModerationError> {
        let given = reason
            .map(|reason| reason.trim().to_string())
            .filter(|reason| !reason.is_empty());

        match (action, given) {
            (ModerationAction::ClearWarnings, _) => Ok(NO_REASON.to_string()),
            (_, Some(reason)) => Ok(reason),
            (ModerationAction::Warn, None) => Err(ModerationError::EmptyReason),
            (action, None) => Ok(action
                .default_reason_key()
                .map(|key| self.catalog.text(language, key, &[]))
                .unwrap_or_else(|| NO_REASON.to_string())),
        }
    }

    /// Step 4. Failure is logged and reported as `false`.
    async fn notify_target(
        &self,
        language: &str,
        guild_name: &str,
        target: &ModerationTarget,
        action: ModerationAction,
        reason: &str,
        timeout_until: Option<DateTime<Utc>>,
    ) -> bool {
        let Some(key) = action.notice_key() else {
            return false;
        };

        let timestamp = timeout_until
            .map(|until| format!("<t:{}:R>", until.timestamp()))
            .unwrap_or_default();
        let content = self.catalog.text(
            language,
            key,
            &[
                ("guild_name", guild_name),
                ("reason", reason),
                ("timestamp", timestamp.as_str()),
            ],
        );

        match self
            .platform
            .send_direct_message(target.user_id, &content)
            .await
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(
                    "Could not notify user {} about {}: {}",
                    target.user_id,
                    action.label(),
                    e
                );
                false
            }
        }
    }

    /// Step 5.
    async fn apply(
        &self,
        guild_id: u64,
        actor: &Actor,
        target: &ModerationTarget,
        action: ModerationAction,
        reason: &str,
        timeout_until: Option<DateTime<Utc>>,
    ) -> Result<AppliedAction, AppError> {
        let failed = |source| ModerationError::ExternalActionFailed {
            action: action.label(),
            target_id: target.user_id,
            source,
        };

        match action {
            ModerationAction::Kick => {
                self.platform
                    .kick_member(guild_id, target.user_id, reason)
                    .await
                    .map_err(failed)?;
                Ok(AppliedAction::default())
            }
            ModerationAction::Ban => {
                self.platform
                    .ban_member(guild_id, target.user_id, reason)
                    .await
                    .map_err(failed)?;
                Ok(AppliedAction::default())
            }
            ModerationAction::Mute { duration_hours } => {
                let until =
                    timeout_until.unwrap_or_else(|| Utc::now() + Duration::hours(duration_hours));
                self.platform
                    .timeout_member(guild_id, target.user_id, until, reason)
                    .await
                    .map_err(failed)?;
                Ok(AppliedAction {
                    timeout_until: Some(until),
                    ..Default::default()
                })
            }
            ModerationAction::Unmute => {
                self.platform
                    .clear_timeout(guild_id, target.user_id, reason)
                    .await
                    .map_err(failed)?;
                Ok(AppliedAction::default())
            }
            ModerationAction::Warn => {
                let receipt = WarningRepository::new(self.db)
                    .add(CreateWarningParam {
                        guild_id,
                        user_id: target.user_id,
                        moderator_id: actor.user_id,
                        reason: reason.to_string(),
                    })
                    .await?;
                Ok(AppliedAction {
                    warning_count: Some(receipt.count),
                    ..Default::default()
                })
            }
            ModerationAction::ClearWarnings => {
                let removed = WarningRepository::new(self.db)
                    .clear(guild_id, target.user_id)
                    .await?;
                Ok(AppliedAction {
                    removed_warnings: Some(removed),
                    ..Default::default()
                })
            }
        }
    }
}
