//! Authorization gate for privileged guild operations.
//!
//! An actor may moderate and configure a guild if they hold the platform's
//! administrator permission there, or if they hold the guild's configured staff role.
//! A guild without a staff role is administrators-only.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    error::{access::AccessError, AppError},
    model::actor::Actor,
    service::maintenance::MaintenanceService,
};

pub struct AuthorizationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorizationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Decides whether the actor may perform privileged operations in the guild.
    ///
    /// # Returns
    /// - `Ok(true)` - Actor is an administrator or holds the staff role
    /// - `Ok(false)` - Actor lacks both
    /// - `Err(AppError::DbErr)` - Failed to read the guild settings
    pub async fn is_authorized(&self, actor: &Actor, guild_id: u64) -> Result<bool, AppError> {
        if actor.is_administrator {
            return Ok(true);
        }

        let settings = GuildSettingsRepository::new(self.db).get(guild_id).await?;

        Ok(settings
            .staff_role_id
            .is_some_and(|role_id| actor.has_role(role_id)))
    }

    /// Like `is_authorized`, but denial is an error.
    ///
    /// # Returns
    /// - `Ok(())` - Actor is authorized
    /// - `Err(AppError::AccessErr(Forbidden))` - Actor is not authorized
    /// - `Err(AppError::DbErr)` - Failed to read the guild settings
    pub async fn authorize(&self, actor: &Actor, guild_id: u64) -> Result<(), AppError> {
        if self.is_authorized(actor, guild_id).await? {
            return Ok(());
        }

        tracing::debug!(
            "User {} denied privileged access to guild {}",
            actor.user_id,
            guild_id
        );

        Err(AccessError::Forbidden {
            user_id: actor.user_id,
            guild_id,
        }
        .into())
    }
}

/// Runs the maintenance gate then the authorization gate.
///
/// Called at the top of every privileged pipeline, before any side effect.
pub async fn guard_privileged(
    db: &DatabaseConnection,
    owner_id: u64,
    actor: &Actor,
    guild_id: u64,
) -> Result<(), AppError> {
    MaintenanceService::new(db, owner_id)
        .check(actor.user_id)
        .await?;
    AuthorizationService::new(db).authorize(actor, guild_id).await
}
