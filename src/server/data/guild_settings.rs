//! Guild settings data repository.
//!
//! Reads always succeed for any guild: a missing row yields the defaults. Writes are
//! single `INSERT ... ON CONFLICT DO UPDATE` statements that touch only the columns
//! named in the change set, so concurrent writers editing different fields of the same
//! guild never overwrite each other with stale values.

use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait};
use serde_json::Value;

use crate::server::{
    error::AppError,
    model::settings::{
        GuildSettings, SettingChange, DEFAULT_LANGUAGE, DEFAULT_TIMEZONE,
    },
};

pub struct GuildSettingsRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildSettingsRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the effective settings of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Stored settings, or the defaults if the guild has no row
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        let entity = entity::prelude::GuildSettings::find_by_id(guild_id.to_string())
            .one(self.db)
            .await?;

        match entity {
            Some(entity) => GuildSettings::from_entity(entity),
            None => Ok(GuildSettings::defaults(guild_id)),
        }
    }

    /// Writes a single field given by name.
    ///
    /// The field name must be on the settings allow-list; the value is checked for
    /// shape before anything is written.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings after the write
    /// - `Err(AppError::SettingsErr(InvalidField))` - Field is not writable
    /// - `Err(AppError::SettingsErr(InvalidValue))` - Value has the wrong shape
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn upsert_field(
        &self,
        guild_id: u64,
        field: &str,
        value: &Value,
    ) -> Result<GuildSettings, AppError> {
        let change = SettingChange::parse(field, value)?;

        self.apply(guild_id, &[change]).await
    }

    /// Applies a batch of changes atomically.
    ///
    /// Creates the row with defaults for unspecified columns when the guild has none;
    /// otherwise only the changed columns are updated. An empty batch writes nothing.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings after the write
    /// - `Err(AppError::DbErr)` - Database error during upsert; nothing was written
    pub async fn apply(
        &self,
        guild_id: u64,
        changes: &[SettingChange],
    ) -> Result<GuildSettings, AppError> {
        if changes.is_empty() {
            return self.get(guild_id).await;
        }

        let mut model = entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            language: ActiveValue::Set(DEFAULT_LANGUAGE.to_string()),
            log_channel_id: ActiveValue::Set(None),
            staff_role_id: ActiveValue::Set(None),
            timezone: ActiveValue::Set(DEFAULT_TIMEZONE.to_string()),
        };
        let mut update_columns = Vec::with_capacity(changes.len());

        for change in changes {
            match change {
                SettingChange::Language(language) => {
                    model.language = ActiveValue::Set(language.clone());
                    update_columns.push(entity::guild_settings::Column::Language);
                }
                SettingChange::LogChannelId(channel_id) => {
                    model.log_channel_id = ActiveValue::Set(channel_id.map(|id| id.to_string()));
                    update_columns.push(entity::guild_settings::Column::LogChannelId);
                }
                SettingChange::StaffRoleId(role_id) => {
                    model.staff_role_id = ActiveValue::Set(role_id.map(|id| id.to_string()));
                    update_columns.push(entity::guild_settings::Column::StaffRoleId);
                }
                SettingChange::Timezone(timezone) => {
                    model.timezone = ActiveValue::Set(timezone.clone());
                    update_columns.push(entity::guild_settings::Column::Timezone);
                }
            }
        }

        let entity = entity::prelude::GuildSettings::insert(model)
            .on_conflict(
                OnConflict::column(entity::guild_settings::Column::GuildId)
                    .update_columns(update_columns)
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?;

        tracing::debug!(
            "Applied {} settings change(s) for guild {}",
            changes.len(),
            guild_id
        );

        GuildSettings::from_entity(entity)
    }
}
