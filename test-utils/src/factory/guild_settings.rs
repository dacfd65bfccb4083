//! Factory for creating guild settings rows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Builder for `guild_settings` rows.
///
/// Defaults mirror the application defaults: Italian, UTC, no log channel and no
/// staff role.
pub struct GuildSettingsFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    language: String,
    log_channel_id: Option<u64>,
    staff_role_id: Option<u64>,
    timezone: String,
}

impl<'a> GuildSettingsFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: u64) -> Self {
        Self {
            db,
            guild_id,
            language: "it".to_string(),
            log_channel_id: None,
            staff_role_id: None,
            timezone: "UTC".to_string(),
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn log_channel_id(mut self, channel_id: Option<u64>) -> Self {
        self.log_channel_id = channel_id;
        self
    }

    pub fn staff_role_id(mut self, role_id: Option<u64>) -> Self {
        self.staff_role_id = role_id;
        self
    }

    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = timezone.into();
        self
    }

    pub async fn build(self) -> Result<entity::guild_settings::Model, DbErr> {
        entity::guild_settings::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            language: ActiveValue::Set(self.language),
            log_channel_id: ActiveValue::Set(self.log_channel_id.map(|id| id.to_string())),
            staff_role_id: ActiveValue::Set(self.staff_role_id.map(|id| id.to_string())),
            timezone: ActiveValue::Set(self.timezone),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a settings row with default values for the given guild.
pub async fn create_guild_settings(
    db: &DatabaseConnection,
    guild_id: u64,
) -> Result<entity::guild_settings::Model, DbErr> {
    GuildSettingsFactory::new(db, guild_id).build().await
}
