//! Factory for creating warning ledger rows.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Builder for `warnings` rows.
pub struct WarningFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    moderator_id: u64,
    reason: String,
    created_at: DateTime<Utc>,
}

impl<'a> WarningFactory<'a> {
    /// Creates a factory for a warning against `user_id` in `guild_id`.
    ///
    /// The moderator defaults to a fresh ID and the timestamp to now.
    pub fn new(db: &'a DatabaseConnection, guild_id: u64, user_id: u64) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id,
            user_id,
            moderator_id: 900_000 + id,
            reason: format!("Test warning {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn moderator_id(mut self, moderator_id: u64) -> Self {
        self.moderator_id = moderator_id;
        self
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::warning::Model, DbErr> {
        entity::warning::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            user_id: ActiveValue::Set(self.user_id.to_string()),
            moderator_id: ActiveValue::Set(self.moderator_id.to_string()),
            reason: ActiveValue::Set(self.reason),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a warning with default values.
pub async fn create_warning(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
) -> Result<entity::warning::Model, DbErr> {
    WarningFactory::new(db, guild_id, user_id).build().await
}

/// Creates `count` warnings for the same member.
pub async fn create_warnings(
    db: &DatabaseConnection,
    guild_id: u64,
    user_id: u64,
    count: usize,
) -> Result<Vec<entity::warning::Model>, DbErr> {
    let mut warnings = Vec::with_capacity(count);
    for _ in 0..count {
        warnings.push(create_warning(db, guild_id, user_id).await?);
    }
    Ok(warnings)
}
