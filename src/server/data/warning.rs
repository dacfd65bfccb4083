//! Warning ledger data repository.
//!
//! The ledger is append-only apart from bulk clearing per (guild, user). Appending and
//! counting run in one transaction so the returned count always includes the new
//! record, even with another process appending at the same time.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    error::{moderation::ModerationError, AppError},
    model::warning::{CreateWarningParam, Warning, WarningReceipt},
};

pub struct WarningRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WarningRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends a warning and returns it with the user's updated count.
    ///
    /// # Arguments
    /// - `param` - Guild, target user, moderator and reason of the warning
    ///
    /// # Returns
    /// - `Ok(WarningReceipt)` - Stored warning and the count including it
    /// - `Err(AppError::ModerationErr(EmptyReason))` - Reason is blank; nothing written
    /// - `Err(AppError::DbErr)` - Database error; the transaction is rolled back
    pub async fn add(&self, param: CreateWarningParam) -> Result<WarningReceipt, AppError> {
        if param.reason.trim().is_empty() {
            return Err(ModerationError::EmptyReason.into());
        }

        let guild_id = param.guild_id.to_string();
        let user_id = param.user_id.to_string();

        let txn = self.db.begin().await?;

        let entity = entity::warning::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.clone()),
            user_id: ActiveValue::Set(user_id.clone()),
            moderator_id: ActiveValue::Set(param.moderator_id.to_string()),
            reason: ActiveValue::Set(param.reason),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let count = entity::prelude::Warning::find()
            .filter(entity::warning::Column::GuildId.eq(guild_id))
            .filter(entity::warning::Column::UserId.eq(user_id))
            .count(&txn)
            .await?;

        txn.commit().await?;

        Ok(WarningReceipt {
            warning: Warning::from_entity(entity)?,
            count,
        })
    }

    /// Lists a user's warnings in a guild, oldest first.
    ///
    /// Warnings created within the same instant are ordered by ID.
    pub async fn list(&self, guild_id: u64, user_id: u64) -> Result<Vec<Warning>, AppError> {
        let entities = entity::prelude::Warning::find()
            .filter(entity::warning::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::warning::Column::UserId.eq(user_id.to_string()))
            .order_by_asc(entity::warning::Column::CreatedAt)
            .order_by_asc(entity::warning::Column::WarnId)
            .all(self.db)
            .await?;

        entities.into_iter().map(Warning::from_entity).collect()
    }

    /// Counts a user's warnings in a guild.
    pub async fn count(&self, guild_id: u64, user_id: u64) -> Result<u64, AppError> {
        let count = entity::prelude::Warning::find()
            .filter(entity::warning::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::warning::Column::UserId.eq(user_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count)
    }

    /// Removes every warning of a user in a guild.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of warnings removed, 0 if there were none
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn clear(&self, guild_id: u64, user_id: u64) -> Result<u64, AppError> {
        let result = entity::prelude::Warning::delete_many()
            .filter(entity::warning::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::warning::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
