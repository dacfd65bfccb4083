//! Bot status data repository.
//!
//! The status table holds exactly one row with ID 1. It is created at startup by
//! `ensure_exists`; the toggle also recreates it if it went missing so the flip is
//! never silently lost.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};

use crate::server::model::bot_status::BotStatus;

const STATUS_ROW_ID: i32 = 1;

pub struct BotStatusRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BotStatusRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates the status row with maintenance off unless it already exists.
    ///
    /// Safe to call from both processes at startup.
    pub async fn ensure_exists(&self) -> Result<(), DbErr> {
        insert_status_row(self.db).await
    }

    /// Reads the current status.
    ///
    /// # Returns
    /// - `Ok(BotStatus)` - Current status; maintenance off if the row is missing
    /// - `Err(DbErr)` - Database error during query
    pub async fn get(&self) -> Result<BotStatus, DbErr> {
        let entity = entity::prelude::BotStatus::find_by_id(STATUS_ROW_ID)
            .one(self.db)
            .await?;

        Ok(entity.map(BotStatus::from_entity).unwrap_or_default())
    }

    /// Sets maintenance mode to an explicit value.
    pub async fn set_maintenance(&self, enabled: bool) -> Result<BotStatus, DbErr> {
        let entity = entity::prelude::BotStatus::insert(entity::bot_status::ActiveModel {
            id: ActiveValue::Set(STATUS_ROW_ID),
            maintenance_mode: ActiveValue::Set(enabled),
        })
        .on_conflict(
            OnConflict::column(entity::bot_status::Column::Id)
                .update_column(entity::bot_status::Column::MaintenanceMode)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(BotStatus::from_entity(entity))
    }

    /// Flips maintenance mode and returns the new value.
    ///
    /// The flip is a single `UPDATE ... SET maintenance_mode = NOT maintenance_mode`
    /// read back inside the same transaction, so two concurrent toggles always
    /// cancel out.
    pub async fn toggle(&self) -> Result<BotStatus, DbErr> {
        let txn = self.db.begin().await?;

        insert_status_row(&txn).await?;

        entity::prelude::BotStatus::update_many()
            .col_expr(
                entity::bot_status::Column::MaintenanceMode,
                Expr::cust("NOT maintenance_mode"),
            )
            .filter(entity::bot_status::Column::Id.eq(STATUS_ROW_ID))
            .exec(&txn)
            .await?;

        let entity = entity::prelude::BotStatus::find_by_id(STATUS_ROW_ID)
            .one(&txn)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound("bot_status".to_string()))?;

        txn.commit().await?;

        Ok(BotStatus::from_entity(entity))
    }
}

async fn insert_status_row<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    entity::prelude::BotStatus::insert(entity::bot_status::ActiveModel {
        id: ActiveValue::Set(STATUS_ROW_ID),
        maintenance_mode: ActiveValue::Set(false),
    })
    .on_conflict(
        OnConflict::column(entity::bot_status::Column::Id)
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(db)
    .await?;

    Ok(())
}
