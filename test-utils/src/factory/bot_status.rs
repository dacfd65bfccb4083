//! Factory for the single bot status row.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts the bot status row with the given maintenance flag.
pub async fn create_bot_status(
    db: &DatabaseConnection,
    maintenance_mode: bool,
) -> Result<entity::bot_status::Model, DbErr> {
    entity::bot_status::ActiveModel {
        id: ActiveValue::Set(1),
        maintenance_mode: ActiveValue::Set(maintenance_mode),
    }
    .insert(db)
    .await
}
