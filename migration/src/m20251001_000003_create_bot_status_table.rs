use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // The singleton row itself is created at startup by `BotStatusRepository::ensure_exists`
        manager
            .create_table(
                Table::create()
                    .table(BotStatus::Table)
                    .if_not_exists()
                    .col(integer(BotStatus::Id).primary_key())
                    .col(boolean(BotStatus::MaintenanceMode).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BotStatus::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BotStatus {
    Table,
    Id,
    MaintenanceMode,
}
