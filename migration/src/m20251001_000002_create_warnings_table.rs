use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Warnings::Table)
                    .if_not_exists()
                    .col(pk_auto(Warnings::WarnId))
                    .col(string(Warnings::GuildId))
                    .col(string(Warnings::UserId))
                    .col(string(Warnings::ModeratorId))
                    .col(text(Warnings::Reason))
                    .col(timestamp(Warnings::CreatedAt))
                    .to_owned(),
            )
            .await?;

        // Every ledger query filters on the guild + user pair
        manager
            .create_index(
                Index::create()
                    .name("idx_warnings_guild_id_user_id")
                    .table(Warnings::Table)
                    .col(Warnings::GuildId)
                    .col(Warnings::UserId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_warnings_guild_id_user_id")
                    .table(Warnings::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Warnings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Warnings {
    Table,
    WarnId,
    GuildId,
    UserId,
    ModeratorId,
    Reason,
    CreatedAt,
}
