pub use sea_orm_migration::prelude::*;

mod m20251001_000001_create_guild_settings_table;
mod m20251001_000002_create_warnings_table;
mod m20251001_000003_create_bot_status_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251001_000001_create_guild_settings_table::Migration),
            Box::new(m20251001_000002_create_warnings_table::Migration),
            Box::new(m20251001_000003_create_bot_status_table::Migration),
        ]
    }
}
