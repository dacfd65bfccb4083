//! Maintenance gate.
//!
//! While maintenance mode is on, every privileged operation from anyone but the bot
//! owner is refused. The flag is read from the store on every check so a toggle made
//! by the dashboard process takes effect in the bot process immediately.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::bot_status::BotStatusRepository,
    error::{access::AccessError, AppError},
    model::bot_status::BotStatus,
};

pub struct MaintenanceService<'a> {
    db: &'a DatabaseConnection,
    owner_id: u64,
}

impl<'a> MaintenanceService<'a> {
    /// Creates a new MaintenanceService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `owner_id` - Discord ID of the bot owner, who bypasses maintenance mode
    pub fn new(db: &'a DatabaseConnection, owner_id: u64) -> Self {
        Self { db, owner_id }
    }

    pub fn is_owner(&self, user_id: u64) -> bool {
        user_id == self.owner_id
    }

    /// Refuses the operation if maintenance mode is on and the actor is not the owner.
    ///
    /// # Returns
    /// - `Ok(())` - The operation may proceed
    /// - `Err(AppError::AccessErr(MaintenanceActive))` - Maintenance mode blocks the actor
    /// - `Err(AppError::DbErr)` - Failed to read the status
    pub async fn check(&self, actor_id: u64) -> Result<(), AppError> {
        let status = BotStatusRepository::new(self.db).get().await?;

        if status.maintenance_mode && !self.is_owner(actor_id) {
            tracing::debug!("Refusing user {} during maintenance", actor_id);
            return Err(AccessError::MaintenanceActive.into());
        }

        Ok(())
    }

    pub async fn status(&self) -> Result<BotStatus, AppError> {
        Ok(BotStatusRepository::new(self.db).get().await?)
    }

    /// Flips maintenance mode on behalf of the owner.
    ///
    /// # Returns
    /// - `Ok(BotStatus)` - Status after the flip
    /// - `Err(AppError::AccessErr(NotOwner))` - Caller is not the bot owner
    /// - `Err(AppError::DbErr)` - Failed to update the status
    pub async fn toggle(&self, actor_id: u64) -> Result<BotStatus, AppError> {
        if !self.is_owner(actor_id) {
            return Err(AccessError::NotOwner(actor_id).into());
        }

        let status = BotStatusRepository::new(self.db).toggle().await?;

        tracing::info!(
            "Maintenance mode {} by owner",
            if status.maintenance_mode { "enabled" } else { "disabled" }
        );

        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::builder::TestBuilder;

    const OWNER_ID: u64 = 1000;

    /// Tests that nothing is blocked outside maintenance.
    ///
    /// Expected: Ok for a regular user
    #[tokio::test]
    async fn allows_everyone_when_off() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        MaintenanceService::new(db, OWNER_ID).check(42).await?;

        Ok(())
    }

    /// Tests that maintenance blocks everyone but the owner.
    ///
    /// Expected: Err(MaintenanceActive) for a regular user, Ok for the owner
    #[tokio::test]
    async fn blocks_non_owner_when_on() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        BotStatusRepository::new(db).set_maintenance(true).await?;

        let service = MaintenanceService::new(db, OWNER_ID);
        let result = service.check(42).await;

        assert!(matches!(
            result,
            Err(AppError::AccessErr(AccessError::MaintenanceActive))
        ));
        service.check(OWNER_ID).await?;

        Ok(())
    }

    /// Tests that only the owner may toggle.
    ///
    /// Expected: Err(NotOwner) and the flag unchanged
    #[tokio::test]
    async fn toggle_requires_owner() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = MaintenanceService::new(db, OWNER_ID);
        let result = service.toggle(42).await;

        assert!(matches!(
            result,
            Err(AppError::AccessErr(AccessError::NotOwner(42)))
        ));
        assert!(!service.status().await?.maintenance_mode);

        Ok(())
    }

    /// Tests that toggling twice restores the original state.
    ///
    /// Expected: Ok with maintenance on after one toggle and off after two
    #[tokio::test]
    async fn owner_toggles_twice() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let service = MaintenanceService::new(db, OWNER_ID);

        assert!(service.toggle(OWNER_ID).await?.maintenance_mode);
        assert!(!service.toggle(OWNER_ID).await?.maintenance_mode);
        assert!(!service.status().await?.maintenance_mode);

        Ok(())
    }
}
