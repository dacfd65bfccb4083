//! Guild configuration service.
//!
//! Validates settings changes against the loaded languages and the allowed timezones,
//! then applies them as one atomic write. Every write passes the maintenance and
//! authorization gates first.

use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{
    data::guild_settings::GuildSettingsRepository,
    error::{settings::SettingsError, AppError},
    i18n::Catalog,
    model::{
        actor::Actor,
        settings::{GuildSettings, SettingChange, UpdateSettingsParam},
    },
    service::{
        authorization::guard_privileged, maintenance::MaintenanceService,
        platform::PlatformClient,
    },
};

pub struct ConfigurationService<'a> {
    db: &'a DatabaseConnection,
    catalog: &'a Catalog,
    owner_id: u64,
}

impl<'a> ConfigurationService<'a> {
    pub fn new(db: &'a DatabaseConnection, catalog: &'a Catalog, owner_id: u64) -> Self {
        Self {
            db,
            catalog,
            owner_id,
        }
    }

    /// Reads the effective settings of a guild.
    ///
    /// Unprivileged: callers decide whether the requester may see them.
    pub async fn get_settings(&self, guild_id: u64) -> Result<GuildSettings, AppError> {
        GuildSettingsRepository::new(self.db).get(guild_id).await
    }

    /// Reads the settings of a guild on behalf of an actor.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Effective settings
    /// - `Err(AppError::AccessErr)` - Maintenance is on or the actor lacks privileges
    pub async fn view_settings(
        &self,
        actor: &Actor,
        guild_id: u64,
    ) -> Result<GuildSettings, AppError> {
        guard_privileged(self.db, self.owner_id, actor, guild_id).await?;

        self.get_settings(guild_id).await
    }

    /// Applies a batch of settings changes on behalf of an actor.
    ///
    /// The whole batch is validated before anything is written; a single invalid
    /// value rejects the batch.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings after the write
    /// - `Err(AppError::AccessErr(MaintenanceActive))` - Maintenance mode blocks the actor
    /// - `Err(AppError::AccessErr(Forbidden))` - Actor lacks privileges
    /// - `Err(AppError::SettingsErr(InvalidValue))` - Unknown language code
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn update_settings(
        &self,
        actor: &Actor,
        param: UpdateSettingsParam,
    ) -> Result<GuildSettings, AppError> {
        guard_privileged(self.db, self.owner_id, actor, param.guild_id).await?;

        for change in &param.changes {
            self.validate(change)?;
        }

        let settings = GuildSettingsRepository::new(self.db)
            .apply(param.guild_id, &param.changes)
            .await?;

        tracing::info!(
            "User {} updated {} setting(s) of guild {}",
            actor.user_id,
            param.changes.len(),
            param.guild_id
        );

        Ok(settings)
    }

    /// Applies a dashboard settings payload on behalf of a signed-in user.
    ///
    /// The maintenance gate runs before the payload is parsed and before the member's
    /// roles are fetched, so a blocked user costs no platform request.
    ///
    /// # Returns
    /// - `Ok(GuildSettings)` - Settings after the write
    /// - `Err(AppError::AccessErr(MaintenanceActive))` - Maintenance mode blocks the user
    /// - `Err(AppError::SettingsErr)` - Unknown field or invalid value
    /// - `Err(AppError::NotFound)` - The user is not a member of the guild
    pub async fn update_from_dashboard(
        &self,
        platform: &dyn PlatformClient,
        user_id: u64,
        guild_id: u64,
        payload: &Map<String, Value>,
    ) -> Result<GuildSettings, AppError> {
        MaintenanceService::new(self.db, self.owner_id)
            .check(user_id)
            .await?;

        let param = UpdateSettingsParam::from_dto(guild_id, payload)?;
        let actor = platform.resolve_actor(guild_id, user_id).await?;

        self.update_settings(&actor, param).await
    }

    fn validate(&self, change: &SettingChange) -> Result<(), SettingsError> {
        match change {
            SettingChange::Language(code) if !self.catalog.supports(code) => {
                Err(SettingsError::InvalidValue {
                    field: change.field().as_str().to_string(),
                    value: code.clone(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        data::bot_status::BotStatusRepository,
        error::access::AccessError,
        service::platform::fake::{PlatformCall, RecordingPlatform},
    };
    use serde_json::json;
    use test_utils::{builder::TestBuilder, factory};

    const OWNER_ID: u64 = 1000;
    const GUILD_ID: u64 = 1;

    fn admin() -> Actor {
        Actor::new(10, true, vec![])
    }

    /// Tests a batch applied by an administrator.
    ///
    /// Expected: Ok with every change visible in a subsequent read
    #[tokio::test]
    async fn applies_batch() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;

        let service = ConfigurationService::new(db, &catalog, OWNER_ID);
        service
            .update_settings(
                &admin(),
                UpdateSettingsParam {
                    guild_id: GUILD_ID,
                    changes: vec![
                        SettingChange::Language("en".to_string()),
                        SettingChange::StaffRoleId(Some(200)),
                    ],
                },
            )
            .await?;

        let settings = service.get_settings(GUILD_ID).await?;
        assert_eq!(settings.language, "en");
        assert_eq!(settings.staff_role_id, Some(200));

        Ok(())
    }

    /// Tests that an unknown language rejects the whole batch.
    ///
    /// Expected: Err(InvalidValue) and the staff role in the same batch not written
    #[tokio::test]
    async fn unknown_language_rejects_batch() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;

        let service = ConfigurationService::new(db, &catalog, OWNER_ID);
        let result = service
            .update_settings(
                &admin(),
                UpdateSettingsParam {
                    guild_id: GUILD_ID,
                    changes: vec![
                        SettingChange::StaffRoleId(Some(200)),
                        SettingChange::Language("xx".to_string()),
                    ],
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::SettingsErr(SettingsError::InvalidValue { .. }))
        ));
        assert_eq!(
            service.get_settings(GUILD_ID).await?,
            GuildSettings::defaults(GUILD_ID)
        );

        Ok(())
    }

    /// Tests that members without privileges cannot change settings.
    ///
    /// Expected: Err(Forbidden) and nothing written
    #[tokio::test]
    async fn forbids_unprivileged_member() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;

        let service = ConfigurationService::new(db, &catalog, OWNER_ID);
        let result = service
            .update_settings(
                &Actor::new(10, false, vec![200]),
                UpdateSettingsParam {
                    guild_id: GUILD_ID,
                    changes: vec![SettingChange::StaffRoleId(Some(200))],
                },
            )
            .await;

        assert!(matches!(
            result,
            Err(AppError::AccessErr(AccessError::Forbidden { .. }))
        ));
        assert!(service.get_settings(GUILD_ID).await?.staff_role_id.is_none());

        Ok(())
    }

    /// Tests that a staff member may change settings once the role is configured.
    ///
    /// Expected: Ok with the timezone changed
    #[tokio::test]
    async fn staff_member_may_configure() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;

        factory::guild_settings::GuildSettingsFactory::new(db, GUILD_ID)
            .staff_role_id(Some(200))
            .build()
            .await?;

        let settings = ConfigurationService::new(db, &catalog, OWNER_ID)
            .update_settings(
                &Actor::new(10, false, vec![200]),
                UpdateSettingsParam {
                    guild_id: GUILD_ID,
                    changes: vec![SettingChange::Timezone("America/New_York".to_string())],
                },
            )
            .await?;

        assert_eq!(settings.timezone, "America/New_York");

        Ok(())
    }

    /// Tests that maintenance blocks configuration for administrators.
    ///
    /// Expected: Err(MaintenanceActive) for an administrator, Ok for the owner
    #[tokio::test]
    async fn maintenance_blocks_configuration() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;

        BotStatusRepository::new(db).set_maintenance(true).await?;

        let service = ConfigurationService::new(db, &catalog, OWNER_ID);
        let param = UpdateSettingsParam {
            guild_id: GUILD_ID,
            changes: vec![SettingChange::Language("en".to_string())],
        };

        let result = service.update_settings(&admin(), param.clone()).await;
        assert!(matches!(
            result,
            Err(AppError::AccessErr(AccessError::MaintenanceActive))
        ));
        assert_eq!(service.get_settings(GUILD_ID).await?.language, "it");

        let owner = Actor::new(OWNER_ID, true, vec![]);
        service.update_settings(&owner, param).await?;
        assert_eq!(service.get_settings(GUILD_ID).await?.language, "en");

        Ok(())
    }

    /// Tests viewing settings without privileges.
    ///
    /// Expected: Err(Forbidden)
    #[tokio::test]
    async fn view_requires_privileges() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;

        let service = ConfigurationService::new(db, &catalog, OWNER_ID);
        let result = service
            .view_settings(&Actor::new(10, false, vec![]), GUILD_ID)
            .await;

        assert!(matches!(
            result,
            Err(AppError::AccessErr(AccessError::Forbidden { .. }))
        ));
        assert_eq!(
            service.view_settings(&admin(), GUILD_ID).await?,
            GuildSettings::defaults(GUILD_ID)
        );

        Ok(())
    }

    /// Tests that maintenance turns a dashboard payload away before it is parsed.
    ///
    /// Expected: Err(MaintenanceActive) for an unknown field, with no member lookup
    #[tokio::test]
    async fn dashboard_maintenance_precedes_parsing() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;
        let platform = RecordingPlatform::new();

        BotStatusRepository::new(db).set_maintenance(true).await?;

        let payload = json!({ "bogus": 1 });
        let result = ConfigurationService::new(db, &catalog, OWNER_ID)
            .update_from_dashboard(&platform, 10, GUILD_ID, payload.as_object().unwrap())
            .await;

        assert!(matches!(
            result,
            Err(AppError::AccessErr(AccessError::MaintenanceActive))
        ));
        assert!(platform.calls().is_empty());

        Ok(())
    }

    /// Tests a dashboard payload from a guild administrator.
    ///
    /// Expected: Ok with one member lookup and the language written
    #[tokio::test]
    async fn dashboard_update_resolves_member() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;
        let platform = RecordingPlatform::new();

        let payload = json!({ "language": "en" });
        let settings = ConfigurationService::new(db, &catalog, OWNER_ID)
            .update_from_dashboard(&platform, 10, GUILD_ID, payload.as_object().unwrap())
            .await?;

        assert_eq!(settings.language, "en");
        assert_eq!(
            platform.calls(),
            vec![PlatformCall::ResolveActor {
                guild_id: GUILD_ID,
                user_id: 10
            }]
        );

        Ok(())
    }

    /// Tests that an invalid payload is rejected before the member lookup.
    ///
    /// Expected: Err(SettingsErr) with no platform call
    #[tokio::test]
    async fn dashboard_rejects_unknown_field() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_moderation_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let catalog = Catalog::embedded()?;
        let platform = RecordingPlatform::new();

        let payload = json!({ "bogus": 1 });
        let result = ConfigurationService::new(db, &catalog, OWNER_ID)
            .update_from_dashboard(&platform, 10, GUILD_ID, payload.as_object().unwrap())
            .await;

        assert!(matches!(result, Err(AppError::SettingsErr(_))));
        assert!(platform.calls().is_empty());

        Ok(())
    }
}
