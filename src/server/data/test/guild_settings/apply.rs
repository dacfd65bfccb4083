use super::*;

/// Tests that a batch only updates the columns it names.
///
/// Verifies that existing values of unchanged columns survive the write.
///
/// Expected: Ok with timezone and log channel changed, language and staff role kept
#[tokio::test]
async fn updates_only_changed_columns() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, 1)
        .language("en")
        .staff_role_id(Some(200))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .apply(
            1,
            &[
                SettingChange::Timezone("Europe/Paris".to_string()),
                SettingChange::LogChannelId(Some(300)),
            ],
        )
        .await?;

    assert_eq!(settings.language, "en");
    assert_eq!(settings.staff_role_id, Some(200));
    assert_eq!(settings.timezone, "Europe/Paris");
    assert_eq!(settings.log_channel_id, Some(300));

    Ok(())
}

/// Tests unsetting optional fields.
///
/// Expected: Ok with log channel and staff role cleared
#[tokio::test]
async fn clears_optional_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, 1)
        .log_channel_id(Some(300))
        .staff_role_id(Some(200))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let settings = repo
        .apply(
            1,
            &[
                SettingChange::LogChannelId(None),
                SettingChange::StaffRoleId(None),
            ],
        )
        .await?;

    assert!(settings.log_channel_id.is_none());
    assert!(settings.staff_role_id.is_none());

    Ok(())
}

/// Tests that an empty batch writes nothing.
///
/// Expected: Ok with defaults and no row created
#[tokio::test]
async fn empty_batch_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let settings = GuildSettingsRepository::new(db).apply(1, &[]).await?;

    assert_eq!(settings, GuildSettings::defaults(1));
    let rows = entity::prelude::GuildSettings::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests two writers changing different fields of the same guild.
///
/// Verifies that neither write overwrites the other's field with a stale value.
///
/// Expected: Ok with both changes present
#[tokio::test]
async fn concurrent_writes_to_different_fields_both_persist() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let language = [SettingChange::Language("en".to_string())];
    let staff_role = [SettingChange::StaffRoleId(Some(42))];
    let (first, second) = tokio::join!(repo.apply(1, &language), repo.apply(1, &staff_role));
    first?;
    second?;

    let settings = repo.get(1).await?;
    assert_eq!(settings.language, "en");
    assert_eq!(settings.staff_role_id, Some(42));

    Ok(())
}
