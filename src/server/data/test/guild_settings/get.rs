use super::*;

/// Tests reading settings of a guild that never stored any.
///
/// Verifies that the repository reports the default language, timezone and empty
/// optional fields without creating a row.
///
/// Expected: Ok with default settings and no row in the table
#[tokio::test]
async fn returns_defaults_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.get(123456789).await?;

    assert_eq!(settings, GuildSettings::defaults(123456789));
    assert_eq!(settings.language, "it");
    assert_eq!(settings.timezone, "UTC");
    assert!(settings.log_channel_id.is_none());
    assert!(settings.staff_role_id.is_none());

    let rows = entity::prelude::GuildSettings::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests reading stored settings.
///
/// Verifies that stored snowflake strings are converted back to u64 values.
///
/// Expected: Ok with the stored values
#[tokio::test]
async fn returns_stored_settings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, 42)
        .language("en")
        .log_channel_id(Some(555))
        .staff_role_id(Some(777))
        .timezone("Europe/Rome")
        .build()
        .await?;

    let settings = GuildSettingsRepository::new(db).get(42).await?;

    assert_eq!(settings.language, "en");
    assert_eq!(settings.log_channel_id, Some(555));
    assert_eq!(settings.staff_role_id, Some(777));
    assert_eq!(settings.timezone, "Europe/Rome");

    Ok(())
}

/// Tests that settings of one guild do not leak into another.
///
/// Expected: Ok with defaults for the second guild
#[tokio::test]
async fn isolates_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, 1)
        .language("en")
        .build()
        .await?;

    let settings = GuildSettingsRepository::new(db).get(2).await?;

    assert_eq!(settings, GuildSettings::defaults(2));

    Ok(())
}
