use super::*;

/// Tests setting a single field on a guild with no row.
///
/// Verifies that the row is created with defaults for every other column.
///
/// Expected: Ok with the language changed and other fields at defaults
#[tokio::test]
async fn creates_row_with_defaults() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let settings = repo.upsert_field(10, "language", &json!("en")).await?;

    assert_eq!(settings.language, "en");
    assert_eq!(settings.timezone, "UTC");
    assert!(settings.log_channel_id.is_none());
    assert_eq!(repo.get(10).await?, settings);

    Ok(())
}

/// Tests setting then reading the staff role.
///
/// Expected: Ok with the staff role returned by a subsequent read
#[tokio::test]
async fn sets_staff_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    repo.upsert_field(10, "staff_role_id", &json!("987654321"))
        .await?;

    assert_eq!(repo.get(10).await?.staff_role_id, Some(987654321));

    Ok(())
}

/// Tests that a field outside the allow-list is rejected.
///
/// Verifies that nothing is written for the guild.
///
/// Expected: Err(InvalidField) and no row stored
#[tokio::test]
async fn rejects_unknown_field_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildSettingsRepository::new(db);
    let result = repo.upsert_field(10, "guild_id; DROP TABLE", &json!("x")).await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::InvalidField(_)))
    ));
    let rows = entity::prelude::GuildSettings::find().all(db).await?;
    assert!(rows.is_empty());

    Ok(())
}

/// Tests that a malformed value leaves stored settings untouched.
///
/// Expected: Err(InvalidValue) and the previous log channel kept
#[tokio::test]
async fn rejects_malformed_value_without_writing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_settings::GuildSettingsFactory::new(db, 10)
        .log_channel_id(Some(555))
        .build()
        .await?;

    let repo = GuildSettingsRepository::new(db);
    let result = repo
        .upsert_field(10, "log_channel_id", &json!("general"))
        .await;

    assert!(matches!(
        result,
        Err(AppError::SettingsErr(SettingsError::InvalidValue { .. }))
    ));
    assert_eq!(repo.get(10).await?.log_channel_id, Some(555));

    Ok(())
}
