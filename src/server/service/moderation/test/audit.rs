use super::*;

/// Tests the audit entry of a kick.
///
/// Verifies that the entry goes to the configured channel with labels in the guild
/// language and the moderator, target and reason of the action.
///
/// Expected: Ok with one English audit entry in the log channel
#[tokio::test]
async fn posts_translated_entry_to_log_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::embedded()?;
    let platform = RecordingPlatform::new();

    factory::guild_settings::GuildSettingsFactory::new(db, GUILD_ID)
        .language("en")
        .log_channel_id(Some(LOG_CHANNEL_ID))
        .build()
        .await?;

    let outcome = ModerationService::new(db, &platform, &catalog, OWNER_ID)
        .execute(request(administrator(), ModerationAction::Kick, Some("spam")))
        .await?;

    assert!(outcome.logged);

    let entries = platform.audit_entries();
    assert_eq!(entries.len(), 1);
    let (channel_id, entry) = &entries[0];
    assert_eq!(*channel_id, LOG_CHANNEL_ID);
    assert_eq!(entry.labels.title, "Moderation action");
    assert_eq!(entry.action, "Kick");
    assert_eq!(entry.target_id, TARGET_ID);
    assert_eq!(entry.target_name, "Troublemaker");
    assert_eq!(entry.moderator_id, MODERATOR_ID);
    assert_eq!(entry.reason, "spam");

    Ok(())
}

/// Tests a guild without a log channel.
///
/// Expected: Ok with logged false and no audit post
#[tokio::test]
async fn drops_entry_without_log_channel() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::embedded()?;
    let platform = RecordingPlatform::new();

    let outcome = ModerationService::new(db, &platform, &catalog, OWNER_ID)
        .execute(request(administrator(), ModerationAction::Warn, Some("spam")))
        .await?;

    assert!(!outcome.logged);
    assert!(platform.audit_entries().is_empty());

    Ok(())
}

/// Tests an audit post that fails.
///
/// Verifies that the action still succeeds and stays recorded.
///
/// Expected: Ok with logged false and the warning stored
#[tokio::test]
async fn failed_audit_post_keeps_action() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_moderation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let catalog = Catalog::embedded()?;
    let platform = RecordingPlatform::failing_audit();

    factory::guild_settings::GuildSettingsFactory::new(db, GUILD_ID)
        .log_channel_id(Some(LOG_CHANNEL_ID))
        .build()
        .await?;

    let outcome = ModerationService::new(db, &platform, &catalog, OWNER_ID)
        .execute(request(administrator(), ModerationAction::Warn, Some("spam")))
        .await?;

    assert!(!outcome.logged);
    assert_eq!(outcome.warning_count, Some(1));
    assert_eq!(
        WarningRepository::new(db).count(GUILD_ID, TARGET_ID).await?,
        1
    );

    Ok(())
}
