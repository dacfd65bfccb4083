use super::*;

/// Tests a single toggle.
///
/// Expected: Ok(true) and the stored flag switched on
#[tokio::test]
async fn toggle_switches_maintenance_on() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bot_status(db, false).await?;

    let repo = BotStatusRepository::new(db);
    let status = repo.toggle().await?;

    assert!(status.maintenance_mode);
    assert!(repo.get().await?.maintenance_mode);

    Ok(())
}

/// Tests that two toggles restore the original value.
///
/// Expected: Ok with maintenance off after toggling twice
#[tokio::test]
async fn double_toggle_restores_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bot_status(db, false).await?;

    let repo = BotStatusRepository::new(db);
    repo.toggle().await?;
    let status = repo.toggle().await?;

    assert!(!status.maintenance_mode);

    Ok(())
}

/// Tests two concurrent toggles.
///
/// Verifies that neither flip is lost.
///
/// Expected: Ok with the original value restored
#[tokio::test]
async fn concurrent_toggles_cancel_out() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bot_status(db, false).await?;

    let repo = BotStatusRepository::new(db);
    let (first, second) = tokio::join!(repo.toggle(), repo.toggle());
    first?;
    second?;

    assert!(!repo.get().await?.maintenance_mode);

    Ok(())
}

/// Tests toggling when the status row is missing.
///
/// Expected: Ok(true) with the row recreated
#[tokio::test]
async fn toggle_recreates_missing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = BotStatusRepository::new(db).toggle().await?;

    assert!(status.maintenance_mode);
    let rows = entity::prelude::BotStatus::find().all(db).await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}
