use super::*;

/// Tests creating the status row on an empty table.
///
/// Expected: Ok with a single row and maintenance off
#[tokio::test]
async fn creates_row_with_maintenance_off() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatusRepository::new(db);
    repo.ensure_exists().await?;

    let rows = entity::prelude::BotStatus::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert!(!repo.get().await?.maintenance_mode);

    Ok(())
}

/// Tests that an existing row is left as it is.
///
/// Verifies that a restart does not switch maintenance mode off.
///
/// Expected: Ok with maintenance still on
#[tokio::test]
async fn keeps_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_bot_status(db, true).await?;

    let repo = BotStatusRepository::new(db);
    repo.ensure_exists().await?;
    repo.ensure_exists().await?;

    let rows = entity::prelude::BotStatus::find().all(db).await?;
    assert_eq!(rows.len(), 1);
    assert!(repo.get().await?.maintenance_mode);

    Ok(())
}

/// Tests reading the status without a row.
///
/// Expected: Ok with maintenance off
#[tokio::test]
async fn missing_row_reads_as_maintenance_off() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let status = BotStatusRepository::new(db).get().await?;

    assert!(!status.maintenance_mode);

    Ok(())
}
