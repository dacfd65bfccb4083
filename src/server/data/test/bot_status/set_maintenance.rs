use super::*;

/// Tests switching maintenance mode on and off explicitly.
///
/// Expected: Ok with each write visible to the next read
#[tokio::test]
async fn sets_explicit_value() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::BotStatus)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BotStatusRepository::new(db);
    repo.ensure_exists().await?;

    assert!(repo.set_maintenance(true).await?.maintenance_mode);
    assert!(repo.get().await?.maintenance_mode);

    assert!(!repo.set_maintenance(false).await?.maintenance_mode);
    assert!(!repo.get().await?.maintenance_mode);

    Ok(())
}
