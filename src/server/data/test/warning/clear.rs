use super::*;

/// Tests clearing a member's warnings.
///
/// Verifies that the removed count is reported and a subsequent list is empty.
///
/// Expected: Ok(3) and an empty list afterwards
#[tokio::test]
async fn clears_all_warnings_of_member() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_warnings(db, 1, 10, 3).await?;

    let repo = WarningRepository::new(db);
    let removed = repo.clear(1, 10).await?;

    assert_eq!(removed, 3);
    assert!(repo.list(1, 10).await?.is_empty());

    Ok(())
}

/// Tests clearing a member with no warnings.
///
/// Expected: Ok(0)
#[tokio::test]
async fn clearing_nothing_returns_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let removed = WarningRepository::new(db).clear(1, 10).await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests that clearing leaves other members and guilds alone.
///
/// Expected: Ok with the other warnings still stored
#[tokio::test]
async fn leaves_other_members_untouched() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_warnings(db, 1, 10, 2).await?;
    factory::create_warnings(db, 1, 11, 1).await?;
    factory::create_warnings(db, 2, 10, 1).await?;

    let repo = WarningRepository::new(db);
    repo.clear(1, 10).await?;

    assert_eq!(repo.count(1, 11).await?, 1);
    assert_eq!(repo.count(2, 10).await?, 1);

    Ok(())
}

/// Tests that counting restarts after a clear.
///
/// Expected: Ok with count 1 for the first warning after clearing
#[tokio::test]
async fn count_restarts_after_clear() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_warnings(db, 1, 10, 2).await?;

    let repo = WarningRepository::new(db);
    repo.clear(1, 10).await?;
    let receipt = repo.add(param(1, 10, "again")).await?;

    assert_eq!(receipt.count, 1);

    Ok(())
}
