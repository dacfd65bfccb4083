use super::*;

/// Tests listing a member without warnings.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn returns_empty_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let warnings = WarningRepository::new(db).list(1, 10).await?;

    assert!(warnings.is_empty());

    Ok(())
}

/// Tests that warnings are listed oldest first.
///
/// Verifies ordering by creation time regardless of insertion order.
///
/// Expected: Ok with warnings ordered by created_at ascending
#[tokio::test]
async fn orders_by_creation_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::warning::WarningFactory::new(db, 1, 10)
        .reason("newest")
        .created_at(now)
        .build()
        .await?;
    factory::warning::WarningFactory::new(db, 1, 10)
        .reason("oldest")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::warning::WarningFactory::new(db, 1, 10)
        .reason("middle")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;

    let warnings = WarningRepository::new(db).list(1, 10).await?;
    let reasons: Vec<_> = warnings.iter().map(|w| w.reason.as_str()).collect();

    assert_eq!(reasons, vec!["oldest", "middle", "newest"]);

    Ok(())
}

/// Tests that warnings created at the same instant are ordered by ID.
///
/// Expected: Ok with warnings in insertion order
#[tokio::test]
async fn breaks_ties_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    for reason in ["a", "b", "c"] {
        factory::warning::WarningFactory::new(db, 1, 10)
            .reason(reason)
            .created_at(now)
            .build()
            .await?;
    }

    let warnings = WarningRepository::new(db).list(1, 10).await?;
    let reasons: Vec<_> = warnings.iter().map(|w| w.reason.as_str()).collect();

    assert_eq!(reasons, vec!["a", "b", "c"]);

    Ok(())
}

/// Tests that only the requested member's warnings are listed.
///
/// Expected: Ok with the two warnings of the member in guild 1
#[tokio::test]
async fn filters_by_guild_and_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_warnings(db, 1, 10, 2).await?;
    factory::create_warnings(db, 1, 11, 1).await?;
    factory::create_warnings(db, 2, 10, 1).await?;

    let warnings = WarningRepository::new(db).list(1, 10).await?;

    assert_eq!(warnings.len(), 2);
    assert!(warnings.iter().all(|w| w.guild_id == 1 && w.user_id == 10));

    Ok(())
}
