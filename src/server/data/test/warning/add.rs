use super::*;

/// Tests appending the first warning of a member.
///
/// Expected: Ok with count 1 and the stored fields echoed back
#[tokio::test]
async fn adds_first_warning() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let receipt = WarningRepository::new(db)
        .add(param(1, 10, "spam"))
        .await?;

    assert_eq!(receipt.count, 1);
    assert_eq!(receipt.warning.guild_id, 1);
    assert_eq!(receipt.warning.user_id, 10);
    assert_eq!(receipt.warning.moderator_id, 500);
    assert_eq!(receipt.warning.reason, "spam");

    Ok(())
}

/// Tests that the count includes earlier warnings.
///
/// Expected: Ok with count 2 after two warnings
#[tokio::test]
async fn counts_previous_warnings() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);
    let first = repo.add(param(1, 10, "spam")).await?;
    let second = repo.add(param(1, 10, "flood")).await?;

    assert_eq!(first.count, 1);
    assert_eq!(second.count, 2);
    assert!(second.warning.warn_id > first.warning.warn_id);

    Ok(())
}

/// Tests that counts are scoped to a single guild and user.
///
/// Expected: Ok with count 1 despite warnings for other members and guilds
#[tokio::test]
async fn count_is_scoped_to_guild_and_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_warnings(db, 1, 11, 2).await?;
    factory::create_warnings(db, 2, 10, 3).await?;

    let receipt = WarningRepository::new(db)
        .add(param(1, 10, "spam"))
        .await?;

    assert_eq!(receipt.count, 1);

    Ok(())
}

/// Tests that a blank reason is rejected.
///
/// Expected: Err(EmptyReason) and no row written
#[tokio::test]
async fn rejects_blank_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);
    let result = repo.add(param(1, 10, "   ")).await;

    assert!(matches!(
        result,
        Err(AppError::ModerationErr(ModerationError::EmptyReason))
    ));
    assert_eq!(repo.count(1, 10).await?, 0);

    Ok(())
}

/// Tests concurrent appends for the same member.
///
/// Verifies that every append is stored and the counts returned are distinct,
/// ending at the total number of appends.
///
/// Expected: Ok with counts {1, 2} and two stored warnings
#[tokio::test]
async fn concurrent_adds_are_all_counted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);
    let (first, second) = tokio::join!(
        repo.add(param(1, 10, "spam")),
        repo.add(param(1, 10, "flood"))
    );

    let mut counts = vec![first?.count, second?.count];
    counts.sort();

    assert_eq!(counts, vec![1, 2]);
    assert_eq!(repo.count(1, 10).await?, 2);

    Ok(())
}

/// Tests that warning IDs increase across guilds.
///
/// Expected: Ok with the later warning holding the larger ID
#[tokio::test]
async fn ids_increase_across_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Warning)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = WarningRepository::new(db);
    let first = repo.add(param(1, 10, "spam")).await?;
    let second = repo.add(param(2, 20, "spam")).await?;

    assert!(second.warning.warn_id > first.warning.warn_id);

    Ok(())
}
