use super::*;

/// Tests looking up a user by email regardless of case and padding.
///
/// Expected: Ok(Some) with the matching user
#[tokio::test]
async fn finds_user_by_normalized_email() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, &DataConfig::default());
    let user = service.data().create(payload("Player@Example.com")).await?;
    factory::create_user(db).await?;

    let found = service.find_by_email("  PLAYER@example.COM ").await?;

    assert_eq!(found.map(|found| found.id), Some(user.id));

    Ok(())
}

/// Tests looking up an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;

    let service = UserService::new(db, &DataConfig::default());
    let found = service.find_by_email("nobody@example.com").await?;

    assert!(found.is_none());

    Ok(())
}
