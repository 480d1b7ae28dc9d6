use super::*;

/// Tests creating a user through the service.
///
/// Verifies the email is normalized by the user hooks and both timestamps are
/// filled in when the payload leaves them unset.
///
/// Expected: Ok with normalized email and equal timestamps
#[tokio::test]
async fn creates_user_with_normalized_email() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, &DataConfig::default());
    let user = service
        .data()
        .create(payload("  Jane.Doe@Example.COM "))
        .await?;

    assert_eq!(user.email.as_deref(), Some("jane.doe@example.com"));
    assert_eq!(user.state, UserState::Active);
    assert_eq!(user.created_at, user.updated_at);
    assert!(user.deleted_at.is_none());

    Ok(())
}

/// Tests creating a user whose email is already taken.
///
/// The stored email differs only in case, so the violation is caught after
/// normalization.
///
/// Expected: Err(Duplicate) with USER_DUPLICATE
#[tokio::test]
async fn fails_with_duplicate_for_taken_email() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;

    let service = UserService::new(db, &DataConfig::default());
    let err = service
        .data()
        .create(payload("TAKEN@example.com"))
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::Duplicate(_)));
    assert_eq!(err.error_code(), Some("USER_DUPLICATE"));

    Ok(())
}

/// Tests inserting several users in one batch.
///
/// Expected: Ok with the stored users in payload order, and an empty list for an
/// empty batch
#[tokio::test]
async fn bulk_creates_users() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, &DataConfig::default());
    let inserted = service
        .data()
        .bulk_create(vec![
            payload("a@example.com"),
            payload("b@example.com"),
            payload("c@example.com"),
        ])
        .await?;

    let emails = inserted
        .iter()
        .map(|user| user.email.as_deref().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(emails, ["a@example.com", "b@example.com", "c@example.com"]);
    assert!(inserted.iter().all(|user| user.created_at == user.updated_at));

    for user in &inserted {
        let stored = service.data().get_entity(user.id).await?;
        assert_eq!(stored.email, user.email);
    }
    assert_eq!(service.data().count_all(QueryOptions::default()).await?, 3);
    assert!(service.data().bulk_create(Vec::new()).await?.is_empty());

    Ok(())
}

/// Tests that a batch with one conflicting row stores nothing.
///
/// Expected: Err(Duplicate) with USER_DUPLICATE and only the pre-existing user kept
#[tokio::test]
async fn bulk_create_is_all_or_nothing() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;

    let service = UserService::new(db, &DataConfig::default());
    let err = service
        .data()
        .bulk_create(vec![payload("fresh@example.com"), payload("taken@example.com")])
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), Some("USER_DUPLICATE"));
    assert_eq!(service.data().count_all(QueryOptions::default()).await?, 1);
    assert!(service.find_by_email("fresh@example.com").await?.is_none());

    Ok(())
}
