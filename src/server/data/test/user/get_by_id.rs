use super::*;

/// Tests retrieving a live user by id.
///
/// Expected: Ok(Some) with the stored user
#[tokio::test]
async fn returns_live_user() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db, &DataConfig::default());
    let found = service
        .data()
        .get_by_id(user.id, QueryOptions::default())
        .await?;

    let found = found.unwrap();
    assert_eq!(found.id, user.id);
    assert_eq!(found.email, user.email);

    Ok(())
}

/// Tests retrieving a user that does not exist.
///
/// Expected: Err(NotFound) with the user namespaced code and message
#[tokio::test]
async fn fails_with_not_found_for_missing_user() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, &DataConfig::default());
    let err = service
        .data()
        .get_by_id(999, QueryOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::NotFound(_)));
    assert_eq!(err.error_code(), Some("USER_NOT_FOUND"));
    assert_eq!(err.domain().unwrap().message, "User not found");

    Ok(())
}

/// Tests the not-found-safe retrieval.
///
/// Expected: Ok(None) when `does_throw` is false
#[tokio::test]
async fn returns_none_when_silenced() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = UserService::new(db, &DataConfig::default());
    let found = service.data().get_by_id(999, QueryOptions::silent()).await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that soft deleted users are hidden from default retrieval.
///
/// Verifies the user is still reachable with `with_deleted` and carries its
/// deletion timestamp.
///
/// Expected: NotFound by default, Ok(Some) with `deleted_at` set otherwise
#[tokio::test]
async fn hides_soft_deleted_user_unless_requested() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db, &DataConfig::default());
    service
        .data()
        .soft_delete(user.id, None, QueryOptions::default())
        .await?;

    let err = service.data().get_entity(user.id).await.unwrap_err();
    assert!(matches!(err, DataError::NotFound(_)));

    let deleted = service
        .data()
        .get_by_id(user.id, QueryOptions::with_deleted())
        .await?
        .unwrap();
    assert!(deleted.deleted_at.is_some());

    Ok(())
}
