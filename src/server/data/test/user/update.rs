use super::*;

/// Tests patching a user.
///
/// Verifies only the set fields change, the id is kept and the update timestamp
/// moves forward.
///
/// Expected: Ok with patched display name and normalized email
#[tokio::test]
async fn applies_set_fields_only() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserFactory::new(db).phone_number("0900000001").build().await?;

    let service = UserService::new(db, &DataConfig::default());
    let updated = service
        .data()
        .update(
            user.id,
            user::ActiveModel {
                display_name: ActiveValue::Set(Some("Jane".to_string())),
                email: ActiveValue::Set(Some(" JANE@Example.com".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.display_name.as_deref(), Some("Jane"));
    assert_eq!(updated.email.as_deref(), Some("jane@example.com"));
    assert_eq!(updated.phone_number, user.phone_number);
    assert_eq!(updated.created_at, user.created_at);
    assert!(updated.updated_at >= user.updated_at);

    Ok(())
}

/// Tests that a patch cannot change the identifier.
///
/// Expected: Ok with the original id
#[tokio::test]
async fn ignores_identifier_in_patch() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let service = UserService::new(db, &DataConfig::default());
    let updated = service
        .data()
        .update(
            user.id,
            user::ActiveModel {
                id: ActiveValue::Set(user.id + 100),
                club: ActiveValue::Set(Some("Smash Club".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.id, user.id);
    assert_eq!(updated.club.as_deref(), Some("Smash Club"));

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Err(NotFound)
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
        .update(999, user::ActiveModel::default())
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), Some("USER_NOT_FOUND"));

    Ok(())
}

/// Tests updating a user onto an email another user holds.
///
/// Expected: Err(Duplicate)
#[tokio::test]
async fn fails_with_duplicate_for_taken_email() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user_with_email(db, "taken@example.com").await?;
    let user = factory::create_user(db).await?;

    let service = UserService::new(db, &DataConfig::default());
    let err = service
        .data()
        .update(
            user.id,
            user::ActiveModel {
                email: ActiveValue::Set(Some("taken@example.com".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::Duplicate(_)));

    Ok(())
}
