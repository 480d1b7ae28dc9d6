use super::*;

/// Tests hard deleting a session.
///
/// Expected: Ok(1) and the row gone even from deletion-inclusive reads
#[tokio::test]
async fn deletes_session() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let session = BadmintonSessionFactory::new(db).build().await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let deleted = service
        .data()
        .delete(session.id, QueryOptions::default())
        .await?;
    assert_eq!(deleted, 1);

    let options = QueryOptions {
        does_throw: false,
        with_deleted: true,
    };
    assert!(service.data().get_by_id(session.id, options).await?.is_none());

    Ok(())
}

/// Tests hard deleting a missing session.
///
/// Expected: Err(NotFound), or Ok(0) when silenced
#[tokio::test]
async fn fails_with_not_found_for_missing_session() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BadmintonSessionService::new(db, &DataConfig::default());

    let err = service
        .data()
        .delete(999, QueryOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some("BADMINTONSESSION_NOT_FOUND"));

    assert_eq!(service.data().delete(999, QueryOptions::silent()).await?, 0);

    Ok(())
}

/// Tests bulk deleting a mix of existing and missing ids.
///
/// Expected: Ok with only the existing rows removed
#[tokio::test]
async fn bulk_deletes_existing_ids_only() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = BadmintonSessionFactory::new(db).build().await?;
    let second = BadmintonSessionFactory::new(db).build().await?;
    let kept = BadmintonSessionFactory::new(db).build().await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let deleted = service
        .data()
        .bulk_delete(&[first.id, 9_999, second.id, 10_000])
        .await?;

    assert_eq!(deleted, 2);
    let remaining = service
        .data()
        .list(&QuerySpecification::default(), QueryOptions::default())
        .await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);

    assert_eq!(service.data().bulk_delete(&[]).await?, 0);

    Ok(())
}
