use super::*;

/// Tests bulk deleting members with an unknown id in the list.
///
/// Expected: Ok(2) with the third member kept
#[tokio::test]
async fn bulk_deletes_members() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, session, first) = factory::helpers::create_member_with_dependencies(db).await?;
    let player = factory::create_user(db).await?;
    let second = factory::create_member(db, player.id, session.id).await?;
    let third_player = factory::create_user(db).await?;
    let third = factory::create_member(db, third_player.id, session.id).await?;

    let service = MemberService::new(db, &DataConfig::default());
    let deleted = service
        .data()
        .bulk_delete(&[first.id, second.id, 404])
        .await?;

    assert_eq!(deleted, 2);
    let members = service.list_for_session(session.id).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].id, third.id);
    assert_eq!(members[0].user_id, third_player.id);

    Ok(())
}

/// Tests hard deleting a session that still has members.
///
/// Expected: Err(Protected) namespaced to the session
#[tokio::test]
async fn protects_session_with_members() -> Result<(), DataError> {
    use crate::server::service::badminton_session::BadmintonSessionService;

    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, session, _member) = factory::helpers::create_member_with_dependencies(db).await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let err = service
        .data()
        .delete(session.id, QueryOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::Protected(_)));
    assert_eq!(err.error_code(), Some("BADMINTONSESSION_PROTECTED"));

    Ok(())
}
