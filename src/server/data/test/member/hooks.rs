use super::*;

/// Hooks restricting hard deletes to paid members and hiding fees from listings.
struct SettledOnly;

impl EntityHooks<member::Entity> for SettledOnly {
    async fn extend_find_all_results(
        &self,
        models: Vec<member::Model>,
    ) -> Result<Vec<member::Model>, DataError> {
        Ok(models
            .into_iter()
            .map(|member| member::Model {
                total_fee: None,
                ..member
            })
            .collect())
    }

    fn extend_delete_query(&self, query: DeleteMany<member::Entity>) -> DeleteMany<member::Entity> {
        query.filter(member::Column::PaymentStatus.eq(MemberPaymentStatus::Paid))
    }
}

fn access(db: &sea_orm::DatabaseConnection) -> EntityDataAccess<'_, member::Entity, SettledOnly> {
    EntityDataAccess::new(db, "member", &DataConfig::default()).with_hooks(SettledOnly)
}

/// Tests that the delete hook narrows hard deletes.
///
/// Expected: Err(NotFound) for the unpaid member, Ok(1) for the paid one
#[tokio::test]
async fn delete_hook_narrows_hard_delete() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, session, unpaid) = factory::helpers::create_member_with_dependencies(db).await?;
    let player = factory::create_user(db).await?;
    let paid = MemberFactory::new(db, player.id, session.id)
        .payment_status(MemberPaymentStatus::Paid)
        .build()
        .await?;

    let members = access(db);

    let err = members
        .delete(unpaid.id, QueryOptions::default())
        .await
        .unwrap_err();
    assert_eq!(err.error_code(), Some("MEMBER_NOT_FOUND"));
    assert!(members.get_entity(unpaid.id).await.is_ok());

    assert_eq!(members.delete(paid.id, QueryOptions::default()).await?, 1);

    Ok(())
}

/// Tests that the result hook runs on both listing variants.
///
/// Expected: Ok with fees cleared in the list and in the page
#[tokio::test]
async fn result_hook_post_processes_listings() -> Result<(), DataError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_owner, session, member) = factory::helpers::create_member_with_dependencies(db).await?;
    MemberService::new(db, &DataConfig::default())
        .data()
        .update(
            member.id,
            member::ActiveModel {
                total_fee: sea_orm::ActiveValue::Set(Some(120)),
                ..Default::default()
            },
        )
        .await?;

    let members = access(db);
    let spec = QuerySpecification::default().filter("badmintonSessionId", session.id);

    let listed = members.list(&spec, QueryOptions::default()).await?;
    assert_eq!(listed.len(), 1);
    assert!(listed[0].total_fee.is_none());

    let page = members
        .list_with_page(&spec.clone().page(5, 1), QueryOptions::default())
        .await?;
    assert!(page.data[0].total_fee.is_none());

    let stored = members.get_entity(member.id).await?;
    assert_eq!(stored.total_fee, Some(120));

    Ok(())
}
