use super::*;

/// Tests that search ignores case and diacritics.
///
/// Expected: Ok with the two Jane accounts and not John's
#[tokio::test]
async fn matches_ignoring_case_and_accents() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let upper = UserFactory::new(db).email("JANE@x.com").build().await?;
    let accented = UserFactory::new(db).email("jané@y.com").build().await?;
    UserFactory::new(db).email("john@z.com").build().await?;

    let service = UserService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default().search("jane", ["email"]);
    let users = service.data().list(&spec, QueryOptions::default()).await?;

    let mut ids = users.iter().map(|user| user.id).collect::<Vec<_>>();
    ids.sort();
    assert_eq!(ids, vec![upper.id, accented.id]);

    let spec = QuerySpecification::default().search("JANÉ", ["email"]);
    let users = service.data().list(&spec, QueryOptions::default()).await?;
    assert_eq!(users.len(), 2);

    Ok(())
}

/// Tests that search matches any of the listed fields.
///
/// Expected: Ok with the user whose display name matches
#[tokio::test]
async fn matches_any_listed_field() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let an = UserFactory::new(db)
        .display_name("Nguyễn Văn An")
        .build()
        .await?;
    UserFactory::new(db).display_name("Tran Binh").build().await?;

    let service = UserService::new(db, &DataConfig::default());
    let page = service.search("nguyen van", 10, 1).await?;

    assert_eq!(page.meta.total_items, 1);
    assert_eq!(page.data[0].id, an.id);

    Ok(())
}

/// Tests that search narrows filters instead of widening them.
///
/// Expected: Ok with only the active Jane
#[tokio::test]
async fn combines_search_with_filters() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let active = UserFactory::new(db).email("jane@a.com").build().await?;
    UserFactory::new(db)
        .email("jane@b.com")
        .state(UserState::Inactive)
        .build()
        .await?;
    UserFactory::new(db).email("john@a.com").build().await?;

    let service = UserService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default()
        .search("jane", ["email", "displayName"])
        .filter("state", "Active");
    let users = service.data().list(&spec, QueryOptions::default()).await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, active.id);

    Ok(())
}

/// Tests that an empty search term leaves the listing unchanged.
///
/// Expected: Ok with every user
#[tokio::test]
async fn ignores_empty_term() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user(db).await?;
    factory::create_user(db).await?;

    let service = UserService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default().search("", ["email"]);
    let users = service.data().list(&spec, QueryOptions::default()).await?;

    assert_eq!(users.len(), 2);

    Ok(())
}
