use super::*;
use crate::server::data::query::{
    builder::SelectQuery, dialect::Dialect, filter::FilterCompiler,
};
use sea_orm::{ConnectionTrait, EntityTrait, FromQueryResult};

/// Creates sessions for 2, 4, 6 and 8 players.
async fn sessions_by_size(
    db: &sea_orm::DatabaseConnection,
) -> Result<Vec<badminton_session::Model>, DataError> {
    let mut sessions = Vec::new();
    for size in [2, 4, 6, 8] {
        sessions.push(
            BadmintonSessionFactory::new(db)
                .number_of_people(size)
                .build()
                .await?,
        );
    }
    Ok(sessions)
}

fn sizes(sessions: &[badminton_session::Model]) -> Vec<i32> {
    let mut sizes = sessions
        .iter()
        .map(|session| session.number_of_people)
        .collect::<Vec<_>>();
    sizes.sort();
    sizes
}

/// Tests the `IN` operator with a list and with a scalar.
///
/// Expected: Ok with exactly the listed statuses
#[tokio::test]
async fn filters_by_membership() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for status in [
        SessionStatus::New,
        SessionStatus::Started,
        SessionStatus::Finished,
    ] {
        BadmintonSessionFactory::new(db).status(status).build().await?;
    }

    let service = BadmintonSessionService::new(db, &DataConfig::default());

    let spec = QuerySpecification::default().filter("status_IN", json!(["NEW", "FINISHED"]));
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;
    assert_eq!(sessions.len(), 2);
    assert!(sessions
        .iter()
        .all(|session| session.status != SessionStatus::Started));

    let spec = QuerySpecification::default().filter("status_in", "STARTED");
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].status, SessionStatus::Started);

    let spec = QuerySpecification::default().filter("status_IN", json!([]));
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;
    assert!(sessions.is_empty());

    Ok(())
}

/// Tests that `RANGE` includes both bounds.
///
/// Expected: Ok with the 4 and 6 player sessions
#[tokio::test]
async fn filters_by_inclusive_range() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    sessions_by_size(db).await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default().filter("numberOfPeople_RANGE", json!([4, 6]));
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;

    assert_eq!(sizes(&sessions), vec![4, 6]);

    Ok(())
}

/// Tests comparison operators on the same field in one specification.
///
/// Expected: Ok with the sessions strictly above 2 and at most 6
#[tokio::test]
async fn combines_comparisons_on_one_field() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    sessions_by_size(db).await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default()
        .filter("numberOfPeople_GT", 2)
        .filter("numberOfPeople_LTE", 6);
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;
    assert_eq!(sizes(&sessions), vec![4, 6]);

    let spec = QuerySpecification::default()
        .filter("numberOfPeople_GTE", 6)
        .filter("numberOfPeople_LT", 8);
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;
    assert_eq!(sizes(&sessions), vec![6]);

    Ok(())
}

/// Tests timestamp filters given as RFC 3339 strings.
///
/// Expected: Ok with the sessions starting on or after the bound
#[tokio::test]
async fn filters_timestamps_from_rfc3339() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for day in [1, 10, 20] {
        BadmintonSessionFactory::new(db)
            .start_time(at(2026, 11, day))
            .build()
            .await?;
    }

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default().filter("startTime_GTE", "2026-11-10T10:00:00Z");
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;

    assert_eq!(sessions.len(), 2);
    assert!(sessions
        .iter()
        .all(|session| session.start_time >= at(2026, 11, 10)));

    Ok(())
}

/// Tests the `DAY`, `MONTH` and `YEAR` date-part filters.
///
/// Expected: Ok with the sessions whose start time has the requested parts
#[tokio::test]
async fn filters_by_date_parts() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for start_time in [at(2026, 3, 15), at(2026, 3, 20), at(2027, 3, 15), at(2026, 4, 15)] {
        BadmintonSessionFactory::new(db)
            .start_time(start_time)
            .build()
            .await?;
    }

    let service = BadmintonSessionService::new(db, &DataConfig::default());

    let spec = QuerySpecification::default().filter("startTime_DAY", 15);
    assert_eq!(service.data().list(&spec, QueryOptions::default()).await?.len(), 3);

    let spec = QuerySpecification::default()
        .filter("startTime_DAY", 15)
        .filter("startTime_YEAR", 2026);
    assert_eq!(service.data().list(&spec, QueryOptions::default()).await?.len(), 2);

    let spec = QuerySpecification::default()
        .filter("startTime_MONTH", 3)
        .filter("startTime_YEAR", 2026);
    assert_eq!(service.data().list(&spec, QueryOptions::default()).await?.len(), 2);

    Ok(())
}

/// Tests filtering on a column of the joined owner.
///
/// Expected: Ok with the sessions of the matching owner only
#[tokio::test]
async fn filters_on_joined_owner() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let jane = UserFactory::new(db).email("jane@x.com").build().await?;
    let john = UserFactory::new(db).email("john@x.com").build().await?;
    factory::create_session(db, jane.id).await?;
    factory::create_session(db, john.id).await?;
    factory::create_session(db, john.id).await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default().filter("createdBy.email", "john@x.com");
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;

    assert_eq!(sessions.len(), 2);
    assert!(sessions
        .iter()
        .all(|session| session.created_by_id == Some(john.id)));

    Ok(())
}

/// Tests that a null value matches missing values.
///
/// Expected: Ok with the session without an owner
#[tokio::test]
async fn filters_null_as_missing() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    factory::create_session(db, owner.id).await?;
    let orphan = BadmintonSessionFactory::new(db).build().await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default().filter("createdById", serde_json::Value::Null);
    let sessions = service.data().list(&spec, QueryOptions::default()).await?;

    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, orphan.id);

    Ok(())
}

/// Tests that an unknown operator suffix filters on the literal key.
///
/// Sessions have no `name_FOO` column, so the query fails instead of matching
/// unintended rows, and the failure is passed through untranslated.
///
/// Expected: Err(Database)
#[tokio::test]
async fn falls_back_to_literal_key_for_unknown_suffix() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    BadmintonSessionFactory::new(db).build().await?;

    let service = BadmintonSessionService::new(db, &DataConfig::default());
    let spec = QuerySpecification::default().filter("name_FOO", "x");
    let err = service
        .data()
        .list(&spec, QueryOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, DataError::Database(_)));
    assert!(err.to_string().contains("name_FOO"));

    Ok(())
}

#[derive(Debug, FromQueryResult)]
struct CourtLabel {
    id: i32,
}

/// Tests that a column whose name contains an unknown suffix is still filterable.
///
/// `custom_FOO` is not an operator suffix, so the whole key is matched as a column.
///
/// Expected: Ok with only the row whose `custom_FOO` equals the filter value
#[tokio::test]
async fn matches_column_named_like_unknown_suffix() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    db.execute_unprepared(
        r#"CREATE TABLE "court_labels" ("id" INTEGER PRIMARY KEY, "custom_FOO" TEXT)"#,
    )
    .await?;
    db.execute_unprepared(
        r#"INSERT INTO "court_labels" ("id", "custom_FOO") VALUES (1, 'x'), (2, 'y'), (3, NULL)"#,
    )
    .await?;

    let spec = QuerySpecification::default().filter("custom_FOO", "x");
    let mut query = SelectQuery::new("court_labels", "courtLabel", "id", Dialect::Sqlite);
    FilterCompiler.apply(&mut query, &spec.filter);

    let labels = CourtLabel::find_by_statement(query.build())
        .all(db)
        .await?;

    assert_eq!(labels.len(), 1);
    assert_eq!(labels[0].id, 1);

    Ok(())
}

/// Tests that placeholders bind by number wherever they appear in the SQL.
///
/// The second bound value is referenced first and the first one twice.
///
/// Expected: Ok with the sessions for 4 and 6 players
#[tokio::test]
async fn binds_placeholders_by_number() -> Result<(), DataError> {
    let test = TestBuilder::new()
        .with_session_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    sessions_by_size(db).await?;

    let mut query = SelectQuery::new("badminton_sessions", "badmintonSession", "id", Dialect::Sqlite);
    let low = query.bind(4);
    let high = query.bind(6);
    let column = query.column("numberOfPeople");
    query.and_where(format!("{column} <= {high}"));
    query.and_where(format!("{column} >= {low} AND {low} > 0"));

    let sessions = badminton_session::Entity::find()
        .from_raw_sql(query.build())
        .all(db)
        .await?;

    assert_eq!(sizes(&sessions), vec![4, 6]);

    Ok(())
}
