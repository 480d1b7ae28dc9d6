//! Request factory for creating join request entities.

use chrono::Utc;
use entity::sea_orm_active_enums::RequestStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test join requests with customizable fields.
pub struct RequestFactory<'a> {
    db: &'a DatabaseConnection,
    created_by_id: i32,
    badminton_session_id: i32,
    status: RequestStatus,
}

impl<'a> RequestFactory<'a> {
    /// Creates a new RequestFactory defaulting to `RequestStatus::Pending`.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `created_by_id` - ID of the requesting user
    /// - `badminton_session_id` - ID of the session requested
    ///
    /// # Returns
    /// - `RequestFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, created_by_id: i32, badminton_session_id: i32) -> Self {
        Self {
            db,
            created_by_id,
            badminton_session_id,
            status: RequestStatus::Pending,
        }
    }

    /// Sets the request status.
    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the request entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::request::Model)` - Created request entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::request::Model, DbErr> {
        let now = Utc::now();
        entity::request::ActiveModel {
            created_by_id: ActiveValue::Set(self.created_by_id),
            badminton_session_id: ActiveValue::Set(self.badminton_session_id),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending join request.
///
/// # Arguments
/// - `db` - Database connection
/// - `created_by_id` - ID of the requesting user
/// - `badminton_session_id` - ID of the session requested
///
/// # Returns
/// - `Ok(entity::request::Model)` - Created request entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_request(
    db: &DatabaseConnection,
    created_by_id: i32,
    badminton_session_id: i32,
) -> Result<entity::request::Model, DbErr> {
    RequestFactory::new(db, created_by_id, badminton_session_id)
        .build()
        .await
}
