//! Member factory for creating session membership entities.

use chrono::Utc;
use entity::sea_orm_active_enums::MemberPaymentStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test members with customizable fields.
pub struct MemberFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    badminton_session_id: i32,
    shuttles_used: Option<i32>,
    payment_status: MemberPaymentStatus,
}

impl<'a> MemberFactory<'a> {
    /// Creates a new MemberFactory for the given user and session.
    ///
    /// Defaults:
    /// - shuttles_used: `None`
    /// - payment_status: `MemberPaymentStatus::Unpaid`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the joining user
    /// - `badminton_session_id` - ID of the session joined
    ///
    /// # Returns
    /// - `MemberFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32, badminton_session_id: i32) -> Self {
        Self {
            db,
            user_id,
            badminton_session_id,
            shuttles_used: None,
            payment_status: MemberPaymentStatus::Unpaid,
        }
    }

    /// Sets the number of shuttles the member used.
    pub fn shuttles_used(mut self, shuttles_used: i32) -> Self {
        self.shuttles_used = Some(shuttles_used);
        self
    }

    /// Sets the payment status.
    pub fn payment_status(mut self, payment_status: MemberPaymentStatus) -> Self {
        self.payment_status = payment_status;
        self
    }

    /// Builds and inserts the member entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::member::Model)` - Created member entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::member::Model, DbErr> {
        let now = Utc::now();
        entity::member::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            badminton_session_id: ActiveValue::Set(self.badminton_session_id),
            shuttles_used: ActiveValue::Set(self.shuttles_used),
            payment_status: ActiveValue::Set(self.payment_status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unpaid member of a session.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the joining user
/// - `badminton_session_id` - ID of the session joined
///
/// # Returns
/// - `Ok(entity::member::Model)` - Created member entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_member(
    db: &DatabaseConnection,
    user_id: i32,
    badminton_session_id: i32,
) -> Result<entity::member::Model, DbErr> {
    MemberFactory::new(db, user_id, badminton_session_id)
        .build()
        .await
}
