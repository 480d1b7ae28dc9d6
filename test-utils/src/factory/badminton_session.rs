//! Badminton session factory for creating test session entities.
//!
//! Sessions default to a fixed-cost game starting in two days, in `NEW` status and
//! without an owner. Use `created_by` or `create_session` to attach one.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, DurationRound, Utc};
use entity::sea_orm_active_enums::{SessionPaymentType, SessionStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test badminton sessions with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let session = BadmintonSessionFactory::new(&db)
///     .name("Friday smash")
///     .status(SessionStatus::Started)
///     .created_by(user.id)
///     .build()
///     .await?;
/// ```
pub struct BadmintonSessionFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
    start_time: DateTime<Utc>,
    end_time: Option<DateTime<Utc>>,
    number_of_people: i32,
    created_by_id: Option<i32>,
    payment_type: SessionPaymentType,
    total_bill: Option<i32>,
    status: SessionStatus,
}

impl<'a> BadmintonSessionFactory<'a> {
    /// Creates a new BadmintonSessionFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Session {id}"` where id is auto-incremented
    /// - start_time: two days from now, truncated to whole seconds
    /// - end_time: two hours after start_time
    /// - number_of_people: `4`
    /// - payment_type: `SessionPaymentType::FixedCost`
    /// - status: `SessionStatus::New`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `BadmintonSessionFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        let start_time = (now + Duration::days(2))
            .duration_trunc(Duration::seconds(1))
            .unwrap_or(now);
        Self {
            db,
            name: format!("Session {}", id),
            description: None,
            start_time,
            end_time: Some(start_time + Duration::hours(2)),
            number_of_people: 4,
            created_by_id: None,
            payment_type: SessionPaymentType::FixedCost,
            total_bill: None,
            status: SessionStatus::New,
        }
    }

    /// Sets the session name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the session description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the start time and moves the end time to two hours after it.
    ///
    /// # Arguments
    /// - `start_time` - When play begins
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = Some(start_time + Duration::hours(2));
        self
    }

    /// Sets the maximum number of players.
    pub fn number_of_people(mut self, number_of_people: i32) -> Self {
        self.number_of_people = number_of_people;
        self
    }

    /// Sets the user owning the session.
    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by_id = Some(user_id);
        self
    }

    /// Sets the total bill split among members.
    pub fn total_bill(mut self, total_bill: i32) -> Self {
        self.total_bill = Some(total_bill);
        self
    }

    /// Sets the lifecycle status.
    pub fn status(mut self, status: SessionStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the session entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::badminton_session::Model)` - Created session entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::badminton_session::Model, DbErr> {
        let now = Utc::now();
        entity::badminton_session::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            number_of_people: ActiveValue::Set(self.number_of_people),
            created_by_id: ActiveValue::Set(self.created_by_id),
            payment_type: ActiveValue::Set(self.payment_type),
            total_bill: ActiveValue::Set(self.total_bill),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a session owned by the given user.
///
/// Shorthand for `BadmintonSessionFactory::new(db).created_by(user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the owning user
///
/// # Returns
/// - `Ok(entity::badminton_session::Model)` - Created session entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_session(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::badminton_session::Model, DbErr> {
    BadmintonSessionFactory::new(db)
        .created_by(user_id)
        .build()
        .await
}
