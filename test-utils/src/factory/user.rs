//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::sea_orm_active_enums::UserState;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .email("jane@example.com")
///     .display_name("Jane")
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    email: Option<String>,
    display_name: Option<String>,
    phone_number: Option<String>,
    password: String,
    state: UserState,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"` where id is auto-incremented
    /// - display_name: `"User {id}"`
    /// - phone_number: `None`
    /// - password: `"password"`
    /// - state: `UserState::Active`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: Some(format!("user{}@example.com", id)),
            display_name: Some(format!("User {}", id)),
            phone_number: None,
            password: "password".to_string(),
            state: UserState::Active,
        }
    }

    /// Sets the email for the user.
    ///
    /// # Arguments
    /// - `email` - Email address, unique across users
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the display name for the user.
    ///
    /// # Arguments
    /// - `display_name` - Name shown to other players
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the phone number for the user.
    ///
    /// # Arguments
    /// - `phone_number` - Phone number, unique across users
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Sets the account state for the user.
    ///
    /// # Arguments
    /// - `state` - Account state
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn state(mut self, state: UserState) -> Self {
        self.state = state;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now();
        entity::user::ActiveModel {
            email: ActiveValue::Set(self.email),
            display_name: ActiveValue::Set(self.display_name),
            phone_number: ActiveValue::Set(self.phone_number),
            password: ActiveValue::Set(self.password),
            state: ActiveValue::Set(self.state),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user with a specific email.
///
/// Shorthand for `UserFactory::new(db).email(email).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `email` - Email address for the user
///
/// # Returns
/// - `Ok(entity::user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_email(
    db: &DatabaseConnection,
    email: impl Into<String>,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).email(email).build().await
}
