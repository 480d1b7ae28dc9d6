//! User service.
//!
//! Users are looked up by email, so emails are stored trimmed and lowercased
//! regardless of how they were submitted.

use entity::user;
use sea_orm::{ActiveValue, DatabaseConnection};

use crate::{
    model::query::{PaginatedResult, QuerySpecification},
    server::{
        data::{
            access::EntityDataAccess,
            hooks::EntityHooks,
            options::{DataConfig, QueryOptions},
        },
        error::data::DataError,
    },
};

/// Fields matched by the free-text user search.
pub const USER_SEARCH_FIELDS: [&str; 4] = ["email", "displayName", "firstName", "lastName"];

/// Hooks normalizing user emails before they are written.
#[derive(Clone, Copy, Debug, Default)]
pub struct UserHooks;

impl EntityHooks<user::Entity> for UserHooks {
    async fn pre_create(&self, mut payload: user::ActiveModel) -> Result<user::ActiveModel, DataError> {
        normalize_email(&mut payload);
        Ok(payload)
    }

    async fn pre_update(
        &self,
        mut patch: user::ActiveModel,
        _current: &user::Model,
    ) -> Result<user::ActiveModel, DataError> {
        normalize_email(&mut patch);
        Ok(patch)
    }
}

fn normalize_email(payload: &mut user::ActiveModel) {
    let normalized = match &payload.email {
        ActiveValue::Set(Some(email)) => Some(email.trim().to_lowercase()),
        _ => None,
    };
    if let Some(email) = normalized {
        payload.email = ActiveValue::Set(Some(email));
    }
}

pub struct UserService<'a> {
    data: EntityDataAccess<'a, user::Entity, UserHooks>,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `config` - Data-layer limits
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, config: &DataConfig) -> Self {
        Self {
            data: EntityDataAccess::new(db, "user", config).with_hooks(UserHooks),
        }
    }

    /// Generic operations on users.
    pub fn data(&self) -> &EntityDataAccess<'a, user::Entity, UserHooks> {
        &self.data
    }

    /// Finds a live user by email, ignoring surrounding whitespace and case.
    ///
    /// # Arguments
    /// - `email` - Email address to look up
    ///
    /// # Returns
    /// - `Ok(Some(user))` - User found
    /// - `Ok(None)` - No live user with that email
    /// - `Err(DataError)` - Query failed
    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, DataError> {
        let spec = QuerySpecification::default().filter("email", email.trim().to_lowercase());
        let users = self.data.list(&spec, QueryOptions::default()).await?;

        Ok(users.into_iter().next())
    }

    /// Searches users by email and names, one page at a time.
    ///
    /// # Arguments
    /// - `term` - Text matched ignoring case and diacritics
    /// - `page_size` - Rows per page
    /// - `page_number` - 1-based page number
    pub async fn search(
        &self,
        term: &str,
        page_size: u64,
        page_number: u64,
    ) -> Result<PaginatedResult<user::Model>, DataError> {
        let spec = QuerySpecification::default()
            .search(term, USER_SEARCH_FIELDS)
            .page(page_size, page_number);

        self.data.list_with_page(&spec, QueryOptions::default()).await
    }
}
