//! Badminton session service.

use chrono::{DateTime, Utc};
use entity::{badminton_session, sea_orm_active_enums::SessionStatus};
use sea_orm::{ActiveEnum, ActiveValue, DatabaseConnection};
use serde_json::json;

use crate::{
    model::query::{PaginatedResult, QuerySpecification},
    server::{
        data::{
            access::EntityDataAccess,
            hooks::EntityHooks,
            options::{DataConfig, QueryOptions, ServiceOptions},
            query::builder::SelectQuery,
            translator::ErrorTranslator,
        },
        error::data::{DataError, DomainError},
    },
};

const ALIAS: &str = "badmintonSession";

/// Hooks joining the session owner and validating session times.
///
/// The owner is joined as `createdBy`, so listings can search and filter on paths
/// such as `createdBy.email`.
#[derive(Clone, Debug)]
pub struct BadmintonSessionHooks {
    errors: ErrorTranslator,
}

impl Default for BadmintonSessionHooks {
    fn default() -> Self {
        Self {
            errors: ErrorTranslator::new(ALIAS),
        }
    }
}

impl BadmintonSessionHooks {
    fn check_times(
        &self,
        start_time: DateTime<Utc>,
        end_time: Option<DateTime<Utc>>,
    ) -> Result<(), DataError> {
        match end_time {
            Some(end_time) if end_time < start_time => Err(DataError::Rejected(
                DomainError::new(
                    self.errors.error_code("INVALID_TIME"),
                    "Session end time must not be before its start time",
                )
                .with_data(json!({ "startTime": start_time, "endTime": end_time })),
            )),
            _ => Ok(()),
        }
    }
}

impl EntityHooks<badminton_session::Entity> for BadmintonSessionHooks {
    async fn pre_create(
        &self,
        payload: badminton_session::ActiveModel,
    ) -> Result<badminton_session::ActiveModel, DataError> {
        if let (ActiveValue::Set(start_time), ActiveValue::Set(end_time)) =
            (&payload.start_time, &payload.end_time)
        {
            self.check_times(*start_time, *end_time)?;
        }
        Ok(payload)
    }

    async fn pre_update(
        &self,
        patch: badminton_session::ActiveModel,
        current: &badminton_session::Model,
    ) -> Result<badminton_session::ActiveModel, DataError> {
        let start_time = match &patch.start_time {
            ActiveValue::Set(start_time) => *start_time,
            _ => current.start_time,
        };
        let end_time = match &patch.end_time {
            ActiveValue::Set(end_time) => *end_time,
            _ => current.end_time,
        };
        self.check_times(start_time, end_time)?;
        Ok(patch)
    }

    fn extend_find_all_query(
        &self,
        query: &mut SelectQuery,
        _spec: &QuerySpecification,
    ) -> Result<(), DataError> {
        query.left_join("users", "createdBy", "createdById", "id");
        Ok(())
    }
}

pub struct BadmintonSessionService<'a> {
    data: EntityDataAccess<'a, badminton_session::Entity, BadmintonSessionHooks>,
}

impl<'a> BadmintonSessionService<'a> {
    /// Creates a new BadmintonSessionService instance.
    ///
    /// Sessions list soonest first by default and record the deleting user on soft
    /// delete.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `config` - Data-layer limits
    pub fn new(db: &'a DatabaseConnection, config: &DataConfig) -> Self {
        let options = ServiceOptions::default()
            .sort(["startTime"])
            .deleted_by("deletedBy");

        Self {
            data: EntityDataAccess::new(db, ALIAS, config)
                .with_options(options)
                .with_hooks(BadmintonSessionHooks::default()),
        }
    }

    /// Generic operations on sessions.
    pub fn data(&self) -> &EntityDataAccess<'a, badminton_session::Entity, BadmintonSessionHooks> {
        &self.data
    }

    /// Lists one page of sessions owned by a user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the owning user
    /// - `spec` - Additional filters, search, sort and page inputs
    ///
    /// # Returns
    /// - `Ok(PaginatedResult)` - Matching sessions and page metadata
    /// - `Err(DataError::InvalidSpecification)` - Missing or invalid page inputs
    pub async fn list_for_creator(
        &self,
        user_id: i32,
        spec: QuerySpecification,
    ) -> Result<PaginatedResult<badminton_session::Model>, DataError> {
        let spec = spec.filter("createdById", user_id);
        self.data.list_with_page(&spec, QueryOptions::default()).await
    }

    /// Lists every live session in the given lifecycle states.
    pub async fn list_by_status(
        &self,
        statuses: &[SessionStatus],
    ) -> Result<Vec<badminton_session::Model>, DataError> {
        let values = statuses
            .iter()
            .map(|status| serde_json::Value::from(status.to_value()))
            .collect::<Vec<_>>();
        let spec = QuerySpecification::default().filter("status_IN", values);

        self.data.list(&spec, QueryOptions::default()).await
    }
}
