//! Join request service.

use entity::{request, sea_orm_active_enums::RequestStatus};
use sea_orm::{ActiveEnum, DatabaseConnection};

use crate::{
    model::query::QuerySpecification,
    server::{
        data::{
            access::EntityDataAccess,
            hooks::NoHooks,
            options::{DataConfig, QueryOptions, ServiceOptions},
        },
        error::data::DataError,
    },
};

pub struct RequestService<'a> {
    data: EntityDataAccess<'a, request::Entity, NoHooks>,
}

impl<'a> RequestService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &DataConfig) -> Self {
        Self {
            data: EntityDataAccess::new(db, "request", config)
                .with_options(ServiceOptions::default().deleted_by("deletedBy")),
        }
    }

    pub fn data(&self) -> &EntityDataAccess<'a, request::Entity, NoHooks> {
        &self.data
    }

    /// Lists the pending join requests of a session, oldest first.
    ///
    /// # Arguments
    /// - `session_id` - ID of the requested session
    ///
    /// # Returns
    /// - `Ok(Vec<request::Model>)` - Pending requests
    /// - `Err(DataError)` - Query failed
    pub async fn list_pending(&self, session_id: i32) -> Result<Vec<request::Model>, DataError> {
        let spec = QuerySpecification::default()
            .filter("badmintonSessionId", session_id)
            .filter("status", RequestStatus::Pending.to_value())
            .sort(["createdAt"]);

        self.data.list(&spec, QueryOptions::default()).await
    }
}
