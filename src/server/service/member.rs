//! Session member service.

use entity::member;
use sea_orm::DatabaseConnection;

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

pub struct MemberService<'a> {
    data: EntityDataAccess<'a, member::Entity, NoHooks>,
}

impl<'a> MemberService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &DataConfig) -> Self {
        Self {
            data: EntityDataAccess::new(db, "member", config)
                .with_options(ServiceOptions::default().deleted_by("deletedBy")),
        }
    }

    pub fn data(&self) -> &EntityDataAccess<'a, member::Entity, NoHooks> {
        &self.data
    }

    /// Lists the live members of a session in joining order.
    pub async fn list_for_session(&self, session_id: i32) -> Result<Vec<member::Model>, DataError> {
        let spec = QuerySpecification::default()
            .filter("badmintonSessionId", session_id)
            .sort(["id"]);

        self.data.list(&spec, QueryOptions::default()).await
    }
}
