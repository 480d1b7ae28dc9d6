//! Extension points invoked by `EntityDataAccess` around each operation.
//!
//! Domain services implement `EntityHooks` to add joins, validate payloads or enrich
//! results without re-implementing the operations themselves. Every method has a
//! pass-through default. Errors returned from hooks propagate to the caller as-is
//! and are never run through the persistence error translator.

use sea_orm::{DeleteMany, EntityTrait};
use std::future::Future;

use crate::{
    model::query::QuerySpecification,
    server::{data::query::builder::SelectQuery, error::data::DataError},
};

pub trait EntityHooks<E>: Send + Sync
where
    E: EntityTrait,
    E::Model: Send + Sync,
    E::ActiveModel: Send + Sync,
{
    /// Runs before a single-row insert and may rewrite the payload.
    fn pre_create(
        &self,
        payload: E::ActiveModel,
    ) -> impl Future<Output = Result<E::ActiveModel, DataError>> + Send {
        async move { Ok(payload) }
    }

    /// Runs after a single-row insert with the created entity.
    fn post_create(
        &self,
        model: E::Model,
    ) -> impl Future<Output = Result<E::Model, DataError>> + Send {
        async move { Ok(model) }
    }

    /// Runs before an update with the patch and the current entity.
    fn pre_update(
        &self,
        patch: E::ActiveModel,
        _current: &E::Model,
    ) -> impl Future<Output = Result<E::ActiveModel, DataError>> + Send {
        async move { Ok(patch) }
    }

    /// Runs after an update with the persisted entity.
    fn post_update(
        &self,
        model: E::Model,
    ) -> impl Future<Output = Result<E::Model, DataError>> + Send {
        async move { Ok(model) }
    }

    /// Adds joins or conditions to the base listing query before filters and search.
    fn extend_find_all_query(
        &self,
        _query: &mut SelectQuery,
        _spec: &QuerySpecification,
    ) -> Result<(), DataError> {
        Ok(())
    }

    /// Post-processes listed entities.
    fn extend_find_all_results(
        &self,
        models: Vec<E::Model>,
    ) -> impl Future<Output = Result<Vec<E::Model>, DataError>> + Send {
        async move { Ok(models) }
    }

    /// Adds conditions to a filtered hard delete before the id constraint.
    fn extend_delete_query(&self, query: DeleteMany<E>) -> DeleteMany<E> {
        query
    }
}

/// Hooks that leave every operation unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHooks;

impl<E> EntityHooks<E> for NoHooks
where
    E: EntityTrait,
    E::Model: Send + Sync,
    E::ActiveModel: Send + Sync,
{
}
