//! Generic data access for one entity.
//!
//! `EntityDataAccess` composes the query building blocks, the error translator and a
//! set of domain hooks into the full operation set shared by every entity service:
//! retrieval by id, listing with and without pagination, create, update, soft delete,
//! restore, filtered hard delete and bulk delete.
//!
//! Listing follows a fixed pipeline:
//! 1. Base query on the entity table under its alias, scoped to live rows
//! 2. `EntityHooks::extend_find_all_query` for joins
//! 3. Filters from `QuerySpecification::filter`
//! 4. Free-text search
//! 5. Sort, then either all rows (`list`) or one page plus a count (`list_with_page`)
//! 6. `EntityHooks::extend_find_all_results`
//!
//! Persistence errors are translated once, at the call that produced them. The count
//! and page queries of `list_with_page` are independent reads, so a concurrent write
//! between them can make the metadata disagree with the page.

use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait,
    ConnectionTrait, DatabaseConnection, DbErr, EntityName, EntityTrait, FromQueryResult,
    IdenStatic, IntoActiveModel, Iterable, QueryFilter, TransactionTrait, Value,
};
use tracing::debug;

use crate::{
    model::query::{PaginatedResult, QuerySpecification},
    server::{
        data::{
            hooks::{EntityHooks, NoHooks},
            options::{DataConfig, QueryOptions, ServiceOptions},
            query::{
                builder::SelectQuery, dialect::Dialect, filter::FilterCompiler,
                pagination::PaginationProcessor, search::SearchBuilder,
            },
            translator::ErrorTranslator,
        },
        error::data::DataError,
    },
};

#[derive(Debug, FromQueryResult)]
struct CountRow {
    total: i64,
}

/// Data access for entity `E` with domain hooks `H`.
///
/// Holds its collaborators by value and borrows the connection pool, so it is cheap
/// to build per request or once per service.
pub struct EntityDataAccess<'a, E, H = NoHooks> {
    db: &'a DatabaseConnection,
    entity: E,
    alias: String,
    options: ServiceOptions,
    hooks: H,
    filters: FilterCompiler,
    search: SearchBuilder,
    pagination: PaginationProcessor,
    errors: ErrorTranslator,
}

impl<'a, E> EntityDataAccess<'a, E, NoHooks>
where
    E: EntityTrait,
{
    /// Creates data access for `E` with default options and no hooks.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `alias` - Alias qualifying root columns and namespacing error codes
    /// - `config` - Process-level limits such as the maximum page size
    pub fn new(db: &'a DatabaseConnection, alias: impl Into<String>, config: &DataConfig) -> Self {
        let alias = alias.into();
        Self {
            db,
            entity: E::default(),
            errors: ErrorTranslator::new(&alias),
            alias,
            options: ServiceOptions::default(),
            hooks: NoHooks,
            filters: FilterCompiler,
            search: SearchBuilder,
            pagination: PaginationProcessor::new(config.max_page_size),
        }
    }
}

impl<'a, E, H> EntityDataAccess<'a, E, H>
where
    E: EntityTrait,
{
    /// Replaces the identity, sort and column conventions.
    pub fn with_options(mut self, options: ServiceOptions) -> Self {
        self.options = options;
        self
    }

    /// Replaces the domain hooks.
    pub fn with_hooks<H2>(self, hooks: H2) -> EntityDataAccess<'a, E, H2> {
        EntityDataAccess {
            db: self.db,
            entity: self.entity,
            alias: self.alias,
            options: self.options,
            hooks,
            filters: self.filters,
            search: self.search,
            pagination: self.pagination,
            errors: self.errors,
        }
    }
}

impl<'a, E, H> EntityDataAccess<'a, E, H>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Send + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    H: EntityHooks<E>,
{
    /// Retrieves an entity by its identifier property.
    ///
    /// # Arguments
    /// - `id` - Identifier value
    /// - `options` - `does_throw` selects between NotFound and `None` for a missing
    ///   row, `with_deleted` includes soft deleted rows
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Entity found
    /// - `Ok(None)` - No match and `does_throw` is false
    /// - `Err(DataError::NotFound)` - No match and `does_throw` is true
    pub async fn get_by_id(
        &self,
        id: i32,
        options: QueryOptions,
    ) -> Result<Option<E::Model>, DataError> {
        let mut query = self.base_query(options.with_deleted)?;
        let column = query.column(&self.options.id_property);
        let param = query.bind(id);
        query.and_where(format!("{} = {}", column, param));
        query.limit(1);

        let model = E::find()
            .from_raw_sql(query.build())
            .one(self.db)
            .await
            .map_err(|e| self.translate(e))?;

        match model {
            Some(model) => Ok(Some(model)),
            None if options.does_throw => Err(self.errors.not_found()),
            None => Ok(None),
        }
    }

    /// Retrieves a live entity by id, failing with NotFound when absent.
    pub async fn get_entity(&self, id: i32) -> Result<E::Model, DataError> {
        self.get_by_id(id, QueryOptions::default())
            .await?
            .ok_or_else(|| self.errors.not_found())
    }

    /// Counts all rows of the entity.
    ///
    /// # Arguments
    /// - `options` - `with_deleted` includes soft deleted rows
    pub async fn count_all(&self, options: QueryOptions) -> Result<u64, DataError> {
        let query = self.base_query(options.with_deleted)?;
        self.count(&query).await
    }

    /// Lists every entity matching the specification's filters and search.
    ///
    /// Pagination inputs are ignored, sort tokens still apply.
    ///
    /// # Arguments
    /// - `spec` - Query specification
    /// - `options` - `with_deleted` includes soft deleted rows
    pub async fn list(
        &self,
        spec: &QuerySpecification,
        options: QueryOptions,
    ) -> Result<Vec<E::Model>, DataError> {
        let mut query = self.prepare_find_all_query(spec, options)?;
        self.pagination
            .apply_sort(&mut query, &spec.sort, &self.options.sort);

        let models = self.fetch_all(&query).await?;
        self.hooks.extend_find_all_results(models).await
    }

    /// Lists one page of entities with page metadata.
    ///
    /// `pageSize` and `pageNumber` are required and `pageSize` is capped by
    /// `DataConfig::max_page_size`. `totalItems` counts matching rows before
    /// pagination and `totalPages` is its ceiling division by `pageSize`.
    ///
    /// # Returns
    /// - `Ok(PaginatedResult)` - Page data and metadata
    /// - `Err(DataError::InvalidSpecification)` - Missing or out-of-range page inputs
    pub async fn list_with_page(
        &self,
        spec: &QuerySpecification,
        options: QueryOptions,
    ) -> Result<PaginatedResult<E::Model>, DataError> {
        let page = self
            .pagination
            .page_request(spec)
            .map_err(|e| self.errors.invalid_specification(e))?;

        let mut query = self.prepare_find_all_query(spec, options)?;
        let total_items = self.count(&query).await?;

        self.pagination
            .apply_sort(&mut query, &spec.sort, &self.options.sort);
        self.pagination.apply_page(&mut query, &page);

        let models = self.fetch_all(&query).await?;
        let data = self.hooks.extend_find_all_results(models).await?;

        Ok(PaginatedResult {
            data,
            meta: self.pagination.meta(total_items, &page),
        })
    }

    /// Inserts one entity, running the create hooks around the insert.
    ///
    /// Creation and update timestamps are filled in when the payload leaves them unset.
    ///
    /// # Returns
    /// - `Ok(model)` - Created entity as returned by the post-create hook
    /// - `Err(DataError::Duplicate)` - Unique constraint violated
    pub async fn create(&self, payload: E::ActiveModel) -> Result<E::Model, DataError> {
        let payload = self.hooks.pre_create(payload).await?;
        let payload = self.stamp_created(payload)?;

        let model = payload
            .insert(self.db)
            .await
            .map_err(|e| self.translate(e))?;

        self.hooks.post_create(model).await
    }

    /// Inserts many entities in one transaction without running hooks.
    ///
    /// Either every payload is stored or none is.
    ///
    /// # Returns
    /// - `Ok(models)` - Inserted entities with generated ids and timestamps, in
    ///   payload order
    /// - `Err(DataError::Duplicate)` - A unique constraint was violated, nothing stored
    pub async fn bulk_create(
        &self,
        payloads: Vec<E::ActiveModel>,
    ) -> Result<Vec<E::Model>, DataError> {
        if payloads.is_empty() {
            return Ok(Vec::new());
        }

        let payloads = payloads
            .into_iter()
            .map(|payload| self.stamp_created(payload))
            .collect::<Result<Vec<_>, _>>()?;

        let txn = self.db.begin().await.map_err(|e| self.translate(e))?;

        let mut models = Vec::with_capacity(payloads.len());
        for payload in payloads {
            let model = payload
                .insert(&txn)
                .await
                .map_err(|e| self.translate(e))?;
            models.push(model);
        }

        txn.commit().await.map_err(|e| self.translate(e))?;

        Ok(models)
    }

    /// Applies the set fields of `patch` to a live entity.
    ///
    /// The identifier column is never overwritten and the update timestamp is
    /// refreshed.
    ///
    /// # Returns
    /// - `Ok(model)` - Updated entity as returned by the post-update hook
    /// - `Err(DataError::NotFound)` - No live entity with that id
    pub async fn update(&self, id: i32, patch: E::ActiveModel) -> Result<E::Model, DataError> {
        let current = self.get_entity(id).await?;
        let patch = self.hooks.pre_update(patch, &current).await?;

        let mut active = current.into_active_model();
        for column in E::Column::iter() {
            if column.as_str() == self.options.id_property {
                continue;
            }
            if let ActiveValue::Set(value) = patch.get(column) {
                active.try_set(column, value)?;
            }
        }
        if let Some(column) = Self::find_column(&self.options.updated_at_property) {
            active.try_set(column, Value::from(Utc::now()))?;
        }

        let model = active
            .update(self.db)
            .await
            .map_err(|e| self.translate(e))?;

        self.hooks.post_update(model).await
    }

    /// Marks a live entity as deleted, recording who deleted it.
    ///
    /// Both steps run in one transaction: the deleting user is recorded first, then
    /// the deletion timestamp is set. Soft deleted rows are excluded from every
    /// default-scoped read.
    ///
    /// # Arguments
    /// - `id` - Identifier of the entity
    /// - `deleted_by` - ID of the deleting user, stored when the entity tracks it
    /// - `options` - `does_throw` selects between NotFound and `Ok(0)` for a missing row
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows marked deleted
    /// - `Err(DataError::NotFound)` - No live entity with that id
    pub async fn soft_delete(
        &self,
        id: i32,
        deleted_by: Option<i32>,
        options: QueryOptions,
    ) -> Result<u64, DataError> {
        let id_column = self.column(&self.options.id_property)?;
        let deleted_at = self.column(&self.options.deleted_at_property)?;
        let actor = match (&self.options.deleted_by_property, deleted_by) {
            (Some(name), Some(user_id)) => Some((self.column(name)?, user_id)),
            _ => None,
        };

        let txn = self.db.begin().await.map_err(|e| self.translate(e))?;

        if let Some((column, user_id)) = actor {
            E::update_many()
                .col_expr(column, Expr::value(user_id))
                .filter(id_column.eq(id))
                .filter(deleted_at.is_null())
                .exec(&txn)
                .await
                .map_err(|e| self.translate(e))?;
        }

        let result = E::update_many()
            .col_expr(deleted_at, Expr::value(Utc::now()))
            .filter(id_column.eq(id))
            .filter(deleted_at.is_null())
            .exec(&txn)
            .await
            .map_err(|e| self.translate(e))?;

        if result.rows_affected == 0 {
            txn.rollback().await.map_err(|e| self.translate(e))?;
            debug!(entity = %self.alias, id, "Soft delete matched no live row");
            return if options.does_throw {
                Err(self.errors.not_found())
            } else {
                Ok(0)
            };
        }

        txn.commit().await.map_err(|e| self.translate(e))?;

        Ok(result.rows_affected)
    }

    /// Clears the deletion marker of a soft deleted entity.
    ///
    /// # Returns
    /// - `Ok(model)` - The restored entity
    /// - `Err(DataError::NotFound)` - No soft deleted entity with that id
    pub async fn restore(&self, id: i32) -> Result<E::Model, DataError> {
        let id_column = self.column(&self.options.id_property)?;
        let deleted_at = self.column(&self.options.deleted_at_property)?;

        let mut update = E::update_many()
            .col_expr(deleted_at, Expr::value(None::<DateTime<Utc>>))
            .filter(id_column.eq(id))
            .filter(deleted_at.is_not_null());
        if let Some(name) = &self.options.deleted_by_property {
            update = update.col_expr(self.column(name)?, Expr::value(None::<i32>));
        }

        let result = update.exec(self.db).await.map_err(|e| self.translate(e))?;
        if result.rows_affected == 0 {
            return Err(self.errors.not_found());
        }

        self.get_entity(id).await
    }

    /// Permanently deletes one entity, narrowed by the delete hook.
    ///
    /// # Arguments
    /// - `id` - Identifier of the entity
    /// - `options` - `does_throw` selects between NotFound and `Ok(0)` when nothing
    ///   was deleted
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted
    /// - `Err(DataError::NotFound)` - Nothing deleted and `does_throw` is true
    /// - `Err(DataError::Protected)` - The row is still referenced
    pub async fn delete(&self, id: i32, options: QueryOptions) -> Result<u64, DataError> {
        let id_column = self.column(&self.options.id_property)?;

        let result = self
            .hooks
            .extend_delete_query(E::delete_many())
            .filter(id_column.eq(id))
            .exec(self.db)
            .await
            .map_err(|e| self.translate(e))?;

        if result.rows_affected == 0 && options.does_throw {
            debug!(entity = %self.alias, id, "Delete matched no row");
            return Err(self.errors.not_found());
        }

        Ok(result.rows_affected)
    }

    /// Permanently deletes every entity whose id is in `ids`.
    ///
    /// Ids without a row are ignored.
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows deleted
    pub async fn bulk_delete(&self, ids: &[i32]) -> Result<u64, DataError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let id_column = self.column(&self.options.id_property)?;
        let result = E::delete_many()
            .filter(id_column.is_in(ids.iter().copied()))
            .exec(self.db)
            .await
            .map_err(|e| self.translate(e))?;

        Ok(result.rows_affected)
    }

    /// Builds the listing query up to and including search.
    fn prepare_find_all_query(
        &self,
        spec: &QuerySpecification,
        options: QueryOptions,
    ) -> Result<SelectQuery, DataError> {
        let mut query = self.base_query(options.with_deleted)?;

        self.hooks.extend_find_all_query(&mut query, spec)?;
        self.filters.apply(&mut query, &spec.filter);
        self.search
            .apply(&mut query, spec.search.as_deref(), &spec.search_fields);

        Ok(query)
    }

    /// Root query on the entity table, scoped to live rows unless `with_deleted`.
    fn base_query(&self, with_deleted: bool) -> Result<SelectQuery, DataError> {
        let dialect = Dialect::from_backend(self.db.get_database_backend())?;
        let mut query = SelectQuery::new(
            self.entity.table_name(),
            self.alias.as_str(),
            self.options.id_property.as_str(),
            dialect,
        );

        if !with_deleted && Self::find_column(&self.options.deleted_at_property).is_some() {
            let column = query.column(&self.options.deleted_at_property);
            query.and_where(format!("{} IS NULL", column));
        }

        Ok(query)
    }

    async fn fetch_all(&self, query: &SelectQuery) -> Result<Vec<E::Model>, DataError> {
        E::find()
            .from_raw_sql(query.build())
            .all(self.db)
            .await
            .map_err(|e| self.translate(e))
    }

    async fn count(&self, query: &SelectQuery) -> Result<u64, DataError> {
        let row = CountRow::find_by_statement(query.build_count())
            .one(self.db)
            .await
            .map_err(|e| self.translate(e))?;

        Ok(row.map_or(0, |row| u64::try_from(row.total).unwrap_or(0)))
    }

    /// Fills unset creation and update timestamps with the current time.
    fn stamp_created(&self, mut payload: E::ActiveModel) -> Result<E::ActiveModel, DataError> {
        let now = Value::from(Utc::now());
        for name in [
            &self.options.created_at_property,
            &self.options.updated_at_property,
        ] {
            if let Some(column) = Self::find_column(name) {
                if payload.get(column).is_not_set() {
                    payload.try_set(column, now.clone())?;
                }
            }
        }
        Ok(payload)
    }

    fn column(&self, name: &str) -> Result<E::Column, DataError> {
        Self::find_column(name).ok_or_else(|| {
            self.errors.invalid_specification(format!(
                "{} has no column named {}",
                self.errors.display_name(),
                name
            ))
        })
    }

    fn find_column(name: &str) -> Option<E::Column> {
        E::Column::iter().find(|column| column.as_str() == name)
    }

    fn translate(&self, err: DbErr) -> DataError {
        self.errors.translate(err)
    }
}
