//! Configuration types threaded into every entity data-access instance.

use crate::server::config::DEFAULT_PAGE_SIZE_LIMIT;

/// Process-level limits shared by all entity services.
///
/// Built once from `Config` and passed explicitly, so tests can construct services
/// with arbitrary limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DataConfig {
    pub max_page_size: u64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            max_page_size: DEFAULT_PAGE_SIZE_LIMIT,
        }
    }
}

/// Per-entity identity and column conventions.
///
/// Property names are database column names. `deleted_by_property` is `None` for
/// entities that do not record who deleted a row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceOptions {
    pub id_property: String,
    pub sort: Vec<String>,
    pub created_at_property: String,
    pub updated_at_property: String,
    pub deleted_at_property: String,
    pub deleted_by_property: Option<String>,
}

impl Default for ServiceOptions {
    fn default() -> Self {
        Self {
            id_property: "id".to_string(),
            sort: vec!["-id".to_string()],
            created_at_property: "createdAt".to_string(),
            updated_at_property: "updatedAt".to_string(),
            deleted_at_property: "deletedAt".to_string(),
            deleted_by_property: None,
        }
    }
}

impl ServiceOptions {
    /// Sets the default sort applied when a listing supplies no sort tokens.
    pub fn sort<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Records the deleting user in `column` during soft deletes.
    pub fn deleted_by(mut self, column: impl Into<String>) -> Self {
        self.deleted_by_property = Some(column.into());
        self
    }
}

/// Per-call switches for reads and deletes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryOptions {
    /// Raise NotFound when no row matches. When false the call returns an empty result.
    pub does_throw: bool,
    /// Include soft deleted rows.
    pub with_deleted: bool,
}

impl Default for QueryOptions {
    fn default() -> Self {
        Self {
            does_throw: true,
            with_deleted: false,
        }
    }
}

impl QueryOptions {
    /// Options for a not-found-safe call that returns an empty result instead of failing.
    pub fn silent() -> Self {
        Self {
            does_throw: false,
            ..Self::default()
        }
    }

    /// Options lifting the soft delete scope.
    pub fn with_deleted() -> Self {
        Self {
            with_deleted: true,
            ..Self::default()
        }
    }
}
