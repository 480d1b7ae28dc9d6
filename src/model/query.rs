//! Request-facing query specification and paginated result shapes.
//!
//! These types are bound from query-string parameters by the transport layer and are
//! free of any persistence types so they can be shared with clients.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat filter map keyed by `field` or `field_SUFFIX`.
///
/// Ordered so compiled predicates and their bound parameters come out in the same
/// order on every call.
pub type FilterMap = BTreeMap<String, serde_json::Value>;

/// Declarative listing request combining pagination, fields, sort, search and filters.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct QuerySpecification {
    pub page_size: Option<u64>,
    pub page_number: Option<u64>,
    pub disable_pagination: bool,

    /// Projection hints. Accepted for compatibility, not applied to queries.
    pub fields: Vec<String>,
    pub omit_fields: Vec<String>,
    pub include: Vec<String>,

    /// Sort tokens, `field` for ascending and `-field` for descending.
    pub sort: Vec<String>,

    pub search: Option<String>,
    pub search_type: Option<String>,
    pub search_fields: Vec<String>,

    pub filter: FilterMap,
}

impl QuerySpecification {
    /// Sets the requested page.
    ///
    /// # Arguments
    /// - `page_size` - Rows per page
    /// - `page_number` - 1-based page number
    pub fn page(mut self, page_size: u64, page_number: u64) -> Self {
        self.page_size = Some(page_size);
        self.page_number = Some(page_number);
        self
    }

    /// Sets the sort tokens.
    pub fn sort<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sort = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the free-text search term and the fields it is matched against.
    pub fn search<I, S>(mut self, term: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search = Some(term.into());
        self.search_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Adds one filter entry, replacing any previous value under the same key.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }
}

/// Page metadata returned alongside paginated data.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total_items: u64,
    pub total_pages: u64,
    /// Echo of the requested page number, not clamped to `total_pages`.
    pub current_page: u64,
}

/// One page of rows plus its metadata.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}
