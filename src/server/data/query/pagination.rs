use thiserror::Error;

use crate::{
    model::query::{PageMeta, QuerySpecification},
    server::data::query::builder::{Order, SelectQuery},
};

/// Reasons a specification cannot be paginated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    #[error("pageSize is required for paginated listings")]
    MissingPageSize,

    #[error("pageNumber is required for paginated listings")]
    MissingPageNumber,

    #[error("pageSize must be between 1 and {max}, got {size}")]
    PageSizeOutOfRange { size: u64, max: u64 },

    #[error("pageNumber must be a positive integer")]
    PageNumberOutOfRange,
}

/// Validated page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    pub page_size: u64,
    pub page_number: u64,
}

impl PageRequest {
    /// Rows skipped before this page.
    pub fn offset(&self) -> u64 {
        (self.page_number - 1) * self.page_size
    }
}

/// Applies ordering and limit/offset, and computes page metadata.
///
/// Independent of filters and search so the same predicates can be used for both
/// the page query and its count.
#[derive(Clone, Copy, Debug)]
pub struct PaginationProcessor {
    max_page_size: u64,
}

impl PaginationProcessor {
    pub fn new(max_page_size: u64) -> Self {
        Self { max_page_size }
    }

    /// Validates the pagination facet of a specification.
    ///
    /// Both `pageSize` and `pageNumber` are required. `pageSize` is capped by the
    /// configured maximum and neither may be zero. The resulting offset must fit a
    /// signed 64-bit integer, the widest OFFSET the backends accept.
    pub fn page_request(&self, spec: &QuerySpecification) -> Result<PageRequest, PaginationError> {
        let page_size = spec.page_size.ok_or(PaginationError::MissingPageSize)?;
        let page_number = spec.page_number.ok_or(PaginationError::MissingPageNumber)?;

        if page_size == 0 || page_size > self.max_page_size {
            return Err(PaginationError::PageSizeOutOfRange {
                size: page_size,
                max: self.max_page_size,
            });
        }
        let offset = (page_number.max(1) - 1).checked_mul(page_size);
        if page_number == 0 || offset.is_none_or(|offset| offset > i64::MAX as u64) {
            return Err(PaginationError::PageNumberOutOfRange);
        }

        Ok(PageRequest {
            page_size,
            page_number,
        })
    }

    /// Orders `query` by the given sort tokens, or by `defaults` when there are none.
    ///
    /// A leading `-` sorts descending. The primary key is appended as a final
    /// tie-breaker so pages are stable across calls.
    pub fn apply_sort<'q>(
        &self,
        query: &'q mut SelectQuery,
        tokens: &[String],
        defaults: &[String],
    ) -> &'q mut SelectQuery {
        let tokens = if tokens.iter().any(|token| !token.trim().is_empty()) {
            tokens
        } else {
            defaults
        };

        for token in tokens {
            let token = token.trim();
            let (field, order) = match token.strip_prefix('-') {
                Some(field) => (field, Order::Desc),
                None => (token, Order::Asc),
            };
            if field.is_empty() {
                continue;
            }
            query.order_by(field, order);
        }

        if !query.is_ordered_by_id() {
            let id = query.id_column().to_string();
            query.order_by(&id, Order::Asc);
        }

        query
    }

    /// Limits `query` to the requested page.
    pub fn apply_page<'q>(&self, query: &'q mut SelectQuery, page: &PageRequest) -> &'q mut SelectQuery {
        query.limit(page.page_size).offset(page.offset())
    }

    /// Computes metadata for a page out of `total_items` matching rows.
    pub fn meta(&self, total_items: u64, page: &PageRequest) -> PageMeta {
        PageMeta {
            total_items,
            total_pages: total_items.div_ceil(page.page_size),
            current_page: page.page_number,
        }
    }
}
