use sea_orm::DbErr;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// User-safe error payload carried by every translated data error.
///
/// `error_code` is namespaced by the entity alias (`USER_DUPLICATE`,
/// `BADMINTONSESSION_NOT_FOUND`, ...) so codes never collide across services.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DomainError {
    pub error_code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl DomainError {
    /// Creates a payload without extra data.
    pub fn new(error_code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            message: message.into(),
            data: None,
        }
    }

    /// Attaches structured data for the caller.
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_code, self.message)
    }
}

impl From<DomainError> for ErrorDto {
    fn from(err: DomainError) -> Self {
        ErrorDto {
            error_code: err.error_code,
            message: err.message,
            data: err.data,
        }
    }
}

/// Error taxonomy of the generic data-access layer.
///
/// Every variant except `Database` and `UnsupportedBackend` carries a `DomainError`
/// that is safe to show to callers. `Database` holds persistence failures the
/// translator does not recognize; they are passed up unchanged for the outer
/// unhandled-error boundary.
#[derive(Error, Debug)]
pub enum DataError {
    /// Target entity is absent or soft deleted.
    #[error("{0}")]
    NotFound(DomainError),

    /// Unique constraint violation.
    #[error("{0}")]
    Duplicate(DomainError),

    /// Malformed query or input of the wrong type.
    #[error("{0}")]
    Query(DomainError),

    /// Foreign key violation, the row is still referenced elsewhere.
    #[error("{0}")]
    Protected(DomainError),

    /// Pagination or sort input that cannot be turned into a query.
    #[error("{0}")]
    InvalidSpecification(DomainError),

    /// Business rule violation raised by a domain hook.
    #[error("{0}")]
    Rejected(DomainError),

    /// Connection backend without a SQL dialect for search and date filters.
    #[error("Unsupported database backend: {0}")]
    UnsupportedBackend(String),

    /// Untranslated persistence error.
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl DataError {
    /// Returns the user-safe payload, or `None` for untranslated errors.
    pub fn domain(&self) -> Option<&DomainError> {
        match self {
            Self::NotFound(err)
            | Self::Duplicate(err)
            | Self::Query(err)
            | Self::Protected(err)
            | Self::InvalidSpecification(err)
            | Self::Rejected(err) => Some(err),
            Self::UnsupportedBackend(_) | Self::Database(_) => None,
        }
    }

    /// Returns the namespaced error code, if any.
    pub fn error_code(&self) -> Option<&str> {
        self.domain().map(|err| err.error_code.as_str())
    }
}
