//! Error types and conversion to the wire error shape.
//!
//! `AppError` is the top-level error type of the application. It wraps the data layer
//! taxonomy, raw database errors and configuration errors, and converts into the
//! `ErrorDto` returned to callers. Errors without a user-safe payload are logged and
//! reported with a generic message to avoid leaking internals.

pub mod config;
pub mod data;

use thiserror::Error;
use tracing::error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, data::DataError},
};

const INTERNAL_ERROR_CODE: &str = "INTERNAL_SERVER_ERROR";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most
/// variants use `#[from]` for automatic error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Error raised by the data-access layer or a domain service.
    ///
    /// Translated variants keep their namespaced code and message when converted
    /// into an `ErrorDto`.
    #[error(transparent)]
    DataErr(#[from] DataError),

    /// Database operation error from SeaORM outside the data-access layer, such as
    /// connecting or running migrations.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}

impl AppError {
    /// Converts the error into the wire error shape.
    ///
    /// Domain errors expose their code and message. Everything else is logged with
    /// full details and reported as a generic internal error.
    ///
    /// # Returns
    /// - `ErrorDto` - Error body safe to return to callers
    pub fn to_error_dto(&self) -> ErrorDto {
        if let AppError::DataErr(err) = self {
            if let Some(domain) = err.domain() {
                return domain.clone().into();
            }
        }

        error!("{}", self);

        ErrorDto {
            error_code: INTERNAL_ERROR_CODE.to_string(),
            message: "Internal server error".to_string(),
            data: None,
        }
    }
}
