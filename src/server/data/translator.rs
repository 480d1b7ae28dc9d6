//! Translation of persistence errors into the entity-namespaced domain taxonomy.
//!
//! Only conditions with a safe, generic message are translated. Everything else is
//! returned as `DataError::Database` unchanged so it reaches the unhandled-error path.

use sea_orm::{sqlx::postgres::PgDatabaseError, DbErr, RuntimeErr, SqlErr};
use std::fmt::Display;
use tracing::error;

use crate::server::error::data::{DataError, DomainError};

const SYNTAX_ERROR_MESSAGE: &str = "Syntax error";
const INVALID_INPUT_MESSAGE: &str = "Invalid text input params";
const PROTECTED_MESSAGE: &str = "The data is protected, please delete the relevant data first";

/// Low-level conditions the translator recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DbErrorKind {
    UniqueViolation,
    SyntaxError,
    InvalidTextRepresentation,
    ForeignKeyViolation,
}

/// Classifies a driver error code.
///
/// Covers PostgreSQL SQLSTATE codes and SQLite extended result codes. SQLite reports
/// syntax errors under the generic code `1`, so the message is inspected too.
pub fn classify_code(code: &str, message: &str) -> Option<DbErrorKind> {
    match code {
        "23505" | "2067" | "1555" => Some(DbErrorKind::UniqueViolation),
        "42601" => Some(DbErrorKind::SyntaxError),
        "22P02" | "20" => Some(DbErrorKind::InvalidTextRepresentation),
        "23503" | "787" => Some(DbErrorKind::ForeignKeyViolation),
        "1" if message.contains("syntax error") => Some(DbErrorKind::SyntaxError),
        _ => None,
    }
}

/// Driver-level details extracted from a `DbErr`.
struct DriverError {
    kind: DbErrorKind,
    /// PostgreSQL detail line when available, otherwise the driver message.
    detail: String,
}

fn driver_error(err: &DbErr) -> Option<DriverError> {
    let sqlx_err = match err {
        DbErr::Query(RuntimeErr::SqlxError(e)) | DbErr::Exec(RuntimeErr::SqlxError(e)) => e,
        _ => return sql_err_fallback(err),
    };
    let Some(db_err) = sqlx_err.as_database_error() else {
        return sql_err_fallback(err);
    };
    let message = db_err.message().to_string();
    let Some(kind) = db_err
        .code()
        .and_then(|code| classify_code(&code, &message))
    else {
        return sql_err_fallback(err);
    };
    let detail = db_err
        .try_downcast_ref::<PgDatabaseError>()
        .and_then(|pg| pg.detail())
        .map(str::to_string)
        .unwrap_or(message);

    Some(DriverError { kind, detail })
}

/// Falls back to SeaORM's own constraint classification.
fn sql_err_fallback(err: &DbErr) -> Option<DriverError> {
    match err.sql_err()? {
        SqlErr::UniqueConstraintViolation(detail) => Some(DriverError {
            kind: DbErrorKind::UniqueViolation,
            detail,
        }),
        SqlErr::ForeignKeyConstraintViolation(detail) => Some(DriverError {
            kind: DbErrorKind::ForeignKeyViolation,
            detail,
        }),
        _ => None,
    }
}

/// Removes quoting and bracket punctuation from a driver detail message.
///
/// `Key (email)=(jane@example.com) already exists.` becomes
/// `Key email=jane@example.com already exists.`
pub fn strip_detail(detail: &str) -> String {
    detail
        .chars()
        .filter(|c| !matches!(c, '\'' | '"' | '(' | ')' | '-'))
        .collect()
}

/// Turns a camelCase alias into a sentence-case display name.
///
/// `badmintonSession` becomes `Badminton session`.
pub fn display_name(alias: &str) -> String {
    let mut name = String::with_capacity(alias.len() + 4);
    for (i, c) in alias.chars().enumerate() {
        if i == 0 {
            name.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            name.push(' ');
            name.extend(c.to_lowercase());
        } else if c == '_' || c == '-' {
            name.push(' ');
        } else {
            name.push(c);
        }
    }
    name
}

/// Builds entity-namespaced domain errors and translates persistence errors.
#[derive(Clone, Debug)]
pub struct ErrorTranslator {
    code_prefix: String,
    display_name: String,
}

impl ErrorTranslator {
    /// Creates a translator for the entity known by `alias`.
    ///
    /// # Arguments
    /// - `alias` - Entity alias, e.g. `badmintonSession`
    pub fn new(alias: &str) -> Self {
        Self {
            code_prefix: alias
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
                .to_uppercase(),
            display_name: display_name(alias),
        }
    }

    /// Builds `<ALIAS>_<suffix>`.
    pub fn error_code(&self, suffix: &str) -> String {
        format!("{}_{}", self.code_prefix, suffix)
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Error raised when the target row does not exist.
    pub fn not_found(&self) -> DataError {
        DataError::NotFound(DomainError::new(
            self.error_code("NOT_FOUND"),
            format!("{} not found", self.display_name),
        ))
    }

    /// Error raised for pagination or sort input that cannot be queried.
    pub fn invalid_specification(&self, reason: impl Display) -> DataError {
        DataError::InvalidSpecification(DomainError::new(
            self.error_code("INVALID_SPECIFICATION"),
            reason.to_string(),
        ))
    }

    /// Translates a persistence error.
    ///
    /// # Returns
    /// - `DataError::Duplicate` - Unique violation, with the sanitized driver detail
    /// - `DataError::Query` - Syntax error or invalid input, with a generic message
    /// - `DataError::Protected` - Foreign key violation
    /// - `DataError::Database` - Any other error, unchanged
    pub fn translate(&self, err: DbErr) -> DataError {
        let Some(driver) = driver_error(&err) else {
            return DataError::Database(err);
        };

        match driver.kind {
            DbErrorKind::UniqueViolation => DataError::Duplicate(DomainError::new(
                self.error_code("DUPLICATE"),
                strip_detail(&driver.detail),
            )),
            DbErrorKind::SyntaxError => {
                error!(entity = %self.display_name, "Query syntax error: {}", err);
                DataError::Query(DomainError::new(
                    self.error_code("QUERY_DB_ERROR"),
                    SYNTAX_ERROR_MESSAGE,
                ))
            }
            DbErrorKind::InvalidTextRepresentation => {
                error!(entity = %self.display_name, "Invalid query input: {}", err);
                DataError::Query(DomainError::new(
                    self.error_code("QUERY_DB_ERROR"),
                    INVALID_INPUT_MESSAGE,
                ))
            }
            DbErrorKind::ForeignKeyViolation => {
                error!(entity = %self.display_name, "Foreign key violation: {}", err);
                DataError::Protected(DomainError::new(
                    self.error_code("PROTECTED"),
                    PROTECTED_MESSAGE,
                ))
            }
        }
    }
}
