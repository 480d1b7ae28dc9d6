use crate::server::{
    data::options::DataConfig,
    error::{config::ConfigError, AppError},
};

/// Maximum page size used when `PAGINATION` is not set.
pub const DEFAULT_PAGE_SIZE_LIMIT: u64 = 250;

pub struct Config {
    pub database_url: String,

    /// Upper bound for `pageSize` in paginated listings.
    pub max_page_size: u64,

    pub super_admin_email: Option<String>,
    pub super_admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            max_page_size: parse_page_size(std::env::var("PAGINATION").ok())?,
            super_admin_email: std::env::var("SUPER_ADMIN_EMAIL").ok(),
            super_admin_password: std::env::var("SUPER_ADMIN_PASSWORD").ok(),
        })
    }

    /// Configuration handed to every entity data-access instance.
    pub fn data_config(&self) -> DataConfig {
        DataConfig {
            max_page_size: self.max_page_size,
        }
    }
}

/// Parses the `PAGINATION` variable, falling back to the default when unset.
fn parse_page_size(value: Option<String>) -> Result<u64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_PAGE_SIZE_LIMIT);
    };

    match value.trim().parse::<u64>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "PAGINATION".to_string(),
            value,
        }),
    }
}
