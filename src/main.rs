use shuttleboard::server::{config::Config, error::AppError, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    tracing::info!("Connected to database and applied migrations");

    if let Some(admin) = startup::seed_super_admin(&db, &config).await? {
        tracing::info!("Created super admin with id {}", admin.id);
    }

    startup::log_summary(&db, &config).await?;

    Ok(())
}
