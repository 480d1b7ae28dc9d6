use entity::{sea_orm_active_enums::UserState, user};
use sea_orm::{ActiveValue, DatabaseConnection};
use tracing::info;

use crate::server::{
    config::Config,
    data::options::QueryOptions,
    error::AppError,
    service::user::UserService,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration,
/// then runs all pending SeaORM migrations so the schema is up-to-date. This must
/// complete before any service touches the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the super-admin account on an empty user table.
///
/// Does nothing when any user row exists, soft deleted ones included, or when
/// `SUPER_ADMIN_EMAIL` and `SUPER_ADMIN_PASSWORD` are not both configured.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration holding the seed credentials
///
/// # Returns
/// - `Ok(Some(user))` - The seeded super admin
/// - `Ok(None)` - Nothing to seed
/// - `Err(AppError::DataErr)` - Counting or inserting users failed
pub async fn seed_super_admin(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<Option<user::Model>, AppError> {
    let (Some(email), Some(password)) = (&config.super_admin_email, &config.super_admin_password)
    else {
        return Ok(None);
    };

    let users = UserService::new(db, &config.data_config());
    if users.data().count_all(QueryOptions::with_deleted()).await? > 0 {
        return Ok(None);
    }

    let admin = users
        .data()
        .create(user::ActiveModel {
            email: ActiveValue::Set(Some(email.clone())),
            display_name: ActiveValue::Set(Some("Super Admin".to_string())),
            password: ActiveValue::Set(password.clone()),
            state: ActiveValue::Set(UserState::Active),
            ..Default::default()
        })
        .await?;

    info!("Seeded super admin {}", email);

    Ok(Some(admin))
}

/// Logs the number of live rows per entity.
pub async fn log_summary(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    use crate::server::service::{
        badminton_session::BadmintonSessionService, member::MemberService,
        request::RequestService,
    };

    let data_config = config.data_config();
    let users = UserService::new(db, &data_config)
        .data()
        .count_all(QueryOptions::default())
        .await?;
    let sessions = BadmintonSessionService::new(db, &data_config)
        .data()
        .count_all(QueryOptions::default())
        .await?;
    let members = MemberService::new(db, &data_config)
        .data()
        .count_all(QueryOptions::default())
        .await?;
    let requests = RequestService::new(db, &data_config)
        .data()
        .count_all(QueryOptions::default())
        .await?;

    info!(users, sessions, members, requests, "Database ready");

    Ok(())
}
