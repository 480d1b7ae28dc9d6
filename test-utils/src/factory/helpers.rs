//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// This atomic counter ensures each factory-created entity gets unique
/// names and emails so unique constraints never collide between rows.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a session member together with the user and session it belongs to.
///
/// The member's user also owns the session.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, session, member))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_member_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::badminton_session::Model,
        entity::member::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let session = crate::factory::badminton_session::create_session(db, user.id).await?;
    let member = crate::factory::member::create_member(db, user.id, session.id).await?;

    Ok((user, session, member))
}

/// Creates a pending join request together with its requester and session.
///
/// The session is owned by a second user so the requester is an outsider.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((requester, session, request))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_request_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::badminton_session::Model,
        entity::request::Model,
    ),
    DbErr,
> {
    let owner = crate::factory::user::create_user(db).await?;
    let requester = crate::factory::user::create_user(db).await?;
    let session = crate::factory::badminton_session::create_session(db, owner.id).await?;
    let request = crate::factory::request::create_request(db, requester.id, session.id).await?;

    Ok((requester, session, request))
}
