//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the ids of the rows they reference, so
//! dependencies are created first and passed in explicitly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let session = factory::badminton_session::create_session(&db, user.id).await?;
//!
//!     // Create with all dependencies
//!     let (user, session, member) = factory::helpers::create_member_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let session = factory::badminton_session::BadmintonSessionFactory::new(&db)
//!     .name("Sunday doubles")
//!     .status(SessionStatus::Started)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `badminton_session` - Create badminton session entities
//! - `member` - Create session member entities
//! - `request` - Create join request entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod badminton_session;
pub mod helpers;
pub mod member;
pub mod request;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use badminton_session::create_session;
pub use member::create_member;
pub use request::create_request;
pub use user::create_user;
