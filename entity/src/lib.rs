//! SeaORM entity definitions for the shuttleboard schema.
//!
//! Column names are stored in camelCase (`createdAt`, `startTime`, ...) while the Rust
//! fields stay snake_case. Every table carries the base columns `id`, `createdAt`,
//! `updatedAt` and the nullable soft delete marker `deletedAt`.

pub mod prelude;

pub mod badminton_session;
pub mod member;
pub mod request;
pub mod sea_orm_active_enums;
pub mod user;
