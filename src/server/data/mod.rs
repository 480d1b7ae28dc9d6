//! Generic data-access layer shared by all entity services.
//!
//! `EntityDataAccess` in `access` implements retrieval, listing, mutation and deletion
//! once for any SeaORM entity. Listings are compiled to parameterized SQL by the
//! builders in `query`, persistence errors are mapped to the domain taxonomy by
//! `translator`, and domain services customize behaviour through `hooks`.

pub mod access;
pub mod hooks;
pub mod options;
pub mod query;
pub mod translator;
