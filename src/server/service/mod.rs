//! Entity services.
//!
//! Each service owns an `EntityDataAccess` configured with its alias, column
//! conventions and domain hooks, and adds the few lookups its callers need on top
//! of the generic operations exposed through `data()`.

pub mod badminton_session;
pub mod member;
pub mod request;
pub mod user;
