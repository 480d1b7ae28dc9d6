//! Data-access backend for organizing badminton sessions.
//!
//! Users create sessions, other users request to join them, and accepted players
//! become members whose fees are settled after play. Every entity is served by the
//! same generic data-access layer in `server::data`.

pub mod model;
pub mod server;
