//! Server-side data access and business logic.
//!
//! # Architecture
//!
//! - **Service Layer** (`service/`) - One service per entity, wiring domain hooks into
//!   the generic data access
//! - **Data Layer** (`data/`) - Generic query compilation, persistence and error
//!   translation
//! - **Error Layer** (`error/`) - Error taxonomy and conversion to the wire error shape
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Startup** (`startup`) - Database connection, migrations and seeding

pub mod config;
pub mod data;
pub mod error;
pub mod service;
pub mod startup;
