//! SQL building blocks composed by the list pipeline.
//!
//! - `builder` - parameterized SELECT builder rooted at an entity alias
//! - `dialect` - backend specific fragments for search and date filters
//! - `filter` - filter map compiler
//! - `search` - free-text search group
//! - `pagination` - ordering, limit/offset and page metadata

pub mod builder;
pub mod dialect;
pub mod filter;
pub mod pagination;
pub mod search;
