//! Infrastructure layer: concrete link stores.
//!
//! # Modules
//!
//! - [`memory`] - Process-local store (default)
//! - [`persistence`] - PostgreSQL store, enabled by `DATABASE_URL`

pub mod memory;
pub mod persistence;
