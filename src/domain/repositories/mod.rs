//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! [`crate::infrastructure`]:
//!
//! - [`crate::infrastructure::memory::InMemoryLinkRepository`] - process-local store
//! - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL store
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
