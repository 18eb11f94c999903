//! Domain layer containing the link entity and the storage contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependencies on HTTP or on a concrete store.
//! Implementations of [`repositories::LinkRepository`] live in
//! [`crate::infrastructure`].

pub mod entities;
pub mod repositories;
