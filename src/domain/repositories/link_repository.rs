//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// Implementations must be safe to share between request tasks. Uniqueness of
/// `code` and atomicity of [`record_click`](Self::record_click) are the
/// store's responsibility, not the caller's.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`]
/// - [`crate::infrastructure::persistence::PgLinkRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link with zero clicks.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken. The insert
    /// and the uniqueness check happen atomically.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code without touching the click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments the click counter and returns the updated link.
    ///
    /// Returns `Ok(None)` if no link has this code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Lists links, most recently created first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, limit: i64) -> Result<Vec<Link>, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks that the backing store is reachable.
    async fn health_check(&self) -> Result<(), AppError>;

    /// Short backend name used in logs and health output.
    fn backend_name(&self) -> &'static str;
}
