//! Link creation, resolution and statistics service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{debug, info, warn};

/// Maximum number of generated codes tried before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Link service over a runtime-selected store.
pub type DynLinkService = LinkService<dyn LinkRepository>;

/// Service for creating, resolving and inspecting short links.
///
/// Owns the store handle; handlers never talk to the repository directly.
pub struct LinkService<L: LinkRepository + ?Sized> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `long_url`.
    ///
    /// The URL is validated but stored exactly as given. Every call creates a
    /// new link, even for a URL that was shortened before.
    ///
    /// # Code Generation
    ///
    /// A random code is inserted directly; the store rejects a taken code with
    /// [`AppError::Conflict`] and a new code is drawn, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty or not an absolute
    /// URL with a host.
    ///
    /// Returns [`AppError::Internal`] if no free code was found or the store fails.
    pub async fn create_short_link(&self, long_url: String) -> Result<Link, AppError> {
        validate_url(&long_url)
            .map_err(|e| AppError::bad_request(e.to_string(), json!({ "field": "url" })))?;

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code()?,
                long_url: long_url.clone(),
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => {
                    info!(code = %link.code, url = %link.long_url, "Short link created");
                    metrics::counter!("links_created_total").increment(1);
                    return Ok(link);
                }
                Err(AppError::Conflict { .. }) => {
                    warn!(attempt, "Short code collision, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code for a redirect, counting one click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        match self.link_repository.record_click(code).await? {
            Some(link) => {
                debug!(code, clicks = link.clicks, "Redirecting");
                metrics::counter!("redirects_total").increment(1);
                Ok(link)
            }
            None => {
                metrics::counter!("link_not_found_total").increment(1);
                Err(not_found(code))
            }
        }
    }

    /// Returns the link for `code` without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown.
    pub async fn get_stats(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| not_found(code))
    }

    /// Lists the most recently created links.
    pub async fn list_links(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        self.link_repository.list(limit.max(0)).await
    }

    /// Counts stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Probes the backing store.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.link_repository.health_check().await
    }

    /// Name of the backing store.
    pub fn backend_name(&self) -> &'static str {
        self.link_repository.backend_name()
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
