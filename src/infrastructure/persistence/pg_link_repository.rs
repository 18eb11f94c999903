//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::link::now_timestamp;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Row shape shared by every query below.
#[derive(sqlx::FromRow)]
struct LinkRow {
    code: String,
    long_url: String,
    clicks: i64,
    created_at: NaiveDateTime,
}

impl From<LinkRow> for Link {
    fn from(row: LinkRow) -> Self {
        Link::new(row.code, row.long_url, row.clicks, row.created_at)
    }
}

/// PostgreSQL repository for link storage and retrieval.
///
/// The primary key on `code` enforces uniqueness; a duplicate insert surfaces
/// as [`AppError::Conflict`] via [`crate::error::map_sqlx_error`]. Clicks are
/// incremented in a single `UPDATE ... RETURNING` statement.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            INSERT INTO links (code, long_url, clicks, created_at)
            VALUES ($1, $2, 0, $3)
            RETURNING code, long_url, clicks, created_at
            "#,
        )
        .bind(&new_link.code)
        .bind(&new_link.long_url)
        .bind(now_timestamp())
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, long_url, clicks, created_at
            FROM links
            WHERE code = $1
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        let row = sqlx::query_as::<_, LinkRow>(
            r#"
            UPDATE links
            SET clicks = clicks + 1
            WHERE code = $1
            RETURNING code, long_url, clicks, created_at
            "#,
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Link::from))
    }

    async fn list(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let rows = sqlx::query_as::<_, LinkRow>(
            r#"
            SELECT code, long_url, clicks, created_at
            FROM links
            ORDER BY created_at DESC, code ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Link::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "postgres"
    }
}
