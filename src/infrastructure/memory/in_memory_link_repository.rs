//! Process-local link store backed by a concurrent hash map.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store that lives as long as the process.
///
/// Insertion goes through the map's entry API, so a taken code is rejected
/// under the same shard lock that would have inserted it. Click increments
/// hold the shard's write guard for the read-modify-write.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    links: DashMap<String, Link>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError> {
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Short code already exists",
                json!({ "code": new_link.code }),
            )),
            Entry::Vacant(slot) => {
                let link = Link::from_new(new_link);
                slot.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|link| link.value().clone()))
    }

    async fn record_click(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get_mut(code).map(|mut link| {
            link.clicks += 1;
            link.value().clone()
        }))
    }

    async fn list(&self, limit: i64) -> Result<Vec<Link>, AppError> {
        let mut links: Vec<Link> = self.links.iter().map(|e| e.value().clone()).collect();

        links.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.code.cmp(&b.code))
        });
        links.truncate(usize::try_from(limit).unwrap_or(0));

        Ok(links)
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.links.len() as i64)
    }

    async fn health_check(&self) -> Result<(), AppError> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
