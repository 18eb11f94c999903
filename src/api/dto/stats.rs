//! DTOs for link statistics.

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use crate::domain::entities::Link;
use crate::domain::entities::link::CREATED_AT_FORMAT;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub url: String,
    pub clicks: i64,
    #[serde(serialize_with = "serialize_created_at")]
    pub created_at: NaiveDateTime,
}

impl From<Link> for StatsResponse {
    fn from(link: Link) -> Self {
        Self {
            url: link.long_url,
            clicks: link.clicks,
            created_at: link.created_at,
        }
    }
}

fn serialize_created_at<S: Serializer>(
    value: &NaiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&value.format(CREATED_AT_FORMAT))
}
