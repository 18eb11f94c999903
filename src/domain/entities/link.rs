//! Link entity representing a shortened URL mapping.

use chrono::{Local, NaiveDateTime, SubsecRound};

/// Wire format of [`Link::created_at`]: local time, second precision, no offset.
pub const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A short code together with its target URL and click counter.
///
/// `long_url` is kept exactly as submitted; redirects replay it verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub code: String,
    pub long_url: String,
    pub clicks: i64,
    pub created_at: NaiveDateTime,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(code: String, long_url: String, clicks: i64, created_at: NaiveDateTime) -> Self {
        Self {
            code,
            long_url,
            clicks,
            created_at,
        }
    }

    /// Builds a freshly created link: zero clicks, stamped with the current local time.
    pub fn from_new(new_link: NewLink) -> Self {
        Self::new(new_link.code, new_link.long_url, 0, now_timestamp())
    }

    /// Formats `created_at` with [`CREATED_AT_FORMAT`].
    pub fn created_at_formatted(&self) -> String {
        self.created_at.format(CREATED_AT_FORMAT).to_string()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub long_url: String,
}

/// Current local wall-clock time truncated to whole seconds.
pub fn now_timestamp() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(0)
}
