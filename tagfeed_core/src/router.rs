//! Categorize-and-store orchestration.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::category::{Category, Classification, TtlKind, classify};
use crate::store::PostStore;
use crate::ttl::{midnight_ttl, week_ttl};

/// Composite list identifier: one category's posts for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKey {
    category: Category,
    date: String,
}

impl StoreKey {
    #[must_use]
    pub fn new(category: Category, now: NaiveDateTime) -> Self {
        Self {
            category,
            date: now.date().format("%Y-%m-%d").to_string(),
        }
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.category.wire_name(), self.date)
    }
}

/// Outcome of routing one inbound post. `Unclassified` means no side
/// effect occurred, which is distinct from a store failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Stored { key: String, ttl: u64 },
    Unclassified,
}

/// Routes classified posts into the store under date-scoped keys.
pub struct Router {
    store: Arc<dyn PostStore>,
}

impl Router {
    #[must_use]
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Classify `text` and append it under today's key for the matched
    /// category, then refresh the key's expiry.
    ///
    /// News categories expire at the end of `now`'s day, everything else
    /// one week after the last write. Exactly one append and one expiry
    /// call happen per classified post; a store failure propagates for
    /// this post only, with no retry or rollback.
    pub async fn categorize_and_store(
        &self,
        text: &str,
        now: NaiveDateTime,
    ) -> anyhow::Result<RouteOutcome> {
        let category = match classify(text) {
            Classification::Matched(category) => category,
            Classification::Unclassified => {
                debug!("no category marker in post, skipping");
                return Ok(RouteOutcome::Unclassified);
            }
        };

        let ttl = match category.ttl_kind() {
            TtlKind::Midnight => midnight_ttl(now),
            TtlKind::Week => week_ttl(),
        };

        let key = StoreKey::new(category, now).to_string();
        self.store.append(&key, text).await?;
        self.store.set_expiry(&key, ttl).await?;

        info!("stored post under {key} (ttl {ttl}s)");
        Ok(RouteOutcome::Stored { key, ttl })
    }
}
