//! Read-back of a day's stored posts.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::debug;

use crate::category::Category;
use crate::router::StoreKey;
use crate::store::PostStore;

/// One day's entries for a category. An empty day is an explicit
/// variant so callers cannot mistake it for a successful fetch with
/// content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayEntries {
    /// Ordered entries stored today, oldest first.
    Entries(Vec<String>),
    /// Nothing stored under today's key (absent or expired).
    NothingToday,
}

/// Reads the full day list for a category.
pub struct Retrieval {
    store: Arc<dyn PostStore>,
}

impl Retrieval {
    #[must_use]
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }

    /// Fetch every entry stored under `category` for `now`'s calendar
    /// day, in append order. No pagination; the whole day comes back in
    /// one call.
    pub async fn today(
        &self,
        category: Category,
        now: NaiveDateTime,
    ) -> anyhow::Result<DayEntries> {
        let key = StoreKey::new(category, now).to_string();
        let entries = self.store.range(&key).await?;

        if entries.is_empty() {
            debug!("no entries under {key}");
            return Ok(DayEntries::NothingToday);
        }
        Ok(DayEntries::Entries(entries))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::store::testing::MemoryPostStore;
    use chrono::NaiveDate;

    fn jan_10() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 10)
            .and_then(|d| d.and_hms_opt(15, 30, 0))
            .expect("valid test timestamp")
    }

    #[tokio::test]
    async fn empty_day_is_a_distinct_signal() {
        let store = Arc::new(MemoryPostStore::default());
        let retrieval = Retrieval::new(store);

        let result = retrieval
            .today(Category::Jobs, jan_10())
            .await
            .expect("range call failed");

        assert_eq!(result, DayEntries::NothingToday);
    }

    #[tokio::test]
    async fn returns_entries_in_append_order() {
        let store = Arc::new(MemoryPostStore::default());
        for text in ["T1 #job", "T2 #job"] {
            store
                .append("jobs:2024-01-10", text)
                .await
                .expect("append failed");
        }
        let retrieval = Retrieval::new(store);

        let result = retrieval
            .today(Category::Jobs, jan_10())
            .await
            .expect("range call failed");

        assert_eq!(
            result,
            DayEntries::Entries(vec!["T1 #job".to_string(), "T2 #job".to_string()])
        );
    }

    #[tokio::test]
    async fn reads_only_the_requested_category() {
        let store = Arc::new(MemoryPostStore::default());
        store
            .append("events:2024-01-10", "fest #event")
            .await
            .expect("append failed");
        let retrieval = Retrieval::new(store);

        assert_eq!(
            retrieval
                .today(Category::Jobs, jan_10())
                .await
                .expect("range call failed"),
            DayEntries::NothingToday
        );
        assert_eq!(
            retrieval
                .today(Category::Events, jan_10())
                .await
                .expect("range call failed"),
            DayEntries::Entries(vec!["fest #event".to_string()])
        );
    }
}
