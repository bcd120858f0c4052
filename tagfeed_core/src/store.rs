//! Narrow interface over the external key-value list store.

use async_trait::async_trait;

/// Append-only list store with per-key expiry.
///
/// Keys and values are strings; list order is append order. Concurrent
/// appends to the same key are serialized by the store's own append
/// primitive, so callers need no coordination of their own.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Append `value` to the end of the list at `key`, creating the key
    /// if it does not exist yet.
    async fn append(&self, key: &str, value: &str) -> anyhow::Result<()>;

    /// Set or refresh the key's time-to-live in seconds.
    async fn set_expiry(&self, key: &str, seconds: u64) -> anyhow::Result<()>;

    /// Full ordered contents of the list at `key`; empty when absent.
    async fn range(&self, key: &str) -> anyhow::Result<Vec<String>>;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::PostStore;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// In-memory `PostStore` double recording appends and expiry calls.
    #[derive(Default)]
    pub struct MemoryPostStore {
        pub lists: Mutex<HashMap<String, Vec<String>>>,
        pub ttls: Mutex<HashMap<String, u64>>,
    }

    #[async_trait]
    impl PostStore for MemoryPostStore {
        async fn append(&self, key: &str, value: &str) -> anyhow::Result<()> {
            let mut lists = self.lists.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
            lists.entry(key.to_string()).or_default().push(value.to_string());
            Ok(())
        }

        async fn set_expiry(&self, key: &str, seconds: u64) -> anyhow::Result<()> {
            let mut ttls = self.ttls.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
            ttls.insert(key.to_string(), seconds);
            Ok(())
        }

        async fn range(&self, key: &str) -> anyhow::Result<Vec<String>> {
            let lists = self.lists.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
            Ok(lists.get(key).cloned().unwrap_or_default())
        }
    }

    /// Store double whose every call fails, for error-propagation tests.
    pub struct FailingPostStore;

    #[async_trait]
    impl PostStore for FailingPostStore {
        async fn append(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("store unavailable")
        }

        async fn set_expiry(&self, _key: &str, _seconds: u64) -> anyhow::Result<()> {
            anyhow::bail!("store unavailable")
        }

        async fn range(&self, _key: &str) -> anyhow::Result<Vec<String>> {
            anyhow::bail!("store unavailable")
        }
    }
}
