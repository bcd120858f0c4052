#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Redis-backed implementation of the core `PostStore` interface.
//!
//! Day lists are plain Redis lists (RPUSH / LRANGE) with per-key EXPIRE,
//! so expired days disappear on their own and appends to the same key
//! are serialized by Redis itself.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tagfeed_core::PostStore;
use tracing::{debug, info};

/// Post store over a single Redis connection manager.
///
/// Constructed once at startup and injected where needed; the manager
/// multiplexes and reconnects internally, so clones are cheap and the
/// handle is safe to share across handler tasks.
#[derive(Clone)]
pub struct RedisPostStore {
    conn: ConnectionManager,
}

impl RedisPostStore {
    /// Open a client for `url` and establish the managed connection.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let client = redis::Client::open(url)?;
        let conn = ConnectionManager::new(client).await?;
        info!("connected to Redis at {url}");
        Ok(Self { conn })
    }
}

#[async_trait]
impl PostStore for RedisPostStore {
    async fn append(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut conn = self.conn.clone();
        let len: i64 = conn.rpush(key, value).await?;
        debug!("RPUSH {key} -> {len} entries");
        Ok(())
    }

    async fn set_expiry(&self, key: &str, seconds: u64) -> anyhow::Result<()> {
        let mut conn = self.conn.clone();
        // EXPIRE 0 deletes immediately, which is the wanted behavior for
        // a post landing exactly at the end-of-day boundary.
        let _: bool = conn.expire(key, i64::try_from(seconds)?).await?;
        Ok(())
    }

    async fn range(&self, key: &str) -> anyhow::Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let entries: Vec<String> = conn.lrange(key, 0, -1).await?;
        Ok(entries)
    }
}
