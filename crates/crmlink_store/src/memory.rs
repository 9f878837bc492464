//! In-process store backend.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

use crate::{BoxFuture, KeyValueStore};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

/// A `HashMap` behind a tokio `RwLock`. Expired entries are invisible to
/// reads and are swept out on every write.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held, expired but not yet swept ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn put(&self, key: &str, value: String, ttl: Option<Duration>) -> BoxFuture<'_, ()> {
        let key = key.to_string();
        Box::pin(async move {
            let now = Instant::now();
            let expires_at = ttl.map(|ttl| now + ttl);
            let mut entries = self.entries.write().await;
            sweep_expired(&mut entries, now);
            debug!(%key, ?ttl, "memory store put");
            entries.insert(key, Entry { value, expires_at });
            Ok(())
        })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Option<String>> {
        let key = key.to_string();
        Box::pin(async move {
            let now = Instant::now();
            {
                let entries = self.entries.read().await;
                match entries.get(&key) {
                    None => return Ok(None),
                    Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
                    Some(_) => {}
                }
            }

            // Expired: re-check under the write lock, a fresh put may have raced us.
            let mut entries = self.entries.write().await;
            if entries.get(&key).is_some_and(|entry| entry.is_expired(now)) {
                debug!(%key, "memory store entry expired");
                entries.remove(&key);
            }
            Ok(entries
                .get(&key)
                .filter(|entry| !entry.is_expired(now))
                .map(|entry| entry.value.clone()))
        })
    }

    fn take(&self, key: &str) -> BoxFuture<'_, Option<String>> {
        let key = key.to_string();
        Box::pin(async move {
            let now = Instant::now();
            let removed = self.entries.write().await.remove(&key);
            Ok(removed
                .filter(|entry| !entry.is_expired(now))
                .map(|entry| entry.value))
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, ()> {
        let key = key.to_string();
        Box::pin(async move {
            self.entries.write().await.remove(&key);
            Ok(())
        })
    }
}

fn sweep_expired(entries: &mut HashMap<String, Entry>, now: Instant) {
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired(now));
    let swept = before - entries.len();
    if swept > 0 {
        debug!(swept, "memory store swept expired entries");
    }
}
