//! Redis store backend.

use redis::{aio::ConnectionManager, AsyncCommands, Client};
use std::time::Duration;
use tracing::{debug, info};

use crate::{BoxFuture, KeyValueStore, StoreError};

/// Store backed by a multiplexed, auto-reconnecting Redis connection.
#[derive(Clone)]
pub struct RedisStore {
    connection_manager: ConnectionManager,
}

impl RedisStore {
    /// Connects to `redis_url` (e.g. `redis://127.0.0.1:6379/0`).
    pub async fn connect(redis_url: &str) -> Result<Self, StoreError> {
        let client = Client::open(redis_url)?;
        let connection_manager = ConnectionManager::new(client).await?;
        info!("Redis store connected");
        Ok(Self { connection_manager })
    }
}

/// Seconds for `SET EX`. Redis rejects 0, so sub-second TTLs round up to 1.
fn expiry_secs(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

impl KeyValueStore for RedisStore {
    fn put(&self, key: &str, value: String, ttl: Option<Duration>) -> BoxFuture<'_, ()> {
        let key = key.to_string();
        Box::pin(async move {
            let mut conn = self.connection_manager.clone();
            match ttl {
                Some(ttl) => {
                    let secs = expiry_secs(ttl);
                    debug!(%key, secs, "redis SET EX");
                    conn.set_ex::<_, _, ()>(&key, value, secs).await?;
                }
                None => {
                    debug!(%key, "redis SET");
                    conn.set::<_, _, ()>(&key, value).await?;
                }
            }
            Ok(())
        })
    }

    fn get(&self, key: &str) -> BoxFuture<'_, Option<String>> {
        let key = key.to_string();
        Box::pin(async move {
            let mut conn = self.connection_manager.clone();
            let value: Option<String> = conn.get(&key).await?;
            Ok(value)
        })
    }

    fn take(&self, key: &str) -> BoxFuture<'_, Option<String>> {
        let key = key.to_string();
        Box::pin(async move {
            let mut conn = self.connection_manager.clone();
            let value: Option<String> = conn.get_del(&key).await?;
            debug!(%key, found = value.is_some(), "redis GETDEL");
            Ok(value)
        })
    }

    fn delete(&self, key: &str) -> BoxFuture<'_, ()> {
        let key = key.to_string();
        Box::pin(async move {
            let mut conn = self.connection_manager.clone();
            let removed: i64 = conn.del(&key).await?;
            debug!(%key, removed, "redis DEL");
            Ok(())
        })
    }
}
