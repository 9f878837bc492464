//! Transient key-value storage for crmlink
//!
//! Holds short-lived OAuth artifacts (pending authorizations, freshly issued
//! credentials) behind the [`KeyValueStore`] trait so the integration logic
//! does not care whether they live in process memory or in Redis.
//!
//! # Features
//!
//! - `redis`: enables [`RedisStore`] backed by `redis::aio::ConnectionManager`
//!
//! # Usage
//!
//! ```
//! use crmlink_config::StoreConfig;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), crmlink_store::StoreError> {
//! let store = crmlink_store::create_store(&StoreConfig::default()).await?;
//! store.put("pending:org:user", "{}".to_string(), Some(Duration::from_secs(600))).await?;
//! assert_eq!(store.get("pending:org:user").await?, Some("{}".to_string()));
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

pub mod error;
pub mod factory;
pub mod memory;
#[cfg(feature = "redis")]
pub mod redis_store;

pub use error::StoreError;
pub use factory::create_store;
pub use memory::MemoryStore;
#[cfg(feature = "redis")]
pub use redis_store::RedisStore;

/// Type alias for a boxed future that returns a store result
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// A string key-value store with optional per-entry expiry.
///
/// Expired entries must be invisible to `get`. `delete` of a missing key
/// succeeds. Writes overwrite unconditionally.
pub trait KeyValueStore: Send + Sync {
    /// Store `value` under `key`, expiring after `ttl` if given.
    fn put(&self, key: &str, value: String, ttl: Option<Duration>) -> BoxFuture<'_, ()>;

    /// Fetch the live value under `key`.
    fn get(&self, key: &str) -> BoxFuture<'_, Option<String>>;

    /// Remove `key` and return its live value, in one atomic step.
    /// Of several concurrent callers at most one sees `Some`.
    fn take(&self, key: &str) -> BoxFuture<'_, Option<String>>;

    /// Remove `key`.
    fn delete(&self, key: &str) -> BoxFuture<'_, ()>;
}
