//! Factory for creating store backends from configuration

use crmlink_config::{StoreBackend, StoreConfig};
use std::sync::Arc;
use tracing::info;

use crate::{KeyValueStore, MemoryStore, StoreError};

/// Builds the store selected by `config.backend`.
///
/// # Errors
///
/// * `redis` selected without `redis_url`
/// * `redis` selected but the crate was built without the `redis` feature
/// * the Redis connection fails
pub async fn create_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    match config.backend {
        StoreBackend::Memory => {
            info!("Using in-memory store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Redis => create_redis_store(config).await,
    }
}

#[cfg(feature = "redis")]
async fn create_redis_store(config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    let url = config
        .redis_url
        .as_deref()
        .ok_or_else(|| StoreError::Config("store.redis_url is required for the redis backend".to_string()))?;
    info!("Using Redis store");
    Ok(Arc::new(crate::RedisStore::connect(url).await?))
}

#[cfg(not(feature = "redis"))]
async fn create_redis_store(_config: &StoreConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    Err(StoreError::Config(
        "redis backend requested but crmlink-store was built without the `redis` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn default_config_builds_memory_store() {
        let store = create_store(&StoreConfig::default()).await.unwrap();
        store.put("k", "v".to_string(), None).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some("v".to_string()));
    }

    #[tokio::test]
    async fn redis_without_url_is_a_config_error() {
        let config = StoreConfig {
            backend: StoreBackend::Redis,
            redis_url: None,
        };
        let result = create_store(&config).await;
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[cfg(not(feature = "redis"))]
    #[tokio::test]
    async fn redis_without_the_feature_is_a_config_error() {
        let config = StoreConfig {
            backend: StoreBackend::Redis,
            redis_url: Some("redis://127.0.0.1:6379/0".to_string()),
        };
        let result = create_store(&config).await;
        assert!(matches!(result, Err(StoreError::Config(_))));
    }

    #[cfg(feature = "redis")]
    #[tokio::test]
    async fn redis_with_url_goes_through_the_redis_client() {
        let config = StoreConfig {
            backend: StoreBackend::Redis,
            redis_url: Some("not-a-redis-url".to_string()),
        };
        let result = create_store(&config).await;
        assert!(matches!(result, Err(StoreError::Redis(_))));
    }
}
