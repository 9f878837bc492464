//! Error types for the key-value store

use thiserror::Error;

/// Errors that can occur when talking to a store backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected or failed an operation
    #[error("Store backend error: {0}")]
    Backend(String),

    /// The store configuration is missing or invalid
    #[error("Store configuration error: {0}")]
    Config(String),

    #[cfg(feature = "redis")]
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}
