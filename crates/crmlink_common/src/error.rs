// --- File: crates/crmlink_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all crmlink errors.
///
/// Integration crates define their own error enums and implement
/// `From<TheirError> for CrmlinkError`; handlers return `CrmlinkError`.
#[derive(Error, Debug)]
pub enum CrmlinkError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The OAuth flow was rejected (denied consent, state mismatch, ...)
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The key-value store failed
    #[error("Store error: {0}")]
    StoreError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    #[error("Not found: {0}")]
    NotFoundError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for CrmlinkError {
    fn status_code(&self) -> u16 {
        match self {
            CrmlinkError::HttpError(_) => 500,
            CrmlinkError::ConfigError(_) => 500,
            CrmlinkError::AuthError(_) => 400,
            CrmlinkError::ValidationError(_) => 400,
            CrmlinkError::StoreError(_) => 500,
            CrmlinkError::ExternalServiceError { .. } => 502,
            CrmlinkError::NotFoundError(_) => 400,
            CrmlinkError::InternalError(_) => 500,
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> CrmlinkError {
    CrmlinkError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> CrmlinkError {
    CrmlinkError::ValidationError(message.to_string())
}

pub fn auth_error<T: fmt::Display>(message: T) -> CrmlinkError {
    CrmlinkError::AuthError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> CrmlinkError {
    CrmlinkError::NotFoundError(message.to_string())
}

pub fn store_error<T: fmt::Display>(message: T) -> CrmlinkError {
    CrmlinkError::StoreError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> CrmlinkError {
    CrmlinkError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> CrmlinkError {
    CrmlinkError::InternalError(message.to_string())
}
