// --- File: crates/crmlink_common/src/http/client.rs ---
use once_cell::sync::Lazy;
use reqwest::{Client, Error as ReqwestError};
use std::time::Duration;

/// Default timeout for outbound HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Shared HTTP client with the default timeout.
pub static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    create_client(DEFAULT_TIMEOUT_SECS, true).unwrap_or_else(|err| {
        tracing::error!("Failed to build HTTP client with timeout, using defaults: {}", err);
        Client::new()
    })
});

/// Creates a new HTTP client with a timeout and redirect policy.
pub fn create_client(timeout_secs: u64, follow_redirects: bool) -> Result<Client, ReqwestError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .redirect(if follow_redirects {
            reqwest::redirect::Policy::default()
        } else {
            reqwest::redirect::Policy::none()
        })
        .build()
}

/// Returns the shared client, or a dedicated one when a non-default timeout is requested.
pub fn client_with_timeout(timeout_secs: Option<u64>) -> Result<Client, ReqwestError> {
    match timeout_secs {
        Some(secs) if secs != DEFAULT_TIMEOUT_SECS => create_client(secs, true),
        _ => Ok(HTTP_CLIENT.clone()),
    }
}
