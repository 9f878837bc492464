// --- File: crates/crmlink_hubspot/src/auth.rs ---
//! OAuth `state` handling and authorization URL construction.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use constant_time_eq::constant_time_eq;
use crmlink_config::HubspotConfig;
use ring::rand::{SecureRandom, SystemRandom};

use crate::error::HubspotError;
use crate::models::PendingAuthorization;

const CORRELATION_TOKEN_BYTES: usize = 32;

/// 32 random bytes, base64url without padding.
pub fn generate_correlation_token() -> Result<String, HubspotError> {
    let rng = SystemRandom::new();
    let mut bytes = [0u8; CORRELATION_TOKEN_BYTES];
    rng.fill(&mut bytes)
        .map_err(|_| HubspotError::Internal("failed to generate correlation token".to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

pub fn encode_state(pending: &PendingAuthorization) -> Result<String, HubspotError> {
    let json = serde_json::to_vec(pending)?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}

/// Decodes a `state` parameter. Padded input is accepted; anything that
/// is not base64url JSON of a [`PendingAuthorization`] yields `None`.
pub fn decode_state(state: &str) -> Option<PendingAuthorization> {
    let bytes = URL_SAFE_NO_PAD.decode(state.trim_end_matches('=')).ok()?;
    serde_json::from_slice(&bytes).ok()
}

pub fn tokens_match(expected: &str, presented: &str) -> bool {
    constant_time_eq(expected.as_bytes(), presented.as_bytes())
}

/// `{authorization_url}?client_id=..&scope=..&redirect_uri=..&state=..`
pub fn authorization_url(config: &HubspotConfig, state: &str) -> Result<String, HubspotError> {
    let query = serde_urlencoded::to_string([
        ("client_id", config.client_id.as_str()),
        ("scope", config.scope.as_str()),
        ("redirect_uri", config.redirect_uri.as_str()),
        ("state", state),
    ])
    .map_err(|e| HubspotError::Internal(format!("failed to encode authorization URL: {e}")))?;
    Ok(format!("{}?{}", config.authorization_url, query))
}
