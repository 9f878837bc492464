// --- File: crates/crmlink_hubspot/src/error.rs ---
use crmlink_common::{
    auth_error, config_error, external_service_error, internal_error, not_found, store_error,
    validation_error, CrmlinkError, HttpStatusCode,
};
use crmlink_store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HubspotError {
    #[error("Authorization denied by HubSpot: {0}")]
    ProviderDenied(String),
    #[error("State does not match.")]
    StateMismatch,
    #[error("No credentials found.")]
    NoCredentials,
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),
    #[error("HTTP request to HubSpot failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Token exchange failed with status {status}: {message}")]
    TokenExchange { status: u16, message: String },
    #[error("Failed to parse HubSpot response: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("HubSpot configuration error: {0}")]
    Config(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl HttpStatusCode for HubspotError {
    fn status_code(&self) -> u16 {
        match self {
            HubspotError::ProviderDenied(_)
            | HubspotError::StateMismatch
            | HubspotError::NoCredentials
            | HubspotError::MissingParameter(_)
            | HubspotError::InvalidCredentials(_) => 400,
            HubspotError::TokenExchange { .. } => 502,
            HubspotError::Transport(_)
            | HubspotError::Parse(_)
            | HubspotError::Store(_)
            | HubspotError::Config(_)
            | HubspotError::Internal(_) => 500,
        }
    }
}

impl From<HubspotError> for CrmlinkError {
    fn from(err: HubspotError) -> Self {
        let message = err.to_string();
        match err {
            HubspotError::ProviderDenied(_) | HubspotError::StateMismatch => auth_error(message),
            HubspotError::NoCredentials => not_found(message),
            HubspotError::MissingParameter(_) | HubspotError::InvalidCredentials(_) => {
                validation_error(message)
            }
            HubspotError::Transport(_) => CrmlinkError::HttpError(message),
            HubspotError::TokenExchange { .. } => external_service_error("HubSpot", message),
            HubspotError::Store(_) => store_error(message),
            HubspotError::Config(_) => config_error(message),
            HubspotError::Parse(_) | HubspotError::Internal(_) => internal_error(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversion_keeps_status_code() {
        let cases = [
            HubspotError::ProviderDenied("access_denied".into()),
            HubspotError::StateMismatch,
            HubspotError::NoCredentials,
            HubspotError::MissingParameter("code"),
            HubspotError::InvalidCredentials("not json".into()),
            HubspotError::TokenExchange {
                status: 401,
                message: "bad client".into(),
            },
            HubspotError::Store(StoreError::Backend("down".into())),
            HubspotError::Internal("rng".into()),
        ];
        for err in cases {
            let expected = err.status_code();
            assert_eq!(CrmlinkError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn token_exchange_failure_names_the_provider() {
        let err = CrmlinkError::from(HubspotError::TokenExchange {
            status: 401,
            message: "bad client".into(),
        });
        assert_eq!(
            err.to_string(),
            "External service error: HubSpot - Token exchange failed with status 401: bad client"
        );
    }

    #[test]
    fn user_facing_messages() {
        assert_eq!(HubspotError::StateMismatch.to_string(), "State does not match.");
        assert_eq!(HubspotError::NoCredentials.to_string(), "No credentials found.");
    }
}
