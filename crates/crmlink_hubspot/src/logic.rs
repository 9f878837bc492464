// --- File: crates/crmlink_hubspot/src/logic.rs ---
use crmlink_common::{client_with_timeout, IntegrationItem};
use crmlink_config::{AppConfig, HubspotConfig};
use crmlink_store::KeyValueStore;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::auth;
use crate::error::HubspotError;
use crate::models::{CallbackQuery, ContactsPage, Credentials, HubspotContact, PendingAuthorization};

/// Store key of the pending authorization for a user within an org.
pub fn pending_key(org_id: &str, user_id: &str) -> String {
    format!("pending:{org_id}:{user_id}")
}

/// Store key of the not-yet-consumed credentials for a user within an org.
pub fn credentials_key(org_id: &str, user_id: &str) -> String {
    format!("creds:{org_id}:{user_id}")
}

fn require<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str, HubspotError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(HubspotError::MissingParameter(name)),
    }
}

/// The HubSpot OAuth2 flow and contact import.
pub struct HubspotService {
    config: HubspotConfig,
    store: Arc<dyn KeyValueStore>,
    http: Client,
}

impl HubspotService {
    pub fn new(config: HubspotConfig, store: Arc<dyn KeyValueStore>, http: Client) -> Self {
        Self { config, store, http }
    }

    /// Builds the service from the `hubspot` config section.
    pub fn from_app_config(
        config: &AppConfig,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, HubspotError> {
        let hubspot = config
            .hubspot
            .clone()
            .ok_or_else(|| HubspotError::Config("hubspot section is missing".to_string()))?;
        let http = client_with_timeout(hubspot.request_timeout_secs)?;
        Ok(Self::new(hubspot, store, http))
    }

    /// Records a pending authorization and returns the consent URL to send the user to.
    pub async fn initiate(&self, user_id: &str, org_id: &str) -> Result<String, HubspotError> {
        let user_id = require(Some(user_id), "user_id")?;
        let org_id = require(Some(org_id), "org_id")?;

        let pending = PendingAuthorization {
            correlation_token: auth::generate_correlation_token()?,
            user_id: user_id.to_string(),
            org_id: org_id.to_string(),
        };
        let state = auth::encode_state(&pending)?;
        let url = auth::authorization_url(&self.config, &state)?;

        self.store
            .put(
                &pending_key(org_id, user_id),
                serde_json::to_string(&pending)?,
                Some(Duration::from_secs(self.config.state_ttl_secs)),
            )
            .await?;

        info!(%org_id, %user_id, "HubSpot authorization initiated");
        Ok(url)
    }

    /// Validates the callback against the pending authorization and stores
    /// the exchanged credentials.
    pub async fn handle_callback(&self, query: &CallbackQuery) -> Result<(), HubspotError> {
        if let Some(error) = query.error.as_deref() {
            let reason = query.error_description.clone().unwrap_or_else(|| error.to_string());
            warn!(%error, "HubSpot denied authorization");
            return Err(HubspotError::ProviderDenied(reason));
        }

        let state = require(query.state.as_deref(), "state")?;
        let code = require(query.code.as_deref(), "code")?;

        let presented = auth::decode_state(state).ok_or_else(|| {
            warn!("Callback state could not be decoded");
            HubspotError::StateMismatch
        })?;
        let key = pending_key(&presented.org_id, &presented.user_id);

        let stored = self
            .store
            .get(&key)
            .await?
            .and_then(|raw| serde_json::from_str::<PendingAuthorization>(&raw).ok());
        let matches = stored.is_some_and(|pending| {
            auth::tokens_match(&pending.correlation_token, &presented.correlation_token)
        });
        if !matches {
            warn!(org_id = %presented.org_id, user_id = %presented.user_id, "Callback state does not match a pending authorization");
            return Err(HubspotError::StateMismatch);
        }

        // Both run to completion; the pending entry is gone even if the exchange fails.
        let (exchange, deletion) = tokio::join!(self.exchange_code(code), self.store.delete(&key));
        let credentials = exchange?;
        deletion?;

        self.store
            .put(
                &credentials_key(&presented.org_id, &presented.user_id),
                credentials.to_string(),
                Some(Duration::from_secs(self.config.credentials_ttl_secs)),
            )
            .await?;

        info!(org_id = %presented.org_id, user_id = %presented.user_id, "HubSpot credentials stored");
        Ok(())
    }

    async fn exchange_code(&self, code: &str) -> Result<Value, HubspotError> {
        debug!(token_url = %self.config.token_url, "Exchanging authorization code");
        let response = self
            .http
            .post(&self.config.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "HubSpot token endpoint rejected the code");
            return Err(HubspotError::TokenExchange {
                status: status.as_u16(),
                message: body,
            });
        }

        let credentials: Value = serde_json::from_str(&body)?;
        if credentials.get("access_token").and_then(Value::as_str).is_none() {
            return Err(HubspotError::TokenExchange {
                status: status.as_u16(),
                message: "response did not contain an access_token".to_string(),
            });
        }
        Ok(credentials)
    }

    /// Hands out the stored credentials once. The entry is removed atomically,
    /// so concurrent callers cannot both receive it.
    pub async fn consume_credentials(
        &self,
        user_id: &str,
        org_id: &str,
    ) -> Result<Credentials, HubspotError> {
        let user_id = require(Some(user_id), "user_id")?;
        let org_id = require(Some(org_id), "org_id")?;
        let key = credentials_key(org_id, user_id);

        let raw = self.store.take(&key).await?.ok_or(HubspotError::NoCredentials)?;

        debug!(%org_id, %user_id, "HubSpot credentials consumed");
        Ok(Credentials::from_json_str(&raw)?)
    }

    /// Fetches the first page of contacts. Non-200 answers yield an empty list.
    pub async fn fetch_items(
        &self,
        credentials: &Credentials,
    ) -> Result<Vec<IntegrationItem>, HubspotError> {
        let Some(token) = credentials.access_token() else {
            warn!("Credentials carry no access_token, skipping contact fetch");
            return Ok(Vec::new());
        };

        let url = format!(
            "{}/crm/v3/objects/contacts",
            self.config.api_base_url.trim_end_matches('/')
        );
        let response = self.http.get(&url).bearer_auth(token).send().await?;

        if response.status() != StatusCode::OK {
            warn!(status = response.status().as_u16(), "HubSpot contacts request failed");
            return Ok(Vec::new());
        }

        let body = response.text().await?;
        let page: ContactsPage = serde_json::from_str(&body)?;
        debug!(count = page.results.len(), "Fetched HubSpot contacts");

        Ok(page.results.into_iter().map(HubspotContact::into_item).collect())
    }

    /// First names of the fetched contacts, `""` where HubSpot has none.
    pub async fn list_items(&self, credentials: &Credentials) -> Result<Vec<String>, HubspotError> {
        let items = self.fetch_items(credentials).await?;
        Ok(items
            .into_iter()
            .map(|item| item.first_name.unwrap_or_default())
            .collect())
    }
}
