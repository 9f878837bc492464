// --- File: crates/crmlink_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Key-Value Store Config ---
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    Redis,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct StoreConfig {
    #[serde(default)]
    pub backend: StoreBackend,
    // e.g. redis://127.0.0.1:6379/0, loaded via CRMLINK__STORE__REDIS_URL
    #[serde(default)]
    pub redis_url: Option<String>,
}

// --- HubSpot Config ---
// client_secret is usually "secret_from_env" in the config file and resolved
// from CRMLINK_SECRET_HUBSPOT_CLIENT_SECRET or HUBSPOT_CLIENT_SECRET.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HubspotConfig {
    pub client_id: String,     // Mandatory
    pub client_secret: String, // Mandatory
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "default_scope")]
    pub scope: String,
    #[serde(default = "default_authorization_url")]
    pub authorization_url: String,
    #[serde(default = "default_token_url")]
    pub token_url: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Lifetime of a pending authorization (correlation token), in seconds.
    #[serde(default = "default_ttl_secs")]
    pub state_ttl_secs: u64,
    /// Lifetime of cached credentials, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub credentials_ttl_secs: u64,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_redirect_uri() -> String {
    "http://localhost:8000/integrations/hubspot/oauth2callback".to_string()
}

fn default_scope() -> String {
    "oauth crm.objects.contacts.read crm.lists.read crm.objects.custom.read crm.objects.users.read"
        .to_string()
}

fn default_authorization_url() -> String {
    "https://app.hubspot.com/oauth/authorize".to_string()
}

fn default_token_url() -> String {
    "https://api.hubapi.com/oauth/v1/token".to_string()
}

fn default_api_base_url() -> String {
    "https://api.hubapi.com".to_string()
}

fn default_ttl_secs() -> u64 {
    600
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_hubspot: bool,

    #[serde(default)]
    pub store: StoreConfig,

    // --- Optional Integration Configurations ---
    #[serde(default)]
    pub hubspot: Option<HubspotConfig>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hubspot_config_fills_in_provider_defaults() {
        let config: HubspotConfig = serde_json::from_value(json!({
            "client_id": "id-123",
            "client_secret": "shh",
        }))
        .unwrap();

        assert_eq!(config.token_url, "https://api.hubapi.com/oauth/v1/token");
        assert_eq!(config.authorization_url, "https://app.hubspot.com/oauth/authorize");
        assert_eq!(config.api_base_url, "https://api.hubapi.com");
        assert!(config.scope.starts_with("oauth "));
        assert_eq!(config.state_ttl_secs, 600);
        assert_eq!(config.credentials_ttl_secs, 600);
        assert!(config.request_timeout_secs.is_none());
    }

    #[test]
    fn app_config_defaults_to_memory_store_and_disabled_hubspot() {
        let config: AppConfig = serde_json::from_value(json!({
            "server": { "host": "127.0.0.1", "port": 8000 }
        }))
        .unwrap();

        assert!(!config.use_hubspot);
        assert!(config.hubspot.is_none());
        assert_eq!(config.store.backend, StoreBackend::Memory);
        assert!(config.store.redis_url.is_none());
    }

    #[test]
    fn store_backend_is_lowercase_on_the_wire() {
        let store: StoreConfig = serde_json::from_value(json!({
            "backend": "redis",
            "redis_url": "redis://127.0.0.1:6379/0"
        }))
        .unwrap();
        assert_eq!(store.backend, StoreBackend::Redis);
    }
}
