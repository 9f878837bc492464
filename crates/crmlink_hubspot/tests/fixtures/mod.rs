//! Test fixtures for the HubSpot integration tests
//!
//! Factory functions for configuration, the service under test and canned
//! HubSpot responses.

use crmlink_config::HubspotConfig;
use crmlink_hubspot::HubspotService;
use crmlink_store::MemoryStore;
use serde_json::{json, Value};
use std::sync::Arc;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ACCESS_TOKEN: &str = "at-integration";

/// HubSpot config whose token and API endpoints point at `base_url`.
pub fn hubspot_config(base_url: &str) -> HubspotConfig {
    HubspotConfig {
        client_id: "client-123".to_string(),
        client_secret: "secret-xyz".to_string(),
        redirect_uri: "http://localhost:8000/integrations/hubspot/oauth2callback".to_string(),
        scope: "oauth crm.objects.contacts.read crm.lists.read".to_string(),
        authorization_url: "https://app.hubspot.com/oauth/authorize".to_string(),
        token_url: format!("{base_url}/oauth/v1/token"),
        api_base_url: base_url.to_string(),
        state_ttl_secs: 600,
        credentials_ttl_secs: 600,
        request_timeout_secs: Some(5),
    }
}

pub fn create_service(base_url: &str) -> (Arc<HubspotService>, MemoryStore) {
    let store = MemoryStore::new();
    let service = HubspotService::new(
        hubspot_config(base_url),
        Arc::new(store.clone()),
        reqwest::Client::new(),
    );
    (Arc::new(service), store)
}

pub fn token_response() -> Value {
    json!({
        "token_type": "bearer",
        "access_token": ACCESS_TOKEN,
        "refresh_token": "rt-integration",
        "expires_in": 1800
    })
}

pub fn contacts_page() -> Value {
    json!({
        "results": [
            {
                "id": "1",
                "createdAt": "2024-01-10T09:00:00.000Z",
                "updatedAt": "2024-01-11T09:00:00.000Z",
                "archived": false,
                "properties": {
                    "firstname": "Grace",
                    "lastname": "Hopper",
                    "email": "grace@example.com"
                }
            }
        ]
    })
}

/// Mounts a token endpoint and a contacts endpoint that accept `ACCESS_TOKEN`.
pub async fn start_hubspot_mock() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/v1/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_response()))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/crm/v3/objects/contacts"))
        .and(header("authorization", format!("Bearer {ACCESS_TOKEN}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(contacts_page()))
        .mount(&server)
        .await;

    server
}
