// --- File: crates/crmlink_hubspot/src/models.rs ---
use crmlink_common::IntegrationItem;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What we remember between sending the user to HubSpot and the callback.
///
/// The same JSON (base64url encoded) travels as the OAuth `state` parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingAuthorization {
    #[serde(rename = "state")]
    pub correlation_token: String,
    pub user_id: String,
    pub org_id: String,
}

/// Token endpoint response, kept as-is. Always carries `access_token`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credentials(pub Value);

impl Credentials {
    pub fn access_token(&self) -> Option<&str> {
        self.0.get("access_token").and_then(Value::as_str)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw).map(Credentials)
    }
}

// Query HubSpot appends to the redirect URI
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Form body of the authorize and credentials endpoints.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UserOrgRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub org_id: String,
}

/// Form body of the load endpoint; `credentials` is the JSON handed out earlier.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoadItemsRequest {
    #[serde(default)]
    pub credentials: String,
}

// --- HubSpot CRM v3 wire types ---

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactProperties {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HubspotContact {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub archived: Option<bool>,
    pub properties: Option<ContactProperties>,
}

impl HubspotContact {
    pub fn into_item(self) -> IntegrationItem {
        let properties = self.properties.unwrap_or_default();
        IntegrationItem {
            id: self.id,
            created_at: IntegrationItem::parse_timestamp(self.created_at.as_deref()),
            updated_at: IntegrationItem::parse_timestamp(self.updated_at.as_deref()),
            first_name: properties.firstname,
            last_name: properties.lastname,
            email: properties.email,
            archived: self.archived.unwrap_or(false),
        }
    }
}

/// One page of `GET /crm/v3/objects/contacts`. Paging info is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactsPage {
    #[serde(default)]
    pub results: Vec<HubspotContact>,
}
