// --- File: crates/crmlink_hubspot/src/handlers.rs ---
use axum::{
    extract::{Form, Query, State},
    response::{Html, Json},
};
use crmlink_common::CrmlinkError;
use std::sync::Arc;
use tracing::info;

use crate::error::HubspotError;
use crate::logic::HubspotService;
use crate::models::{CallbackQuery, Credentials, LoadItemsRequest, UserOrgRequest};

/// Page served to the popup window once the callback succeeded.
pub const CLOSE_WINDOW_HTML: &str = r#"<html>
    <script>
        window.close();
    </script>
</html>"#;

// Shared state for the HubSpot handlers
#[derive(Clone)]
pub struct HubspotState {
    pub service: Arc<HubspotService>,
}

/// Handler that starts the OAuth flow and returns the consent URL.
#[axum::debug_handler]
pub async fn authorize_handler(
    State(state): State<Arc<HubspotState>>,
    Form(form): Form<UserOrgRequest>,
) -> Result<Json<String>, CrmlinkError> {
    let url = state.service.initiate(&form.user_id, &form.org_id).await?;
    Ok(Json(url))
}

/// Redirect target registered with HubSpot.
#[axum::debug_handler]
pub async fn oauth2callback_handler(
    State(state): State<Arc<HubspotState>>,
    Query(query): Query<CallbackQuery>,
) -> Result<Html<&'static str>, CrmlinkError> {
    state.service.handle_callback(&query).await?;
    Ok(Html(CLOSE_WINDOW_HTML))
}

#[axum::debug_handler]
pub async fn credentials_handler(
    State(state): State<Arc<HubspotState>>,
    Form(form): Form<UserOrgRequest>,
) -> Result<Json<Credentials>, CrmlinkError> {
    let credentials = state
        .service
        .consume_credentials(&form.user_id, &form.org_id)
        .await?;
    Ok(Json(credentials))
}

/// Lists the first names of the user's HubSpot contacts.
#[axum::debug_handler]
pub async fn load_items_handler(
    State(state): State<Arc<HubspotState>>,
    Form(form): Form<LoadItemsRequest>,
) -> Result<Json<Vec<String>>, CrmlinkError> {
    if form.credentials.is_empty() {
        return Err(HubspotError::MissingParameter("credentials").into());
    }
    let credentials = Credentials::from_json_str(&form.credentials)
        .map_err(|e| HubspotError::InvalidCredentials(e.to_string()))?;

    let names = state.service.list_items(&credentials).await?;
    info!(count = names.len(), "Loaded HubSpot items");
    Ok(Json(names))
}
