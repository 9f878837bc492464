// --- File: crates/crmlink_hubspot/src/routes.rs ---

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::handlers::{
    authorize_handler, credentials_handler, load_items_handler, oauth2callback_handler,
    HubspotState,
};
use crate::logic::HubspotService;

/// Creates a router containing all routes for the HubSpot integration.
pub fn routes(service: Arc<HubspotService>) -> Router {
    let hubspot_state = Arc::new(HubspotState { service });

    Router::new()
        // Called by our frontend to start the flow
        .route("/integrations/hubspot/authorize", post(authorize_handler))
        // Called by the user's browser, redirected from HubSpot
        .route(
            "/integrations/hubspot/oauth2callback",
            get(oauth2callback_handler),
        )
        .route("/integrations/hubspot/credentials", post(credentials_handler))
        .route("/integrations/hubspot/load", post(load_items_handler))
        .with_state(hubspot_state)
}
