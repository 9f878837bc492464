// File: services/crmlink_backend/src/main.rs
use axum::{routing::get, Router};
use crmlink_common::log_result;
use crmlink_config::load_config;
use std::error::Error;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod app_state;
use app_state::AppState;

/// Assembles the routers of the common crate and every enabled integration.
fn build_app(state: &AppState) -> Router {
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut app = Router::new()
        .route("/", get(|| async { "Welcome to crmlink API!" }))
        .merge(crmlink_common::routes());

    #[cfg(feature = "hubspot")]
    {
        if let Some(hubspot) = state.hubspot.clone() {
            app = app.merge(crmlink_hubspot::routes(hubspot));
        }
    }
    #[cfg(not(feature = "hubspot"))]
    let _ = state;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        #[cfg(feature = "hubspot")]
        use crmlink_hubspot::doc::HubspotApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "crmlink API",
                version = "0.1.0",
                description = "CRM integration service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            tags((name = "crmlink", description = "Core service endpoints")),
        )]
        struct ApiDoc;

        #[allow(unused_mut)]
        let mut openapi_doc = ApiDoc::openapi();
        #[cfg(feature = "hubspot")]
        openapi_doc.merge(HubspotApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");

        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    app.layer(TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    crmlink_common::logging::init();

    let config = Arc::new(log_result(
        load_config(),
        "Configuration loaded",
        "Failed to load configuration",
    )?);
    let state = AppState::new(config.clone()).await?;
    let app = build_app(&state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
