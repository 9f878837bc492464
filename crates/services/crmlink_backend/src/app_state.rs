// --- File: crates/services/crmlink_backend/src/app_state.rs ---
use crmlink_config::AppConfig;
use crmlink_store::{create_store, KeyValueStore};
use std::error::Error;
use std::sync::Arc;

#[cfg(feature = "hubspot")]
use crmlink_hubspot::HubspotService;

/// The integration services built once at startup and handed to the routers.
/// They share one store for their transient OAuth artifacts.
#[derive(Clone)]
pub struct AppState {
    /// Present when the `hubspot` feature is compiled in and enabled in config.
    #[cfg(feature = "hubspot")]
    pub hubspot: Option<Arc<HubspotService>>,
}

impl AppState {
    pub async fn new(config: Arc<AppConfig>) -> Result<Self, Box<dyn Error>> {
        let store = create_store(&config.store).await?;
        Self::with_store(config, store)
    }

    /// Builds the state around an existing store.
    pub fn with_store(
        config: Arc<AppConfig>,
        store: Arc<dyn KeyValueStore>,
    ) -> Result<Self, Box<dyn Error>> {
        #[cfg(feature = "hubspot")]
        let hubspot = if crmlink_common::is_hubspot_enabled(&config) {
            tracing::info!("HubSpot integration enabled");
            Some(Arc::new(HubspotService::from_app_config(
                &config,
                store.clone(),
            )?))
        } else {
            tracing::info!("HubSpot integration disabled");
            None
        };
        #[cfg(not(feature = "hubspot"))]
        let _ = (config, store);

        Ok(Self {
            #[cfg(feature = "hubspot")]
            hubspot,
        })
    }
}
