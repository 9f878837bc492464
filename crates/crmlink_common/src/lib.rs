// --- File: crates/crmlink_common/src/lib.rs ---

pub mod error;
pub mod features;
pub mod http;
pub mod logging;
pub mod models;
pub mod routes;

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

pub use error::{
    auth_error, config_error, external_service_error, internal_error, not_found, store_error,
    validation_error, CrmlinkError, HttpStatusCode,
};

pub use http::{
    client::{client_with_timeout, create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

pub use logging::{init, init_with_level, log_result};

pub use models::IntegrationItem;

pub use features::is_feature_enabled;

#[cfg(feature = "hubspot")]
pub use features::is_hubspot_enabled;
