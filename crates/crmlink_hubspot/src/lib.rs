// --- File: crates/crmlink_hubspot/src/lib.rs ---
pub mod auth;
#[cfg(test)]
mod auth_test;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod logic;
pub mod models;
pub mod routes;

pub use error::HubspotError;
pub use logic::{credentials_key, pending_key, HubspotService};
pub use models::{CallbackQuery, Credentials, PendingAuthorization};
pub use routes::routes;
