// File: crates/crmlink_hubspot/src/doc.rs
#![allow(dead_code)] // Allow dead code for doc functions

#[cfg(feature = "openapi")]
use utoipa::OpenApi;
#[cfg(feature = "openapi")]
use crate::models::{CallbackQuery, LoadItemsRequest, UserOrgRequest};

#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/integrations/hubspot/authorize",
    request_body(content = UserOrgRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "HubSpot consent URL", body = String),
        (status = 400, description = "user_id or org_id missing"),
        (status = 500, description = "Store failure")
    ),
    tag = "HubSpot"
)]
fn doc_authorize_handler() {}

#[cfg(feature = "openapi")]
#[utoipa::path(
    get,
    path = "/integrations/hubspot/oauth2callback",
    params(CallbackQuery),
    responses(
        (status = 200, description = "HTML page that closes the popup window", body = String, content_type = "text/html"),
        (status = 400, description = "Authorization denied, missing parameter or state mismatch"),
        (status = 502, description = "HubSpot token endpoint rejected the code")
    ),
    tag = "HubSpot"
)]
fn doc_oauth2callback_handler() {}

#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/integrations/hubspot/credentials",
    request_body(content = UserOrgRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Raw HubSpot token response; can be fetched once"),
        (status = 400, description = "No credentials found")
    ),
    tag = "HubSpot"
)]
fn doc_credentials_handler() {}

#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/integrations/hubspot/load",
    request_body(content = LoadItemsRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "First names of the first page of contacts", body = Vec<String>),
        (status = 400, description = "credentials missing or not JSON")
    ),
    tag = "HubSpot"
)]
fn doc_load_items_handler() {}

#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    paths(
        doc_authorize_handler,
        doc_oauth2callback_handler,
        doc_credentials_handler,
        doc_load_items_handler
    ),
    components(
        schemas(UserOrgRequest, LoadItemsRequest)
    ),
    tags(
        (name = "HubSpot", description = "HubSpot OAuth2 and contact import")
    )
)]
pub struct HubspotApiDoc;
