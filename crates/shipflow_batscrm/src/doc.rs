// File: crates/shipflow_batscrm/src/doc.rs
#![allow(dead_code)] // Allow dead code for doc functions

#[cfg(feature = "openapi")]
use crate::handlers::{BatsCrmWebhookData, BatsCrmWebhookPayload};
#[cfg(feature = "openapi")]
use shipflow_common::models::WebhookAck;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;

// Define a dummy function with the handler's attributes for utoipa
#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/api/webhooks/batscrm",
    request_body = BatsCrmWebhookPayload,
    responses(
        (status = 200, description = "Webhook processed", body = WebhookAck),
        (status = 502, description = "CRM lookup failed"),
        (status = 500, description = "Workflow engine error")
    ),
    tag = "BatsCRM"
)]
fn doc_batscrm_webhook_handler() {}

#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    paths(doc_batscrm_webhook_handler),
    components(schemas(BatsCrmWebhookPayload, BatsCrmWebhookData, WebhookAck)),
    tags(
        (name = "BatsCRM", description = "BatsCRM webhook intake")
    )
)]
pub struct BatsCrmApiDoc;
