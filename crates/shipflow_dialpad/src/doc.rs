// File: crates/shipflow_dialpad/src/doc.rs
#![allow(dead_code)] // Allow dead code for doc functions

#[cfg(feature = "openapi")]
use crate::handlers::{DialpadMessageData, DialpadWebhookPayload};
#[cfg(feature = "openapi")]
use shipflow_common::models::WebhookAck;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;

// Define a dummy function with the handler's attributes for utoipa
#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/api/webhooks/dialpad",
    request_body = DialpadWebhookPayload,
    responses(
        (status = 200, description = "Webhook processed", body = WebhookAck),
        (status = 500, description = "Workflow engine error")
    ),
    tag = "Dialpad"
)]
fn doc_dialpad_webhook_handler() {}

#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    paths(doc_dialpad_webhook_handler),
    components(schemas(DialpadWebhookPayload, DialpadMessageData, WebhookAck)),
    tags(
        (name = "Dialpad", description = "Dialpad webhook intake")
    )
)]
pub struct DialpadApiDoc;
