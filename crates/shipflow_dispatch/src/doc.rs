// File: crates/shipflow_dispatch/src/doc.rs
#![allow(dead_code)] // Allow dead code for doc functions

#[cfg(feature = "openapi")]
use crate::handlers::ShippingNotifyRequest;
#[cfg(feature = "openapi")]
use shipflow_common::models::WebhookAck;
#[cfg(feature = "openapi")]
use utoipa::OpenApi;

// Define a dummy function with the handler's attributes for utoipa
#[cfg(feature = "openapi")]
#[utoipa::path(
    post,
    path = "/api/shipping/notify",
    request_body = ShippingNotifyRequest,
    responses(
        (status = 200, description = "Shipping update processed", body = WebhookAck),
        (status = 502, description = "CRM write or lookup failed"),
        (status = 500, description = "Workflow engine error")
    ),
    tag = "Shipping"
)]
fn doc_shipping_notify_handler() {}

#[cfg(feature = "openapi")]
#[derive(OpenApi)]
#[openapi(
    paths(doc_shipping_notify_handler),
    components(schemas(ShippingNotifyRequest, WebhookAck)),
    tags(
        (name = "Shipping", description = "Manual shipping update triggers")
    )
)]
pub struct DispatchApiDoc;
