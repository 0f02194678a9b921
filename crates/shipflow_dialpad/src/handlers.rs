// --- File: crates/shipflow_dialpad/src/handlers.rs ---

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use shipflow_config::AppConfig;
use shipflow_common::models::WebhookAck;
use shipflow_common::{internal_error, ShipflowError};
use shipflow_dispatch::{EventRecord, WorkflowBridge};

// Define shared state needed by Dialpad handlers
#[derive(Clone)]
pub struct DialpadState {
    pub config: Arc<AppConfig>,
    pub bridge: Arc<WorkflowBridge>,
}

/// Payload Dialpad posts to the webhook endpoint.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DialpadWebhookPayload {
    #[cfg_attr(feature = "openapi", schema(example = "message.received"))]
    pub event_type: String,
    pub data: DialpadMessageData,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DialpadMessageData {
    #[cfg_attr(feature = "openapi", schema(example = "+15551234567"))]
    pub from: String,
    #[cfg_attr(feature = "openapi", schema(example = "Where is my order?"))]
    pub body: String,
}

/// Handler for Dialpad webhook events.
///
/// Inbound messages are relayed to the workflow engine; other event types
/// are acknowledged and ignored.
#[axum::debug_handler]
pub async fn dialpad_webhook_handler(
    State(state): State<Arc<DialpadState>>,
    Json(payload): Json<DialpadWebhookPayload>,
) -> Result<Json<WebhookAck>, ShipflowError> {
    if payload.event_type != "message.received" {
        debug!(event_type = %payload.event_type, "Ignoring unhandled Dialpad event");
        return Ok(Json(WebhookAck::success()));
    }

    info!(from = %payload.data.from, "Inbound message received from Dialpad");

    state
        .bridge
        .submit(EventRecord::IncomingMessage {
            from: payload.data.from,
            body: payload.data.body,
            timestamp: Utc::now(),
        })
        .await
        .map_err(internal_error)?;

    Ok(Json(WebhookAck::success()))
}
