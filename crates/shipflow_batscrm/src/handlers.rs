// --- File: crates/shipflow_batscrm/src/handlers.rs ---

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

use shipflow_config::AppConfig;
use shipflow_common::models::WebhookAck;
use shipflow_common::services::{BoxedError, CrmService};
use shipflow_common::{external_service_error, internal_error, ShipflowError};
use shipflow_dispatch::{EventRecord, WorkflowBridge};

// Define shared state needed by BatsCRM handlers
#[derive(Clone)]
pub struct BatsCrmState {
    pub config: Arc<AppConfig>,
    pub crm: Arc<dyn CrmService<Error = BoxedError>>,
    pub bridge: Arc<WorkflowBridge>,
}

/// Payload BatsCRM posts to the webhook endpoint.
#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BatsCrmWebhookPayload {
    #[cfg_attr(feature = "openapi", schema(example = "order.updated"))]
    pub event: String,
    pub data: BatsCrmWebhookData,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BatsCrmWebhookData {
    #[cfg_attr(feature = "openapi", schema(example = "O-10023"))]
    pub id: String,
}

/// Handler for BatsCRM webhook events.
///
/// Order lifecycle events are enriched with the full order and customer
/// records before submission; everything else is acknowledged and ignored.
#[axum::debug_handler]
pub async fn batscrm_webhook_handler(
    State(state): State<Arc<BatsCrmState>>,
    Json(payload): Json<BatsCrmWebhookPayload>,
) -> Result<Json<WebhookAck>, ShipflowError> {
    if payload.event != "order.created" && payload.event != "order.updated" {
        debug!(event = %payload.event, "Ignoring unhandled BatsCRM event");
        return Ok(Json(WebhookAck::success()));
    }

    info!(event = %payload.event, order_id = %payload.data.id, "BatsCRM webhook received");

    let order = state
        .crm
        .get_order(&payload.data.id)
        .await
        .map_err(|err| external_service_error("BatsCRM", err))?;

    let customer = state
        .crm
        .get_customer(&order.customer_id)
        .await
        .map_err(|err| external_service_error("BatsCRM", err))?;

    state
        .bridge
        .submit(EventRecord::OrderUpdate {
            event: payload.event,
            order,
            customer,
            timestamp: Utc::now(),
        })
        .await
        .map_err(internal_error)?;

    Ok(Json(WebhookAck::success()))
}
