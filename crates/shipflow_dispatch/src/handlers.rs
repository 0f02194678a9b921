// --- File: crates/shipflow_dispatch/src/handlers.rs ---

use axum::{extract::State, response::Json};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use shipflow_config::AppConfig;
use shipflow_common::models::WebhookAck;
use shipflow_common::services::{BoxedError, CrmService, ShipmentData};
use shipflow_common::{external_service_error, internal_error, ShipflowError};

use crate::bridge::WorkflowBridge;
use crate::events::EventRecord;

// Define shared state needed by the shipping trigger handler
#[derive(Clone)]
pub struct ShippingState {
    pub config: Arc<AppConfig>,
    pub crm: Arc<dyn CrmService<Error = BoxedError>>,
    pub bridge: Arc<WorkflowBridge>,
}

/// Body of the manual shipping-notification trigger.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ShippingNotifyRequest {
    #[cfg_attr(feature = "openapi", schema(example = "O-10023"))]
    pub order_id: String,
    #[cfg_attr(feature = "openapi", schema(example = "shipped"))]
    pub status: String,
    pub notes: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "1Z999AA10123456784"))]
    pub tracking_number: Option<String>,
    #[cfg_attr(feature = "openapi", schema(example = "UPS"))]
    pub carrier: Option<String>,
}

/// Handler for the manual shipping-update trigger.
///
/// Updates the order in the CRM, records the shipment when tracking info is
/// complete, then submits a `manual_shipping_update` event so the engine can
/// decide on follow-up actions.
#[axum::debug_handler]
pub async fn shipping_notify_handler(
    State(state): State<Arc<ShippingState>>,
    Json(request): Json<ShippingNotifyRequest>,
) -> Result<Json<WebhookAck>, ShipflowError> {
    info!(order_id = %request.order_id, status = %request.status, "Manual shipping update received");

    state
        .crm
        .update_order_status(&request.order_id, &request.status, request.notes.as_deref())
        .await
        .map_err(|err| external_service_error("BatsCRM", err))?;

    // A shipment record needs both tracking number and carrier.
    if let (Some(tracking), Some(carrier)) = (&request.tracking_number, &request.carrier) {
        let shipment = ShipmentData {
            tracking_number: Some(tracking.clone()),
            carrier: Some(carrier.clone()),
            status: Some(request.status.clone()),
            shipped_at: Some(Utc::now()),
            extra: Default::default(),
        };
        state
            .crm
            .create_shipping_record(&request.order_id, shipment)
            .await
            .map_err(|err| external_service_error("BatsCRM", err))?;
    }

    let order = state
        .crm
        .get_order(&request.order_id)
        .await
        .map_err(|err| external_service_error("BatsCRM", err))?;
    let customer = state
        .crm
        .get_customer(&order.customer_id)
        .await
        .map_err(|err| external_service_error("BatsCRM", err))?;

    state
        .bridge
        .submit(EventRecord::ManualShippingUpdate {
            order,
            customer,
            status: request.status,
            notes: request.notes,
            tracking_number: request.tracking_number,
            carrier: request.carrier,
            timestamp: Utc::now(),
        })
        .await
        .map_err(internal_error)?;

    Ok(Json(WebhookAck::success()))
}
