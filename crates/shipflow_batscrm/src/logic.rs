// --- File: crates/shipflow_batscrm/src/logic.rs ---

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use shipflow_config::BatsCrmConfig;
use shipflow_common::services::{Customer, Order, ProviderReceipt, ShipmentData};
use shipflow_common::HTTP_CLIENT;

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum BatsCrmError {
    #[error("BatsCRM API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("BatsCRM API returned an error: Status={status}, Message='{message}'")]
    ApiError { status: u16, message: String },
    #[error("Failed to parse BatsCRM API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

// --- Request Payloads ---

#[derive(Serialize, Debug)]
struct UpdateOrderStatusBody<'a> {
    status: &'a str,
    notes: &'a str,
}

// --- API Calls ---

/// Fetch a customer record.
pub async fn get_customer(
    config: &BatsCrmConfig,
    customer_id: &str,
) -> Result<Customer, BatsCrmError> {
    let url = format!("{}/customers/{}", config.base_url, customer_id);
    let response = HTTP_CLIENT
        .get(&url)
        .bearer_auth(&config.api_key)
        .send()
        .await?;
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

/// Fetch an order record.
pub async fn get_order(config: &BatsCrmConfig, order_id: &str) -> Result<Order, BatsCrmError> {
    let url = format!("{}/orders/{}", config.base_url, order_id);
    let response = HTTP_CLIENT
        .get(&url)
        .bearer_auth(&config.api_key)
        .send()
        .await?;
    let response = check_status(response).await?;
    Ok(response.json().await?)
}

/// Update an order's status, with optional free-form notes.
pub async fn update_order_status(
    config: &BatsCrmConfig,
    order_id: &str,
    status: &str,
    notes: Option<&str>,
) -> Result<ProviderReceipt, BatsCrmError> {
    let url = format!("{}/orders/{}", config.base_url, order_id);
    let body = UpdateOrderStatusBody {
        status,
        notes: notes.unwrap_or(""),
    };
    let response = HTTP_CLIENT
        .patch(&url)
        .bearer_auth(&config.api_key)
        .json(&body)
        .send()
        .await?;
    let response = check_status(response).await?;
    let body: Value = response.json().await?;
    Ok(ProviderReceipt::from_json(&body))
}

/// Attach a new shipping record to an order.
pub async fn create_shipping_record(
    config: &BatsCrmConfig,
    order_id: &str,
    shipment: &ShipmentData,
) -> Result<ProviderReceipt, BatsCrmError> {
    let url = format!("{}/orders/{}/shipments", config.base_url, order_id);
    let response = HTTP_CLIENT
        .post(&url)
        .bearer_auth(&config.api_key)
        .json(shipment)
        .send()
        .await?;
    let response = check_status(response).await?;
    let body: Value = response.json().await?;
    Ok(ProviderReceipt::from_json(&body))
}

/// Map a non-2xx response to an ApiError carrying the body text.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, BatsCrmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    error!("BatsCRM returned {}: {}", status, message);
    Err(BatsCrmError::ApiError {
        status: status.as_u16(),
        message,
    })
}
