// --- File: crates/shipflow_common/src/services.rs ---
//! Service abstractions for external services.
//!
//! This module provides trait definitions for the external systems the
//! application talks to: the CRM, the telephony provider, the notification
//! channel, and the workflow engine. These traits allow for dependency
//! injection and easier testing by decoupling the dispatch logic from
//! specific provider implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for
/// Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl BoxedError {
    /// Wrap any concrete error.
    pub fn new<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        BoxedError(Box::new(err))
    }
}

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for CRM operations.
///
/// Covers the customer/order reads used to enrich inbound events and the
/// order writes issued by dispatched actions.
pub trait CrmService: Send + Sync {
    /// Error type returned by CRM operations.
    type Error: StdError + Send + Sync + 'static;

    /// Fetch a customer record by id.
    fn get_customer(&self, customer_id: &str) -> BoxFuture<'_, Customer, Self::Error>;

    /// Fetch an order record by id.
    fn get_order(&self, order_id: &str) -> BoxFuture<'_, Order, Self::Error>;

    /// Update the status of an order, with optional free-form notes.
    fn update_order_status(
        &self,
        order_id: &str,
        status: &str,
        notes: Option<&str>,
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error>;

    /// Attach a new shipping record to an order.
    fn create_shipping_record(
        &self,
        order_id: &str,
        shipment: ShipmentData,
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error>;
}

/// A trait for telephony operations (SMS and voice).
pub trait TelephonyService: Send + Sync {
    /// Error type returned by telephony operations.
    type Error: StdError + Send + Sync + 'static;

    /// Send an SMS to a phone number.
    fn send_sms(&self, to: &str, message: &str) -> BoxFuture<'_, ProviderReceipt, Self::Error>;

    /// Initiate an outbound call from `caller_id` to `to`.
    fn initiate_call(
        &self,
        to: &str,
        caller_id: &str,
        notes: Option<&str>,
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error>;
}

/// A trait for channel notification operations.
pub trait NotificationService: Send + Sync {
    /// Error type returned by notification operations.
    type Error: StdError + Send + Sync + 'static;

    /// Post a message to a channel, optionally with structured blocks.
    fn send_notification(
        &self,
        channel: &str,
        message: &str,
        blocks: &[serde_json::Value],
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error>;
}

/// A trait for the external workflow engine.
///
/// The engine's decision logic is opaque: it receives an event payload and
/// returns a result whose `output.actions` list the caller dispatches.
pub trait WorkflowEngineService: Send + Sync {
    /// Error type returned by engine operations.
    type Error: StdError + Send + Sync + 'static;

    /// Run the given workflow with the event payload as input.
    fn run(
        &self,
        workflow_id: &str,
        input: serde_json::Value,
    ) -> BoxFuture<'_, WorkflowRunResult, Self::Error>;
}

/// A factory for creating service instances.
///
/// Implemented by the backend; returns a service only when its feature is
/// enabled and configured.
pub trait ServiceFactory: Send + Sync {
    /// Get a CRM service instance.
    fn crm_service(&self) -> Option<Arc<dyn CrmService<Error = BoxedError>>>;

    /// Get a telephony service instance.
    fn telephony_service(&self) -> Option<Arc<dyn TelephonyService<Error = BoxedError>>>;

    /// Get a notification service instance.
    fn notification_service(&self) -> Option<Arc<dyn NotificationService<Error = BoxedError>>>;

    /// Get a workflow engine instance.
    fn workflow_engine(&self) -> Option<Arc<dyn WorkflowEngineService<Error = BoxedError>>>;
}

// --- Data structures for CRM operations ---

/// A customer record as returned by the CRM.
///
/// Deserialization is tolerant: unknown fields are preserved in `extra`
/// and round-trip back to the engine unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// An order record as returned by the CRM.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Shipment details attached to an order.
///
/// Tracking number and carrier are optional; extra engine-supplied fields
/// pass through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipmentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shipped_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Generic acknowledgement for a provider write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderReceipt {
    /// Provider-side identifier of the affected resource, when reported.
    pub id: Option<String>,
    /// The status of the operation.
    pub status: String,
}

impl ProviderReceipt {
    /// Build a receipt from an arbitrary provider response body, reading
    /// `id` and `status` fields when present.
    pub fn from_json(body: &serde_json::Value) -> Self {
        let id = body
            .get("id")
            .map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .filter(|s| !s.is_empty());
        let status = body
            .get("status")
            .and_then(|v| v.as_str())
            .unwrap_or("ok")
            .to_string();
        Self { id, status }
    }
}

/// The result of one workflow engine run.
///
/// `actions` is the extracted `output.actions` list (empty when the engine
/// returned none); `raw` is the engine response untouched, handed back to
/// the inbound caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowRunResult {
    pub raw: serde_json::Value,
    pub actions: Vec<serde_json::Value>,
}
