// --- File: crates/shipflow_dispatch/src/events.rs ---
//! Inbound event records submitted to the workflow engine.

use chrono::{DateTime, Utc};
use serde::Serialize;
use shipflow_common::services::{Customer, Order};

/// One inbound event, tagged the way the workflow engine expects it.
///
/// Every variant carries the moment the event entered the system; the
/// engine correlates on it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventRecord {
    /// An inbound SMS relayed by the telephony webhook.
    IncomingMessage {
        from: String,
        body: String,
        timestamp: DateTime<Utc>,
    },
    /// An order lifecycle event from the CRM webhook, enriched with the
    /// full order and customer records.
    OrderUpdate {
        event: String,
        order: Order,
        customer: Customer,
        timestamp: DateTime<Utc>,
    },
    /// An operator-triggered shipping update.
    #[serde(rename_all = "camelCase")]
    ManualShippingUpdate {
        order: Order,
        customer: Customer,
        status: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tracking_number: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        carrier: Option<String>,
        timestamp: DateTime<Utc>,
    },
}
