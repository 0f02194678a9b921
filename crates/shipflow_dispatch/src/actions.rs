// --- File: crates/shipflow_dispatch/src/actions.rs ---
//! The action vocabulary returned by the workflow engine.
//!
//! Actions arrive as tagged JSON records `{"type": "...", ...payload}`.
//! The vocabulary is OPEN: the engine evolves independently, so a tag this
//! build does not know about is legal input, not malformed input. Parsing
//! therefore never fails on an unknown tag; such records land in
//! [`Action::Other`] and the dispatcher skips them with a diagnostic.

use serde::Deserialize;
use serde_json::Value;
use shipflow_common::services::ShipmentData;

/// One action record from the engine's `output.actions` list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Action {
    /// A tag this build knows how to route.
    Known(KnownAction),
    /// Anything else. Kept whole for logging; never executed.
    Other(UnrecognizedAction),
}

/// The recognized action variants and their payloads.
///
/// Field names follow the engine's wire format (camelCase). A record whose
/// tag matches but whose required fields are missing does NOT parse as a
/// known action; it falls through to [`Action::Other`] and is skipped.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum KnownAction {
    SendSms {
        phone_number: String,
        message: String,
    },
    MakeCall {
        phone_number: String,
        caller_id: String,
        #[serde(default)]
        notes: Option<String>,
    },
    UpdateOrderStatus {
        order_id: String,
        status: String,
        #[serde(default)]
        notes: Option<String>,
    },
    CreateShippingRecord {
        order_id: String,
        shipment_data: ShipmentData,
    },
    SendSlackNotification {
        channel: String,
        message: String,
        #[serde(default)]
        blocks: Vec<Value>,
    },
}

/// An action record with a tag this build does not route.
#[derive(Debug, Clone, Deserialize)]
pub struct UnrecognizedAction {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, Value>,
}

impl Action {
    /// The action's tag, for diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Action::Known(KnownAction::SendSms { .. }) => "send_sms",
            Action::Known(KnownAction::MakeCall { .. }) => "make_call",
            Action::Known(KnownAction::UpdateOrderStatus { .. }) => "update_order_status",
            Action::Known(KnownAction::CreateShippingRecord { .. }) => "create_shipping_record",
            Action::Known(KnownAction::SendSlackNotification { .. }) => "send_slack_notification",
            Action::Other(other) => other.kind.as_deref().unwrap_or("<untagged>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Action {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn parses_send_sms() {
        let action = parse(json!({
            "type": "send_sms",
            "phoneNumber": "+15551234567",
            "message": "Your order shipped"
        }));
        match action {
            Action::Known(KnownAction::SendSms {
                phone_number,
                message,
            }) => {
                assert_eq!(phone_number, "+15551234567");
                assert_eq!(message, "Your order shipped");
            }
            other => panic!("expected send_sms, got {:?}", other),
        }
    }

    #[test]
    fn parses_make_call_without_notes() {
        let action = parse(json!({
            "type": "make_call",
            "phoneNumber": "+15551234567",
            "callerId": "+15557654321"
        }));
        match action {
            Action::Known(KnownAction::MakeCall { notes, .. }) => assert!(notes.is_none()),
            other => panic!("expected make_call, got {:?}", other),
        }
    }

    #[test]
    fn parses_create_shipping_record_with_extra_shipment_fields() {
        let action = parse(json!({
            "type": "create_shipping_record",
            "orderId": "O42",
            "shipmentData": {
                "trackingNumber": "1Z999",
                "carrier": "UPS",
                "palletCount": 3
            }
        }));
        match action {
            Action::Known(KnownAction::CreateShippingRecord {
                order_id,
                shipment_data,
            }) => {
                assert_eq!(order_id, "O42");
                assert_eq!(shipment_data.tracking_number.as_deref(), Some("1Z999"));
                assert_eq!(shipment_data.extra["palletCount"], 3);
            }
            other => panic!("expected create_shipping_record, got {:?}", other),
        }
    }

    #[test]
    fn unknown_tag_is_legal_input() {
        let action = parse(json!({
            "type": "escalate_to_human",
            "queue": "ops"
        }));
        match &action {
            Action::Other(other) => {
                assert_eq!(other.kind.as_deref(), Some("escalate_to_human"));
                assert_eq!(other.payload["queue"], "ops");
            }
            other => panic!("expected unrecognized action, got {:?}", other),
        }
        assert_eq!(action.kind(), "escalate_to_human");
    }

    #[test]
    fn known_tag_with_missing_field_falls_through() {
        // send_sms without a message must not parse as a known action
        let action = parse(json!({
            "type": "send_sms",
            "phoneNumber": "+15551234567"
        }));
        assert!(matches!(action, Action::Other(_)));
        assert_eq!(action.kind(), "send_sms");
    }

    #[test]
    fn untagged_record_still_parses() {
        let action = parse(json!({"foo": "bar"}));
        assert_eq!(action.kind(), "<untagged>");
    }
}
