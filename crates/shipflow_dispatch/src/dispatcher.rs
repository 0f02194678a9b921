// --- File: crates/shipflow_dispatch/src/dispatcher.rs ---
//! Routes engine-issued actions to the provider calls they imply.
//!
//! Actions execute strictly in list order, one at a time, each awaited
//! before the next begins: later actions commonly depend on the side
//! effects of earlier ones (a status update before the notification about
//! it), so the list is never parallelized.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use shipflow_config::FailurePolicy;
use shipflow_common::services::{
    BoxedError, CrmService, NotificationService, TelephonyService,
};

use crate::actions::{Action, KnownAction};

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("action {index} ({kind}) failed: {source}")]
    ActionFailed {
        index: usize,
        kind: String,
        #[source]
        source: BoxedError,
    },
}

/// One collected failure under [`FailurePolicy::Continue`].
#[derive(Debug)]
pub struct DispatchFailure {
    pub index: usize,
    pub kind: String,
    pub error: String,
}

/// What one `execute` run did.
#[derive(Debug, Default)]
pub struct DispatchSummary {
    /// Actions whose routed provider call succeeded.
    pub executed: usize,
    /// Actions skipped because their tag is not recognized.
    pub skipped: usize,
    /// Failures collected under the `continue` policy. Always empty under
    /// `abort`, where the first failure propagates as an error instead.
    pub failures: Vec<DispatchFailure>,
}

/// Maps each action to the one provider call it implies and executes the
/// list sequentially.
pub struct ActionDispatcher {
    crm: Arc<dyn CrmService<Error = BoxedError>>,
    telephony: Arc<dyn TelephonyService<Error = BoxedError>>,
    notifier: Arc<dyn NotificationService<Error = BoxedError>>,
    policy: FailurePolicy,
}

impl ActionDispatcher {
    pub fn new(
        crm: Arc<dyn CrmService<Error = BoxedError>>,
        telephony: Arc<dyn TelephonyService<Error = BoxedError>>,
        notifier: Arc<dyn NotificationService<Error = BoxedError>>,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            crm,
            telephony,
            notifier,
            policy,
        }
    }

    /// Execute an action list in order.
    ///
    /// A recognized action issues exactly its one routed provider call; an
    /// unrecognized action is a logged no-op and never an error. What a
    /// failing routed call does depends on the configured policy: `abort`
    /// (the default) stops and propagates, dropping the remainder of the
    /// list; `continue` attempts every action and collects the failures in
    /// the returned summary.
    pub async fn execute(&self, actions: &[Action]) -> Result<DispatchSummary, DispatchError> {
        let mut summary = DispatchSummary::default();

        for (index, action) in actions.iter().enumerate() {
            let known = match action {
                Action::Known(known) => known,
                Action::Other(other) => {
                    warn!(
                        kind = action.kind(),
                        index,
                        payload_fields = other.payload.len(),
                        "Skipping unrecognized action type"
                    );
                    summary.skipped += 1;
                    continue;
                }
            };

            match self.route(known).await {
                Ok(()) => summary.executed += 1,
                Err(err) => match self.policy {
                    FailurePolicy::Abort => {
                        return Err(DispatchError::ActionFailed {
                            index,
                            kind: action.kind().to_string(),
                            source: err,
                        });
                    }
                    FailurePolicy::Continue => {
                        warn!(
                            kind = action.kind(),
                            index,
                            error = %err,
                            "Action failed, continuing with remaining actions"
                        );
                        summary.failures.push(DispatchFailure {
                            index,
                            kind: action.kind().to_string(),
                            error: err.to_string(),
                        });
                    }
                },
            }
        }

        info!(
            executed = summary.executed,
            skipped = summary.skipped,
            failed = summary.failures.len(),
            "Action list dispatched"
        );
        Ok(summary)
    }

    /// The routing table: one recognized tag, one provider call.
    async fn route(&self, action: &KnownAction) -> Result<(), BoxedError> {
        match action {
            KnownAction::SendSms {
                phone_number,
                message,
            } => {
                self.telephony.send_sms(phone_number, message).await?;
            }
            KnownAction::MakeCall {
                phone_number,
                caller_id,
                notes,
            } => {
                self.telephony
                    .initiate_call(phone_number, caller_id, notes.as_deref())
                    .await?;
            }
            KnownAction::UpdateOrderStatus {
                order_id,
                status,
                notes,
            } => {
                self.crm
                    .update_order_status(order_id, status, notes.as_deref())
                    .await?;
            }
            KnownAction::CreateShippingRecord {
                order_id,
                shipment_data,
            } => {
                self.crm
                    .create_shipping_record(order_id, shipment_data.clone())
                    .await?;
            }
            KnownAction::SendSlackNotification {
                channel,
                message,
                blocks,
            } => {
                self.notifier
                    .send_notification(channel, message, blocks)
                    .await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Recording fakes for the provider capability traits, shared by the
    //! dispatcher and bridge tests.

    use std::sync::{Arc, Mutex};

    use shipflow_common::services::{
        BoxFuture, BoxedError, CrmService, Customer, NotificationService, Order, ProviderReceipt,
        ShipmentData, TelephonyService,
    };

    /// Call log shared by all fakes; entries are rendered call signatures.
    pub type CallLog = Arc<Mutex<Vec<String>>>;

    #[derive(Debug, thiserror::Error)]
    #[error("injected failure: {0}")]
    pub struct InjectedFailure(pub String);

    /// A fake provider that records calls and can fail on one call name.
    #[derive(Clone, Default)]
    pub struct RecordingProvider {
        pub log: CallLog,
        pub fail_on: Option<&'static str>,
    }

    impl RecordingProvider {
        pub fn new(log: CallLog) -> Self {
            Self { log, fail_on: None }
        }

        pub fn failing_on(log: CallLog, call: &'static str) -> Self {
            Self {
                log,
                fail_on: Some(call),
            }
        }

        fn record(&self, call: String) -> Result<(), BoxedError> {
            let name = call.split('(').next().unwrap_or("").to_string();
            self.log.lock().unwrap().push(call);
            match self.fail_on {
                Some(fail) if fail == name => {
                    Err(BoxedError::new(InjectedFailure(name)))
                }
                _ => Ok(()),
            }
        }

        fn receipt() -> ProviderReceipt {
            ProviderReceipt {
                id: None,
                status: "ok".to_string(),
            }
        }
    }

    impl CrmService for RecordingProvider {
        type Error = BoxedError;

        fn get_customer(&self, customer_id: &str) -> BoxFuture<'_, Customer, Self::Error> {
            let call = format!("crm.get_customer({})", customer_id);
            let id = customer_id.to_string();
            Box::pin(async move {
                self.record(call)?;
                Ok(Customer {
                    id,
                    name: "Test Customer".to_string(),
                    phone: Some("+15550000000".to_string()),
                    email: None,
                    extra: Default::default(),
                })
            })
        }

        fn get_order(&self, order_id: &str) -> BoxFuture<'_, Order, Self::Error> {
            let call = format!("crm.get_order({})", order_id);
            let id = order_id.to_string();
            Box::pin(async move {
                self.record(call)?;
                Ok(Order {
                    id,
                    customer_id: "C1".to_string(),
                    status: Some("open".to_string()),
                    extra: Default::default(),
                })
            })
        }

        fn update_order_status(
            &self,
            order_id: &str,
            status: &str,
            notes: Option<&str>,
        ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
            let call = format!(
                "crm.update_order_status({}, {}, {:?})",
                order_id, status, notes
            );
            Box::pin(async move {
                self.record(call)?;
                Ok(Self::receipt())
            })
        }

        fn create_shipping_record(
            &self,
            order_id: &str,
            shipment: ShipmentData,
        ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
            let call = format!(
                "crm.create_shipping_record({}, {:?}/{:?})",
                order_id, shipment.tracking_number, shipment.carrier
            );
            Box::pin(async move {
                self.record(call)?;
                Ok(Self::receipt())
            })
        }
    }

    impl TelephonyService for RecordingProvider {
        type Error = BoxedError;

        fn send_sms(&self, to: &str, message: &str) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
            let call = format!("telephony.send_sms({}, {})", to, message);
            Box::pin(async move {
                self.record(call)?;
                Ok(Self::receipt())
            })
        }

        fn initiate_call(
            &self,
            to: &str,
            caller_id: &str,
            notes: Option<&str>,
        ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
            let call = format!("telephony.initiate_call({}, {}, {:?})", to, caller_id, notes);
            Box::pin(async move {
                self.record(call)?;
                Ok(Self::receipt())
            })
        }
    }

    impl NotificationService for RecordingProvider {
        type Error = BoxedError;

        fn send_notification(
            &self,
            channel: &str,
            message: &str,
            blocks: &[serde_json::Value],
        ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
            let call = format!(
                "notifier.send_notification({}, {}, {} blocks)",
                channel,
                message,
                blocks.len()
            );
            Box::pin(async move {
                self.record(call)?;
                Ok(Self::receipt())
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{CallLog, RecordingProvider};
    use super::*;
    use crate::actions::Action;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    fn actions_from(values: Vec<serde_json::Value>) -> Vec<Action> {
        values
            .into_iter()
            .map(|v| serde_json::from_value(v).unwrap())
            .collect()
    }

    fn dispatcher_with(
        log: &CallLog,
        fail_on: Option<&'static str>,
        policy: FailurePolicy,
    ) -> ActionDispatcher {
        let provider = match fail_on {
            Some(call) => RecordingProvider::failing_on(log.clone(), call),
            None => RecordingProvider::new(log.clone()),
        };
        ActionDispatcher::new(
            Arc::new(provider.clone()),
            Arc::new(provider.clone()),
            Arc::new(provider),
            policy,
        )
    }

    #[tokio::test]
    async fn recognized_action_issues_exactly_its_provider_call() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = dispatcher_with(&log, None, FailurePolicy::Abort);

        let actions = actions_from(vec![json!({
            "type": "send_sms",
            "phoneNumber": "+15551234567",
            "message": "On the way"
        })]);
        let summary = dispatcher.execute(&actions).await.unwrap();

        assert_eq!(summary.executed, 1);
        assert_eq!(summary.skipped, 0);
        assert_eq!(
            *log.lock().unwrap(),
            vec!["telephony.send_sms(+15551234567, On the way)".to_string()]
        );
    }

    #[tokio::test]
    async fn status_update_then_notification_runs_in_order() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = dispatcher_with(&log, None, FailurePolicy::Abort);

        let actions = actions_from(vec![
            json!({"type": "update_order_status", "orderId": "O1", "status": "shipped"}),
            json!({"type": "send_slack_notification", "channel": "#ops", "message": "shipped"}),
        ]);
        let summary = dispatcher.execute(&actions).await.unwrap();

        assert_eq!(summary.executed, 2);
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "crm.update_order_status(O1, shipped, None)".to_string(),
                "notifier.send_notification(#ops, shipped, 0 blocks)".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn unrecognized_action_is_a_noop() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = dispatcher_with(&log, None, FailurePolicy::Abort);

        let actions = actions_from(vec![json!({"type": "bogus"})]);
        let summary = dispatcher.execute(&actions).await.unwrap();

        assert_eq!(summary.executed, 0);
        assert_eq!(summary.skipped, 1);
        assert!(log.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unrecognized_action_does_not_halt_the_sequence() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = dispatcher_with(&log, None, FailurePolicy::Abort);

        let actions = actions_from(vec![
            json!({"type": "escalate_to_human", "queue": "ops"}),
            json!({"type": "send_sms", "phoneNumber": "+1555", "message": "hi"}),
        ]);
        let summary = dispatcher.execute(&actions).await.unwrap();

        assert_eq!(summary.executed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn abort_policy_stops_at_first_failure() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = dispatcher_with(
            &log,
            Some("crm.update_order_status"),
            FailurePolicy::Abort,
        );

        let actions = actions_from(vec![
            json!({"type": "send_sms", "phoneNumber": "+1555", "message": "first"}),
            json!({"type": "update_order_status", "orderId": "O1", "status": "shipped"}),
            json!({"type": "send_slack_notification", "channel": "#ops", "message": "never"}),
        ]);
        let err = dispatcher.execute(&actions).await.unwrap_err();

        match err {
            DispatchError::ActionFailed { index, kind, .. } => {
                assert_eq!(index, 1);
                assert_eq!(kind, "update_order_status");
            }
        }
        // Action 0 executed, action 1 was attempted, action 2 never ran.
        let calls = log.lock().unwrap();
        assert_eq!(calls.len(), 2);
        assert!(calls[0].starts_with("telephony.send_sms"));
        assert!(calls[1].starts_with("crm.update_order_status"));
    }

    #[tokio::test]
    async fn continue_policy_attempts_every_action_and_collects_failures() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = dispatcher_with(
            &log,
            Some("crm.update_order_status"),
            FailurePolicy::Continue,
        );

        let actions = actions_from(vec![
            json!({"type": "update_order_status", "orderId": "O1", "status": "shipped"}),
            json!({"type": "send_slack_notification", "channel": "#ops", "message": "still sent"}),
        ]);
        let summary = dispatcher.execute(&actions).await.unwrap();

        assert_eq!(summary.executed, 1);
        assert_eq!(summary.failures.len(), 1);
        assert_eq!(summary.failures[0].index, 0);
        assert_eq!(summary.failures[0].kind, "update_order_status");
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn make_call_routes_with_optional_notes() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = dispatcher_with(&log, None, FailurePolicy::Abort);

        let actions = actions_from(vec![json!({
            "type": "make_call",
            "phoneNumber": "+15551234567",
            "callerId": "+15557654321",
            "notes": "confirm delivery window"
        })]);
        dispatcher.execute(&actions).await.unwrap();

        assert_eq!(
            *log.lock().unwrap(),
            vec![
                "telephony.initiate_call(+15551234567, +15557654321, Some(\"confirm delivery window\"))"
                    .to_string()
            ]
        );
    }
}
