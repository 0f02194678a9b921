// --- File: crates/shipflow_dialpad/src/service.rs ---

use shipflow_config::DialpadConfig;
use shipflow_common::services::{BoxFuture, BoxedError, ProviderReceipt, TelephonyService};

use crate::logic;

/// Dialpad implementation of the telephony service trait.
pub struct DialpadTelephonyService {
    config: DialpadConfig,
}

impl DialpadTelephonyService {
    /// Create a new Dialpad service from its configuration section.
    pub fn new(config: DialpadConfig) -> Self {
        Self { config }
    }
}

impl TelephonyService for DialpadTelephonyService {
    type Error = BoxedError;

    fn send_sms(&self, to: &str, message: &str) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
        let to = to.to_string();
        let message = message.to_string();
        Box::pin(async move {
            logic::send_sms(&self.config, &to, &message)
                .await
                .map_err(BoxedError::new)
        })
    }

    fn initiate_call(
        &self,
        to: &str,
        caller_id: &str,
        notes: Option<&str>,
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
        let to = to.to_string();
        // Fall back to the configured caller id when the action left it blank.
        let caller_id = if caller_id.is_empty() {
            self.config.caller_id.clone().unwrap_or_default()
        } else {
            caller_id.to_string()
        };
        let notes = notes.map(|n| n.to_string());
        Box::pin(async move {
            logic::initiate_call(&self.config, &to, &caller_id, notes.as_deref())
                .await
                .map_err(BoxedError::new)
        })
    }
}
