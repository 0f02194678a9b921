// --- File: crates/shipflow_slack/src/service.rs ---

use serde_json::Value;
use shipflow_config::SlackConfig;
use shipflow_common::services::{BoxFuture, BoxedError, NotificationService, ProviderReceipt};

use crate::logic;

/// Slack implementation of the notification service trait.
pub struct SlackNotificationService {
    config: SlackConfig,
}

impl SlackNotificationService {
    /// Create a new Slack service from its configuration section.
    pub fn new(config: SlackConfig) -> Self {
        Self { config }
    }
}

impl NotificationService for SlackNotificationService {
    type Error = BoxedError;

    fn send_notification(
        &self,
        channel: &str,
        message: &str,
        blocks: &[Value],
    ) -> BoxFuture<'_, ProviderReceipt, Self::Error> {
        let channel = channel.to_string();
        let message = message.to_string();
        let blocks = blocks.to_vec();
        Box::pin(async move {
            logic::send_notification(&self.config, &channel, &message, &blocks)
                .await
                .map_err(BoxedError::new)
        })
    }
}
