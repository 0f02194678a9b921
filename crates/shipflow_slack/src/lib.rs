// --- File: crates/shipflow_slack/src/lib.rs ---

pub mod logic;
/// This module provides the Slack implementation of the notification service trait.
pub mod service;

pub use logic::{shipping_update_blocks, SlackBlock, SlackError};
pub use service::SlackNotificationService;
