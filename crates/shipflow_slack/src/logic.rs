// --- File: crates/shipflow_slack/src/logic.rs ---

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::error;

use shipflow_config::SlackConfig;
use shipflow_common::services::{Customer, Order, ProviderReceipt, ShipmentData};
use shipflow_common::HTTP_CLIENT;

/// Placeholder rendered for shipment fields the CRM has not filled in yet.
const MISSING_FIELD: &str = "N/A";

// --- Error Handling ---
#[derive(Error, Debug)]
pub enum SlackError {
    #[error("Slack API request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Slack API returned an error: {0}")]
    ApiError(String),
}

// --- Block Kit Structures ---

/// A Block Kit text object.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SlackText {
    #[serde(rename = "plain_text")]
    Plain { text: String, emoji: bool },
    #[serde(rename = "mrkdwn")]
    Mrkdwn { text: String },
}

impl SlackText {
    fn plain(text: impl Into<String>) -> Self {
        SlackText::Plain {
            text: text.into(),
            emoji: true,
        }
    }

    fn mrkdwn(text: impl Into<String>) -> Self {
        SlackText::Mrkdwn { text: text.into() }
    }
}

/// A Block Kit interactive element.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SlackElement {
    #[serde(rename = "button")]
    Button { text: SlackText, url: String },
}

/// A Block Kit layout block.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum SlackBlock {
    #[serde(rename = "header")]
    Header { text: SlackText },
    #[serde(rename = "section")]
    Section { fields: Vec<SlackText> },
    #[serde(rename = "actions")]
    Actions { elements: Vec<SlackElement> },
}

// --- Message Formatting ---

/// Build the Block Kit rendering of a shipping update.
///
/// Pure and deterministic: header naming the order, customer/status summary,
/// tracking/carrier summary (absent fields render the `N/A` placeholder),
/// and a button linking to the order in the BatsCRM portal.
pub fn shipping_update_blocks(
    order: &Order,
    shipment: &ShipmentData,
    customer: &Customer,
    portal_url: &str,
) -> Vec<SlackBlock> {
    vec![
        SlackBlock::Header {
            text: SlackText::plain(format!("Shipping Update: Order #{}", order.id)),
        },
        SlackBlock::Section {
            fields: vec![
                SlackText::mrkdwn(format!("*Customer:*\n{}", customer.name)),
                SlackText::mrkdwn(format!(
                    "*Status:*\n{}",
                    shipment.status.as_deref().unwrap_or(MISSING_FIELD)
                )),
            ],
        },
        SlackBlock::Section {
            fields: vec![
                SlackText::mrkdwn(format!(
                    "*Tracking #:*\n{}",
                    shipment.tracking_number.as_deref().unwrap_or(MISSING_FIELD)
                )),
                SlackText::mrkdwn(format!(
                    "*Carrier:*\n{}",
                    shipment.carrier.as_deref().unwrap_or(MISSING_FIELD)
                )),
            ],
        },
        SlackBlock::Actions {
            elements: vec![SlackElement::Button {
                text: SlackText::plain("View in BatsCRM"),
                url: format!("{}/orders/{}", portal_url, order.id),
            }],
        },
    ]
}

// --- API Calls ---

#[derive(Serialize, Debug)]
struct PostMessageBody<'a> {
    channel: &'a str,
    text: &'a str,
    blocks: &'a [Value],
}

/// The Slack Web API response envelope.
#[derive(Deserialize, Debug)]
struct SlackApiResponse {
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    ts: Option<String>,
}

/// Post a message to a channel via chat.postMessage.
pub async fn send_notification(
    config: &SlackConfig,
    channel: &str,
    text: &str,
    blocks: &[Value],
) -> Result<ProviderReceipt, SlackError> {
    let url = format!("{}/chat.postMessage", config.api_url);
    let response = HTTP_CLIENT
        .post(&url)
        .bearer_auth(&config.bot_token)
        .json(&PostMessageBody {
            channel,
            text,
            blocks,
        })
        .send()
        .await?;

    let body: SlackApiResponse = response.json().await?;
    if !body.ok {
        let message = body.error.unwrap_or_else(|| "unknown_error".to_string());
        error!("Slack rejected chat.postMessage: {}", message);
        return Err(SlackError::ApiError(message));
    }

    Ok(ProviderReceipt {
        id: body.ts,
        status: "ok".to_string(),
    })
}
