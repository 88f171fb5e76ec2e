//! SMS gateway client.
//!
//! [`SmsClient`] posts a JSON batch of `{dest, msg}` pairs to the configured
//! gateway URL. Success means the gateway answered with exactly HTTP 200.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

use crate::config::SmsConfig;

/// HTTP request timeout for a single gateway call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for SMS gateway failures.
#[derive(Debug, thiserror::Error)]
pub enum SmsError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The gateway answered with something other than 200.
    #[error("SMS gateway returned HTTP {0}")]
    HttpStatus(u16),

    /// There was nobody to send to.
    #[error("No destination phone numbers configured")]
    NoDestinations,
}

// ---------------------------------------------------------------------------
// Sender trait
// ---------------------------------------------------------------------------

/// Capability to deliver one text to a list of phone numbers.
#[async_trait]
pub trait SmsSender: Send + Sync {
    /// Send `text` to every number in `destinations`.
    ///
    /// Returns `true` only if the gateway accepted the whole batch.
    async fn send(&self, destinations: &[String], text: &str) -> bool;
}

// ---------------------------------------------------------------------------
// Wire format
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct SmsRequest<'a> {
    source_addr: &'a str,
    username: &'a str,
    password: &'a str,
    messages: Vec<SmsMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct SmsMessage<'a> {
    dest: &'a str,
    msg: &'a str,
}

impl<'a> SmsRequest<'a> {
    fn new(config: &'a SmsConfig, destinations: &'a [String], text: &'a str) -> Self {
        Self {
            source_addr: &config.source_addr,
            username: &config.username,
            password: &config.password,
            messages: destinations
                .iter()
                .map(|dest| SmsMessage { dest, msg: text })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// SmsClient
// ---------------------------------------------------------------------------

/// Sends SMS batches through the HTTP gateway.
pub struct SmsClient {
    config: SmsConfig,
    client: reqwest::Client,
}

impl SmsClient {
    /// Create a client with a pre-configured HTTP timeout.
    pub fn new(config: SmsConfig) -> Result<Self, SmsError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, client })
    }

    /// Execute a single POST and check the response status.
    async fn try_send(&self, destinations: &[String], text: &str) -> Result<(), SmsError> {
        if destinations.is_empty() {
            return Err(SmsError::NoDestinations);
        }

        let payload = SmsRequest::new(&self.config, destinations, text);
        let response = self
            .client
            .post(&self.config.url)
            .json(&payload)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            return Err(SmsError::HttpStatus(response.status().as_u16()));
        }
        Ok(())
    }
}

#[async_trait]
impl SmsSender for SmsClient {
    async fn send(&self, destinations: &[String], text: &str) -> bool {
        match self.try_send(destinations, text).await {
            Ok(()) => {
                tracing::info!(recipients = destinations.len(), "SMS sent");
                true
            }
            Err(e) => {
                tracing::warn!(recipients = destinations.len(), error = %e, "SMS delivery failed");
                false
            }
        }
    }
}

/// Sender used when no gateway is configured. Every send reports failure.
#[derive(Debug, Default)]
pub struct DisabledSms;

#[async_trait]
impl SmsSender for DisabledSms {
    async fn send(&self, destinations: &[String], _text: &str) -> bool {
        tracing::debug!(
            recipients = destinations.len(),
            "SMS gateway not configured, skipping send"
        );
        false
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
