//! Email delivery via the Resend HTTP API.
//!
//! [`ResendMailer`] posts each [`OutboundEmail`] to `{api_base}/emails` with
//! a bearer token. Configuration is loaded from environment variables; if
//! `RESEND_API_KEY` is not set, [`MailerConfig::from_env`] returns `None`
//! and no mailer should be constructed.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::mailer::{DeliveryError, Mailer, OutboundEmail};

/// Default Resend API root.
pub const DEFAULT_API_BASE: &str = "https://api.resend.com";

/// HTTP request timeout for a single send.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// MailerConfig
// ---------------------------------------------------------------------------

/// Credentials and endpoint for the Resend API.
#[derive(Clone)]
pub struct MailerConfig {
    pub api_key: String,
    /// API root without trailing slash (defaults to [`DEFAULT_API_BASE`]).
    pub api_base: String,
}

impl std::fmt::Debug for MailerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailerConfig")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl MailerConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` if `RESEND_API_KEY` is unset or blank.
    ///
    /// | Variable          | Required | Default                  |
    /// |-------------------|----------|--------------------------|
    /// | `RESEND_API_KEY`  | yes      | —                        |
    /// | `RESEND_API_BASE` | no       | `https://api.resend.com` |
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("RESEND_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())?;
        let api_base = std::env::var("RESEND_API_BASE")
            .ok()
            .filter(|b| !b.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        Some(Self::new(api_key, api_base))
    }

    pub fn new(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}

impl<'a> From<&'a OutboundEmail> for SendEmailRequest<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
            text: email.text.as_deref(),
            reply_to: email.reply_to.as_deref(),
        }
    }
}

#[derive(Deserialize)]
struct SendEmailResponse {
    id: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    message: String,
}

// ---------------------------------------------------------------------------
// ResendMailer
// ---------------------------------------------------------------------------

/// Sends email through Resend. Cheap to share behind an `Arc`; the inner
/// HTTP client pools connections.
pub struct ResendMailer {
    client: reqwest::Client,
    config: MailerConfig,
}

impl ResendMailer {
    /// Create a mailer with a pre-configured HTTP client.
    pub fn new(config: MailerConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/emails", self.config.api_base)
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&SendEmailRequest::from(email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| {
                    if body.trim().is_empty() {
                        status.canonical_reason().unwrap_or("unknown error").to_string()
                    } else {
                        body
                    }
                });
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        match response.json::<SendEmailResponse>().await {
            Ok(sent) => tracing::info!(id = %sent.id, subject = %email.subject, "Email sent"),
            Err(e) => tracing::warn!(error = %e, "Email sent but response body was unreadable"),
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
