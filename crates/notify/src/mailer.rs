//! The send capability and its message type.

use async_trait::async_trait;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for email delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The HTTP request to the provider failed (network, DNS, timeout, etc.).
    #[error("Email provider request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("Email provider rejected the message (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },
}

// ---------------------------------------------------------------------------
// OutboundEmail
// ---------------------------------------------------------------------------

/// A fully addressed email ready to hand to a [`Mailer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Sender, either `addr@host` or `Display Name <addr@host>`.
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    /// Plain-text alternative for clients that prefer it.
    pub text: Option<String>,
    pub reply_to: Option<String>,
}

// ---------------------------------------------------------------------------
// Mailer
// ---------------------------------------------------------------------------

/// Sends one email through an external delivery provider.
///
/// Implementations must not retry on their own; a failed send is reported
/// to the caller as-is.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), DeliveryError>;
}
