//! Outbound transactional email for Chargeback Prep.
//!
//! - [`Mailer`] — the provider-agnostic send capability the intake handler
//!   depends on.
//! - [`ResendMailer`] — production implementation backed by the Resend
//!   HTTP API.
//! - [`MailerConfig`] — provider credentials loaded from the environment.

pub mod mailer;
pub mod resend;

pub use mailer::{DeliveryError, Mailer, OutboundEmail};
pub use resend::{MailerConfig, ResendMailer};
